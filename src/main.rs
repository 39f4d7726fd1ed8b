/*!
 * Realm Binder - Demo Host
 *
 * Starts an in-memory container with a security environment and a realm
 * binder, then tears it down on Ctrl+C.
 */

use realm_binder::{
    init_tracing, BinderConfig, ContainerHost, DefaultEnvironment, DefaultSecurityManager,
    EnvironmentLoaderListener, Realm, RealmBinder, ResourceRealm,
};
use std::sync::Arc;
use tracing::info;

/// Stand-in for the database access facade shared with the realms
#[derive(Debug)]
struct DataSource {
    url: String,
}

/// Realm that authenticates against a directory and never touches the database
struct DirectoryRealm;

impl Realm<DataSource> for DirectoryRealm {
    fn name(&self) -> &str {
        "directory"
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = BinderConfig::from_env()?;
    init_tracing(&config);

    info!("Realm binder demo starting...");

    let url = std::env::var("REALM_BINDER_DATABASE_URL")
        .unwrap_or_else(|_| "postgres://localhost/accounts".to_string());
    let data_source = Arc::new(DataSource { url });
    info!(url = %data_source.url, "Data source configured");

    let accounts = Arc::new(ResourceRealm::<DataSource>::new("accounts"));
    let audit = Arc::new(ResourceRealm::<DataSource>::new("audit"));
    let manager = Arc::new(DefaultSecurityManager::<DataSource>::new());
    manager.add_realm(accounts.clone());
    manager.add_realm(Arc::new(DirectoryRealm));
    manager.add_realm(audit.clone());
    let environment = Arc::new(DefaultEnvironment::<DataSource>::new(manager));

    let binder = RealmBinder::try_new(Some(data_source), config.selection)?;

    let host = ContainerHost::<DataSource>::new("realm-binder-demo")
        .with_listener(Arc::new(EnvironmentLoaderListener::<DataSource>::new(environment)))
        .with_listener(Arc::new(binder));

    host.start()?;
    info!(
        accounts = accounts.is_bound(),
        audit = audit.is_bound(),
        "Application ready - press Ctrl+C to exit"
    );

    tokio::signal::ctrl_c().await?;

    host.stop()?;
    info!(
        accounts = accounts.is_bound(),
        audit = audit.is_bound(),
        "Application stopped"
    );
    Ok(())
}
