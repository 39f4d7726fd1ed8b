/*!
 * Container Host Integration Tests
 * Environment loader ordering and end-to-end binding of resource realms
 */

use super::common::*;
use parking_lot::Mutex;
use pretty_assertions::assert_eq;
use realm_binder::{
    BinderError, BinderResult, ContainerHost, DefaultEnvironment, DefaultSecurityManager,
    EnvironmentLoaderListener, LifecycleEvent, LifecycleListener, LifecycleStage, RealmBinder,
    ResourceRealm, SelectionPolicy,
};
use std::sync::Arc;

/// Listener that records which events reached it
struct Probe {
    name: String,
    seen: Arc<Mutex<Vec<(String, LifecycleStage)>>>,
    fail: bool,
}

impl LifecycleListener<Pool> for Probe {
    fn name(&self) -> &str {
        &self.name
    }

    fn on_environment_ready(&self, event: &LifecycleEvent<'_, Pool>) -> BinderResult<()> {
        self.seen.lock().push((self.name.clone(), event.stage()));
        if self.fail {
            return Err(BinderError::Configuration(format!("{} refused", self.name)));
        }
        Ok(())
    }

    fn on_environment_torndown(&self, event: &LifecycleEvent<'_, Pool>) -> BinderResult<()> {
        self.seen.lock().push((self.name.clone(), event.stage()));
        Ok(())
    }
}

fn probe(name: &str, seen: &Arc<Mutex<Vec<(String, LifecycleStage)>>>, fail: bool) -> Arc<Probe> {
    Arc::new(Probe {
        name: name.to_string(),
        seen: Arc::clone(seen),
        fail,
    })
}

fn resource_realms() -> (
    Arc<ResourceRealm<Pool>>,
    Arc<ResourceRealm<Pool>>,
    Arc<EnvironmentLoaderListener<Pool>>,
) {
    let accounts = Arc::new(ResourceRealm::new("accounts"));
    let audit = Arc::new(ResourceRealm::new("audit"));

    let manager = Arc::new(DefaultSecurityManager::<Pool>::new());
    manager.add_realm(accounts.clone());
    manager.add_realm(plain("directory"));
    manager.add_realm(audit.clone());

    let environment = Arc::new(DefaultEnvironment::<Pool>::new(manager));
    let loader = Arc::new(EnvironmentLoaderListener::<Pool>::new(environment));
    (accounts, audit, loader)
}

#[test]
fn test_full_lifecycle_binds_and_releases() {
    let (accounts, audit, loader) = resource_realms();
    let shared = pool();
    let binder = RealmBinder::new(Arc::clone(&shared));

    let host = ContainerHost::<Pool>::new("app")
        .with_listener(loader)
        .with_listener(Arc::new(binder));

    host.start().unwrap();
    assert!(host.context().environment().is_some());
    assert!(Arc::ptr_eq(&accounts.handle().unwrap(), &shared));
    assert!(Arc::ptr_eq(&audit.handle().unwrap(), &shared));

    host.stop().unwrap();
    assert!(!accounts.is_bound());
    assert!(!audit.is_bound());
    assert!(host.context().environment().is_none());
}

#[test]
fn test_full_lifecycle_with_first_selection() {
    let (accounts, audit, loader) = resource_realms();
    let binder = RealmBinder::try_new(Some(pool()), Some(SelectionPolicy::First)).unwrap();

    let host = ContainerHost::<Pool>::new("app")
        .with_listener(loader)
        .with_listener(Arc::new(binder));

    host.start().unwrap();
    assert!(accounts.is_bound());
    assert!(!audit.is_bound());

    host.stop().unwrap();
    assert!(!accounts.is_bound());
}

#[test]
fn test_restart_rebinds_same_handle() {
    let (accounts, _audit, loader) = resource_realms();
    let binder = RealmBinder::new(pool());

    let host = ContainerHost::<Pool>::new("app")
        .with_listener(loader)
        .with_listener(Arc::new(binder));

    host.start().unwrap();
    host.start().unwrap();
    assert!(accounts.is_bound());
    host.stop().unwrap();
    assert!(!accounts.is_bound());
}

#[test]
fn test_binder_before_loader_fails_startup() {
    let (accounts, _audit, loader) = resource_realms();
    let binder = RealmBinder::new(pool());

    let host = ContainerHost::<Pool>::new("app")
        .with_listener(Arc::new(binder))
        .with_listener(loader);

    let err = host.start().unwrap_err();
    assert!(matches!(err, BinderError::Configuration(_)));
    assert!(!accounts.is_bound());
    // The loader never ran
    assert!(host.context().environment().is_none());
}

#[test]
fn test_second_binder_conflicts_on_shared_realm() {
    let (accounts, _audit, loader) = resource_realms();

    let host = ContainerHost::<Pool>::new("app")
        .with_listener(loader)
        .with_listener(Arc::new(RealmBinder::new(pool())))
        .with_listener(Arc::new(RealmBinder::new(pool())));

    let err = host.start().unwrap_err();
    assert_eq!(err.realm(), Some("accounts"));
    assert!(matches!(err, BinderError::BindFailure { .. }));
    assert!(accounts.is_bound());
}

#[test]
fn test_host_event_order() {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let host = ContainerHost::<Pool>::new("app")
        .with_listener(probe("a", &seen, false))
        .with_listener(probe("b", &seen, false))
        .with_listener(probe("c", &seen, false));

    assert_eq!(host.listener_count(), 3);
    host.start().unwrap();
    host.stop().unwrap();

    let order: Vec<(String, LifecycleStage)> = seen.lock().clone();
    assert_eq!(
        order,
        vec![
            ("a".to_string(), LifecycleStage::Ready),
            ("b".to_string(), LifecycleStage::Ready),
            ("c".to_string(), LifecycleStage::Ready),
            ("c".to_string(), LifecycleStage::Torndown),
            ("b".to_string(), LifecycleStage::Torndown),
            ("a".to_string(), LifecycleStage::Torndown),
        ]
    );
}

#[test]
fn test_host_startup_is_fail_fast() {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let mut host = ContainerHost::<Pool>::new("app");
    host.add_listener(probe("a", &seen, false));
    host.add_listener(probe("b", &seen, true));
    host.add_listener(probe("c", &seen, false));

    let err = host.start().unwrap_err();
    assert_eq!(err, BinderError::Configuration("b refused".to_string()));

    let names: Vec<String> = seen.lock().iter().map(|(n, _)| n.clone()).collect();
    assert_eq!(names, vec!["a", "b"]);
}
