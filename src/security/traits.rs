/*!
 * Security Traits
 * Security manager and environment abstractions
 */

use crate::realm::Realm;
use std::sync::Arc;

/// Active security manager of a security environment
pub trait SecurityManager<H>: Send + Sync {
    /// Short description of the manager kind, used in diagnostics
    fn kind(&self) -> &str;

    /// Capability query for managers that own an ordered realm collection
    fn into_realm_manager(self: Arc<Self>) -> Option<Arc<dyn RealmSecurityManager<H>>> {
        None
    }
}

/// Security manager that exposes its realms
pub trait RealmSecurityManager<H>: Send + Sync {
    /// Snapshot of the configured realms, in configuration order
    fn realms(&self) -> Vec<Arc<dyn Realm<H>>>;
}

/// Security environment registered with the container once it is configured
pub trait Environment<H>: Send + Sync {
    /// The environment's active security manager
    fn security_manager(&self) -> Arc<dyn SecurityManager<H>>;
}
