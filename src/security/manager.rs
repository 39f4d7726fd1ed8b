/*!
 * Default Security Manager
 * In-memory security manager holding an ordered realm collection
 */

use super::traits::{RealmSecurityManager, SecurityManager};
use crate::realm::Realm;
use parking_lot::RwLock;
use std::sync::Arc;
use tracing::debug;

/// Security manager backed by an ordered list of realms
///
/// The owner may add or remove realms at any time; readers always see a
/// consistent snapshot in insertion order.
pub struct DefaultSecurityManager<H> {
    realms: RwLock<Vec<Arc<dyn Realm<H>>>>,
}

impl<H: Send + Sync + 'static> DefaultSecurityManager<H> {
    pub fn new() -> Self {
        Self {
            realms: RwLock::new(Vec::new()),
        }
    }

    /// Create a manager with the given realms, keeping their order
    pub fn with_realms(realms: Vec<Arc<dyn Realm<H>>>) -> Self {
        Self {
            realms: RwLock::new(realms),
        }
    }

    /// Append a realm at the end of the collection
    pub fn add_realm(&self, realm: Arc<dyn Realm<H>>) {
        debug!(realm = %realm.name(), "Adding realm to security manager");
        self.realms.write().push(realm);
    }

    /// Remove every realm with the given name, returning how many were removed
    pub fn remove_realm(&self, name: &str) -> usize {
        let mut realms = self.realms.write();
        let before = realms.len();
        realms.retain(|realm| realm.name() != name);
        let removed = before - realms.len();
        if removed > 0 {
            debug!(realm = %name, removed, "Removed realm from security manager");
        }
        removed
    }

    /// Replace the whole realm collection
    pub fn set_realms(&self, realms: Vec<Arc<dyn Realm<H>>>) {
        *self.realms.write() = realms;
    }

    #[inline]
    pub fn realm_count(&self) -> usize {
        self.realms.read().len()
    }
}

impl<H: Send + Sync + 'static> Default for DefaultSecurityManager<H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<H: Send + Sync + 'static> SecurityManager<H> for DefaultSecurityManager<H> {
    fn kind(&self) -> &str {
        "default"
    }

    fn into_realm_manager(self: Arc<Self>) -> Option<Arc<dyn RealmSecurityManager<H>>> {
        Some(self)
    }
}

impl<H: Send + Sync + 'static> RealmSecurityManager<H> for DefaultSecurityManager<H> {
    fn realms(&self) -> Vec<Arc<dyn Realm<H>>> {
        self.realms.read().clone()
    }
}
