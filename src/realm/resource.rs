/*!
 * Resource Realm
 * Reusable bindable realm that keeps the handle it was given
 */

use super::traits::{BindableRealm, Realm};
use crate::core::{RealmError, RealmResult};
use parking_lot::RwLock;
use std::sync::Arc;
use tracing::debug;

/// Realm that stores the resource handle between bind and unbind
///
/// Binding the handle it already holds is a no-op and unbinding an unbound
/// realm does nothing, so repeated lifecycle events stay harmless.
pub struct ResourceRealm<H> {
    name: String,
    handle: RwLock<Option<Arc<H>>>,
}

impl<H> ResourceRealm<H> {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            handle: RwLock::new(None),
        }
    }

    #[inline]
    pub fn is_bound(&self) -> bool {
        self.handle.read().is_some()
    }

    /// Handle currently bound to this realm
    pub fn handle(&self) -> Option<Arc<H>> {
        self.handle.read().clone()
    }
}

impl<H: Send + Sync> Realm<H> for ResourceRealm<H> {
    fn name(&self) -> &str {
        &self.name
    }

    fn as_bindable(&self) -> Option<&dyn BindableRealm<H>> {
        Some(self)
    }
}

impl<H: Send + Sync> BindableRealm<H> for ResourceRealm<H> {
    fn name(&self) -> &str {
        &self.name
    }

    fn bind(&self, handle: Arc<H>) -> RealmResult<()> {
        let mut slot = self.handle.write();
        match slot.as_ref() {
            Some(current) if Arc::ptr_eq(current, &handle) => {
                debug!(realm = %self.name, "Realm already bound to this handle");
                Ok(())
            }
            Some(_) => Err(RealmError::AlreadyBound(self.name.clone())),
            None => {
                *slot = Some(handle);
                Ok(())
            }
        }
    }

    fn unbind(&self, handle: &Arc<H>) -> RealmResult<()> {
        let mut slot = self.handle.write();
        match slot.as_ref() {
            Some(current) if Arc::ptr_eq(current, handle) => {
                *slot = None;
                Ok(())
            }
            Some(_) => Err(RealmError::Rejected {
                realm: self.name.clone(),
                reason: "bound to a different resource handle".to_string(),
            }),
            None => {
                debug!(realm = %self.name, "Realm not bound, nothing to release");
                Ok(())
            }
        }
    }
}
