/*!
 * Realm Traits
 * Realm abstraction and the bindable capability
 */

use crate::core::RealmResult;
use std::sync::Arc;

/// An authentication source managed by a security manager
///
/// Realms are owned by the security framework. A realm that can accept a
/// resource handle advertises it through [`Realm::as_bindable`]; every other
/// realm is left alone by the binder.
pub trait Realm<H>: Send + Sync {
    /// Realm name as configured in the security manager
    fn name(&self) -> &str;

    /// Capability query for the bindable contract
    fn as_bindable(&self) -> Option<&dyn BindableRealm<H>> {
        None
    }
}

/// Capability contract for realms backed by a shared resource handle
pub trait BindableRealm<H>: Send + Sync {
    /// Realm name, used in logs and error reports
    fn name(&self) -> &str;

    /// Accept the resource handle and start using it
    fn bind(&self, handle: Arc<H>) -> RealmResult<()>;

    /// Release any use of the resource handle
    fn unbind(&self, handle: &Arc<H>) -> RealmResult<()>;
}
