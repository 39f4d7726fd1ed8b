/*!
 * Realm Hooks
 * The action applied to each selected realm on ready and on torndown
 */

use crate::core::RealmResult;
use crate::realm::BindableRealm;
use std::sync::Arc;
use tracing::debug;

/// Action applied to one selected realm during a lifecycle event
///
/// Replace the defaults to decorate or change how realms receive and release
/// the handle. Custom hooks normally still delegate to the realm.
pub trait RealmHook<H>: Send + Sync {
    fn apply(&self, realm: &dyn BindableRealm<H>, handle: &Arc<H>) -> RealmResult<()>;
}

impl<H, F> RealmHook<H> for F
where
    F: Fn(&dyn BindableRealm<H>, &Arc<H>) -> RealmResult<()> + Send + Sync,
{
    fn apply(&self, realm: &dyn BindableRealm<H>, handle: &Arc<H>) -> RealmResult<()> {
        self(realm, handle)
    }
}

/// Default ready hook: hands the resource handle to the realm
#[derive(Debug, Clone, Copy, Default)]
pub struct BindRealm;

impl<H> RealmHook<H> for BindRealm {
    fn apply(&self, realm: &dyn BindableRealm<H>, handle: &Arc<H>) -> RealmResult<()> {
        debug!(realm = %realm.name(), "Binding realm to resource handle");
        realm.bind(Arc::clone(handle))
    }
}

/// Default torndown hook: asks the realm to release the resource handle
#[derive(Debug, Clone, Copy, Default)]
pub struct UnbindRealm;

impl<H> RealmHook<H> for UnbindRealm {
    fn apply(&self, realm: &dyn BindableRealm<H>, handle: &Arc<H>) -> RealmResult<()> {
        debug!(realm = %realm.name(), "Releasing realm's resource handle");
        realm.unbind(handle)
    }
}
