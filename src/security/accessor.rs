/*!
 * Security Manager Accessor
 * Looks up the realm-capable security manager at a lifecycle moment
 */

use super::traits::RealmSecurityManager;
use crate::container::ContainerContext;
use crate::core::{BinderError, BinderResult};
use std::sync::Arc;

/// Strategy for obtaining the security manager whose realms get bound
///
/// Only called from lifecycle entry points, after the container has finished
/// configuring the environment.
pub trait SecurityManagerAccessor<H>: Send + Sync {
    fn realm_security_manager(
        &self,
        context: &ContainerContext<H>,
    ) -> BinderResult<Arc<dyn RealmSecurityManager<H>>>;
}

impl<H, F> SecurityManagerAccessor<H> for F
where
    F: Fn(&ContainerContext<H>) -> BinderResult<Arc<dyn RealmSecurityManager<H>>> + Send + Sync,
{
    fn realm_security_manager(
        &self,
        context: &ContainerContext<H>,
    ) -> BinderResult<Arc<dyn RealmSecurityManager<H>>> {
        self(context)
    }
}

/// Reads the security manager from the environment registered in the context
#[derive(Debug, Clone, Copy, Default)]
pub struct EnvironmentAccessor;

impl<H> SecurityManagerAccessor<H> for EnvironmentAccessor {
    fn realm_security_manager(
        &self,
        context: &ContainerContext<H>,
    ) -> BinderResult<Arc<dyn RealmSecurityManager<H>>> {
        let environment = context.environment().ok_or_else(|| {
            BinderError::Configuration(format!(
                "no security environment registered with context '{}'",
                context.name()
            ))
        })?;

        let manager = environment.security_manager();
        let kind = manager.kind().to_string();
        manager.into_realm_manager().ok_or_else(|| {
            BinderError::Configuration(format!(
                "security manager '{}' does not expose a realm collection",
                kind
            ))
        })
    }
}
