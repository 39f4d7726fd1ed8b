/*!
 * Lifecycle Listeners
 * Container callbacks for environment-ready and environment-torndown
 */

use super::context::LifecycleEvent;
use crate::core::BinderResult;
use crate::security::Environment;
use std::sync::Arc;
use tracing::info;

/// Receiver of container lifecycle events
///
/// Events are delivered serially: ready once the container has configured the
/// application, torndown when it shuts the application down. An error aborts
/// the container's startup or shutdown.
pub trait LifecycleListener<H>: Send + Sync {
    /// Listener name, used in diagnostics
    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }

    fn on_environment_ready(&self, event: &LifecycleEvent<'_, H>) -> BinderResult<()>;

    fn on_environment_torndown(&self, event: &LifecycleEvent<'_, H>) -> BinderResult<()>;
}

/// Registers a security environment with the container context
///
/// Must be registered ahead of any listener that looks the environment up,
/// so that it is installed first on ready and removed last on torndown.
pub struct EnvironmentLoaderListener<H> {
    environment: Arc<dyn Environment<H>>,
}

impl<H> EnvironmentLoaderListener<H> {
    pub fn new(environment: Arc<dyn Environment<H>>) -> Self {
        Self { environment }
    }
}

impl<H: Send + Sync> LifecycleListener<H> for EnvironmentLoaderListener<H> {
    fn name(&self) -> &str {
        "environment-loader"
    }

    fn on_environment_ready(&self, event: &LifecycleEvent<'_, H>) -> BinderResult<()> {
        let context = event.context();
        context.set_environment(Arc::clone(&self.environment));
        info!(context = %context.name(), "Security environment registered");
        Ok(())
    }

    fn on_environment_torndown(&self, event: &LifecycleEvent<'_, H>) -> BinderResult<()> {
        let context = event.context();
        if context.remove_environment().is_some() {
            info!(context = %context.name(), "Security environment removed");
        }
        Ok(())
    }
}
