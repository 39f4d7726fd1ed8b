/*!
 * Container Host
 * Delivers lifecycle events to registered listeners
 */

use super::context::{ContainerContext, LifecycleEvent};
use super::listener::LifecycleListener;
use crate::core::BinderResult;
use std::sync::Arc;
use tracing::{error, info};

/// Minimal container that owns a context and drives its listeners
///
/// Ready is delivered in registration order and torndown in reverse order.
/// The first listener error stops delivery and is returned to the caller.
pub struct ContainerHost<H> {
    context: ContainerContext<H>,
    listeners: Vec<Arc<dyn LifecycleListener<H>>>,
}

impl<H> ContainerHost<H> {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            context: ContainerContext::new(name),
            listeners: Vec::new(),
        }
    }

    /// Register a listener
    #[must_use]
    pub fn with_listener(mut self, listener: Arc<dyn LifecycleListener<H>>) -> Self {
        self.listeners.push(listener);
        self
    }

    pub fn add_listener(&mut self, listener: Arc<dyn LifecycleListener<H>>) {
        self.listeners.push(listener);
    }

    #[inline]
    pub fn context(&self) -> &ContainerContext<H> {
        &self.context
    }

    #[inline]
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    /// Deliver environment-ready to every listener
    pub fn start(&self) -> BinderResult<()> {
        let event = LifecycleEvent::ready(&self.context);
        info!(context = %self.context.name(), event_id = %event.id(), "Container starting");

        for listener in &self.listeners {
            listener.on_environment_ready(&event).map_err(|e| {
                error!(listener = %listener.name(), error = %e, "Startup aborted");
                e
            })?;
        }

        info!(
            context = %self.context.name(),
            listeners = self.listeners.len(),
            "Container started"
        );
        Ok(())
    }

    /// Deliver environment-torndown to every listener, last registered first
    pub fn stop(&self) -> BinderResult<()> {
        let event = LifecycleEvent::torndown(&self.context);
        info!(context = %self.context.name(), event_id = %event.id(), "Container stopping");

        for listener in self.listeners.iter().rev() {
            listener.on_environment_torndown(&event).map_err(|e| {
                error!(listener = %listener.name(), error = %e, "Shutdown aborted");
                e
            })?;
        }

        info!(context = %self.context.name(), "Container stopped");
        Ok(())
    }
}
