/*!
 * Default Environment
 * Security environment wrapping a single security manager
 */

use super::traits::{Environment, SecurityManager};
use std::sync::Arc;

/// Environment that always returns the manager it was built with
pub struct DefaultEnvironment<H> {
    security_manager: Arc<dyn SecurityManager<H>>,
}

impl<H> DefaultEnvironment<H> {
    pub fn new(security_manager: Arc<dyn SecurityManager<H>>) -> Self {
        Self { security_manager }
    }
}

impl<H: Send + Sync> Environment<H> for DefaultEnvironment<H> {
    fn security_manager(&self) -> Arc<dyn SecurityManager<H>> {
        Arc::clone(&self.security_manager)
    }
}
