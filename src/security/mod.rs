/*!
 * Security Module
 * Security managers, environments, and manager lookup
 */

pub mod accessor;
pub mod environment;
pub mod manager;
pub mod traits;

// Re-export for convenience
pub use accessor::{EnvironmentAccessor, SecurityManagerAccessor};
pub use environment::DefaultEnvironment;
pub use manager::DefaultSecurityManager;
pub use traits::*;
