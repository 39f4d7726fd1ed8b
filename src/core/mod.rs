/*!
 * Core Module
 * Error types shared by every subsystem
 */

pub mod errors;

// Re-export for convenience
pub use errors::*;
