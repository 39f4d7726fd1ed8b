/*!
 * Container Module
 * Hosting container context, lifecycle events, and listener dispatch
 *
 * The container owns the context that the security environment is registered
 * with, and delivers environment-ready and environment-torndown events to its
 * listeners serially.
 */

mod context;
mod host;
mod listener;

pub use context::{ContainerContext, LifecycleEvent, LifecycleStage};
pub use host::ContainerHost;
pub use listener::{EnvironmentLoaderListener, LifecycleListener};
