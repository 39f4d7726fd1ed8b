/*!
 * Realm Binder Library
 * Binds a shared resource handle to security realms across the container
 * lifecycle
 */

pub mod binder;
pub mod config;
pub mod container;
pub mod core;
pub mod monitoring;
pub mod realm;
pub mod security;
pub mod selection;

// Re-exports
pub use binder::{BindRealm, BindingReport, RealmBinder, RealmBinderBuilder, RealmHook, UnbindRealm};
pub use config::BinderConfig;
pub use container::{
    ContainerContext, ContainerHost, EnvironmentLoaderListener, LifecycleEvent, LifecycleListener,
    LifecycleStage,
};
pub use core::{BinderError, BinderResult, RealmError, RealmResult};
pub use monitoring::init_tracing;
pub use realm::{BindableRealm, Realm, ResourceRealm};
pub use security::{
    DefaultEnvironment, DefaultSecurityManager, Environment, EnvironmentAccessor,
    RealmSecurityManager, SecurityManager, SecurityManagerAccessor,
};
pub use selection::{select_realms, SelectionPolicy};
