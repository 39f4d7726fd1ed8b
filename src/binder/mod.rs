/*!
 * Binder Module
 * Binds a shared resource handle to the selected realms of the active
 * security manager when the environment comes up, and releases it when the
 * environment is torn down
 *
 * ## Usage
 * ```ignore
 * use realm_binder::{RealmBinder, SelectionPolicy};
 *
 * let binder = RealmBinder::builder()
 *     .with_resource(pool)
 *     .with_selection(SelectionPolicy::First)
 *     .build()?;
 *
 * host.add_listener(Arc::new(binder));
 * ```
 */

mod binder;
mod hooks;
mod report;

pub use binder::{RealmBinder, RealmBinderBuilder};
pub use hooks::{BindRealm, RealmHook, UnbindRealm};
pub use report::BindingReport;
