/*!
 * Realm Module
 * The capability contract a realm satisfies to receive a resource handle
 */

mod resource;
mod traits;

pub use resource::ResourceRealm;
pub use traits::{BindableRealm, Realm};
