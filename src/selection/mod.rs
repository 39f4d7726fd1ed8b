/*!
 * Selection Module
 * Realm discovery and the policy deciding how many realms participate
 */

mod policy;
mod selector;

pub use policy::SelectionPolicy;
pub use selector::select_realms;
