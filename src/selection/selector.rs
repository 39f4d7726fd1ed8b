/*!
 * Realm Selector
 * Filters a realm collection down to the bindable realms a policy selects
 */

use super::policy::SelectionPolicy;
use crate::realm::{BindableRealm, Realm};
use std::sync::Arc;

/// Select the bindable realms that participate in a lifecycle event
///
/// Keeps the collection's order, skips realms without the bindable
/// capability, and stops after the policy's limit. An empty result is valid.
pub fn select_realms<'a, H>(
    realms: &'a [Arc<dyn Realm<H>>],
    policy: SelectionPolicy,
) -> Vec<&'a dyn BindableRealm<H>> {
    let bindable = realms.iter().filter_map(|realm| realm.as_bindable());
    match policy.limit() {
        Some(limit) => bindable.take(limit).collect(),
        None => bindable.collect(),
    }
}
