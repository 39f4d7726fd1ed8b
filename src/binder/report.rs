/*!
 * Binding Report
 * Summary of one lifecycle event handled by the binder
 */

use crate::container::{LifecycleEvent, LifecycleStage};
use crate::selection::SelectionPolicy;
use serde::{Deserialize, Serialize};
use serde_with::{serde_as, TimestampSeconds};
use std::time::SystemTime;
use uuid::Uuid;

/// Realms a lifecycle event was applied to, in the order they were handled
#[serde_as]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BindingReport {
    pub event_id: Uuid,
    pub stage: LifecycleStage,
    pub selection: SelectionPolicy,
    pub realms: Vec<String>,
    #[serde_as(as = "TimestampSeconds<i64>")]
    pub occurred_at: SystemTime,
    #[serde_as(as = "TimestampSeconds<i64>")]
    pub completed_at: SystemTime,
}

impl BindingReport {
    pub fn new<H>(
        event: &LifecycleEvent<'_, H>,
        selection: SelectionPolicy,
        realms: Vec<String>,
    ) -> Self {
        Self {
            event_id: event.id(),
            stage: event.stage(),
            selection,
            realms,
            occurred_at: event.occurred_at(),
            completed_at: SystemTime::now(),
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.realms.is_empty()
    }
}
