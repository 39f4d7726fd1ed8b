/*!
 * Selection Policy
 */

use crate::core::BinderError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Which of the bindable realms take part in a lifecycle event
///
/// Further variants (for example selecting realms by name) may be added, so
/// matches outside this crate need a wildcard arm.
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectionPolicy {
    /// Every bindable realm
    #[default]
    All,
    /// Only the first bindable realm encountered
    First,
}

impl SelectionPolicy {
    /// Maximum number of realms selected, `None` when unbounded
    #[inline]
    pub const fn limit(&self) -> Option<usize> {
        match self {
            SelectionPolicy::All => None,
            SelectionPolicy::First => Some(1),
        }
    }
}

impl fmt::Display for SelectionPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SelectionPolicy::All => write!(f, "all"),
            SelectionPolicy::First => write!(f, "first"),
        }
    }
}

impl FromStr for SelectionPolicy {
    type Err = BinderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "all" => Ok(SelectionPolicy::All),
            "first" => Ok(SelectionPolicy::First),
            other => Err(BinderError::Configuration(format!(
                "unknown selection policy '{}', expected 'all' or 'first'",
                other
            ))),
        }
    }
}
