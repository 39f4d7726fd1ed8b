/*!
 * Binder Configuration
 *
 * Environment variables:
 * - REALM_BINDER_SELECTION: `all` or `first` (default: unset, meaning all)
 * - REALM_BINDER_TRACE_JSON: Enable JSON log output (default: false)
 * - RUST_LOG: Log filter (default: info)
 */

use crate::core::{BinderError, BinderResult};
use crate::selection::SelectionPolicy;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const SELECTION_ENV: &str = "REALM_BINDER_SELECTION";
pub const TRACE_JSON_ENV: &str = "REALM_BINDER_TRACE_JSON";
pub const LOG_FILTER_ENV: &str = "RUST_LOG";

const DEFAULT_LOG_FILTER: &str = "info";

fn default_log_filter() -> String {
    DEFAULT_LOG_FILTER.to_string()
}

/// Runtime configuration for a binder deployment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BinderConfig {
    /// Selection policy; `None` lets the binder apply its default
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selection: Option<SelectionPolicy>,
    #[serde(default)]
    pub trace_json: bool,
    #[serde(default = "default_log_filter")]
    pub log_filter: String,
}

impl Default for BinderConfig {
    fn default() -> Self {
        Self {
            selection: None,
            trace_json: false,
            log_filter: default_log_filter(),
        }
    }
}

impl BinderConfig {
    /// Read the configuration from the process environment
    pub fn from_env() -> BinderResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read the configuration through an arbitrary variable lookup
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> BinderResult<Self> {
        let selection = match lookup(SELECTION_ENV) {
            Some(value) if !value.trim().is_empty() => Some(value.parse()?),
            _ => None,
        };

        let trace_json = lookup(TRACE_JSON_ENV)
            .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
            .unwrap_or(false);

        let log_filter = lookup(LOG_FILTER_ENV)
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(default_log_filter);

        Ok(Self {
            selection,
            trace_json,
            log_filter,
        })
    }

    /// Load the configuration from a JSON file
    pub fn from_json_file(path: impl AsRef<Path>) -> BinderResult<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|e| {
            BinderError::Configuration(format!("cannot read {}: {}", path.display(), e))
        })?;
        serde_json::from_str(&raw).map_err(|e| {
            BinderError::Configuration(format!("invalid config {}: {}", path.display(), e))
        })
    }
}
