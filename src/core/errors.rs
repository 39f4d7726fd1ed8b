/*!
 * Error Types
 * Centralized error handling with thiserror, miette, and serde support
 */

use miette::Diagnostic;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors reported by a realm (or a bind/unbind hook) while accepting or
/// releasing a resource handle
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Diagnostic)]
#[serde(tag = "error_type", content = "details", rename_all = "snake_case")]
pub enum RealmError {
    #[error("Realm '{0}' is already bound to a different resource handle")]
    #[diagnostic(
        code(realm::already_bound),
        help("Unbind the realm before handing it another resource handle.")
    )]
    AlreadyBound(String),

    #[error("Realm '{realm}' rejected the resource handle: {reason}")]
    #[diagnostic(code(realm::rejected))]
    Rejected { realm: String, reason: String },

    #[error("Realm '{realm}' is unavailable: {reason}")]
    #[diagnostic(
        code(realm::unavailable),
        help("The realm's backing store may be down. Check the resource handle's connectivity.")
    )]
    Unavailable { realm: String, reason: String },
}

pub type RealmResult<T> = Result<T, RealmError>;

/// Realm binder errors with serialization support
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Diagnostic)]
#[serde(tag = "error_type", content = "details", rename_all = "snake_case")]
pub enum BinderError {
    #[error("Invalid argument: {0}")]
    #[diagnostic(
        code(binder::invalid_argument),
        help("A resource handle is required to construct a realm binder.")
    )]
    InvalidArgument(String),

    #[error("Configuration error: {0}")]
    #[diagnostic(
        code(binder::configuration),
        help("Register the security environment before the realm binder runs, and use a security manager that exposes its realms.")
    )]
    Configuration(String),

    #[error("Failed to bind realm '{realm}'")]
    #[diagnostic(code(binder::bind_failure))]
    BindFailure {
        realm: String,
        #[source]
        #[diagnostic_source]
        source: RealmError,
    },

    #[error("Failed to unbind realm '{realm}'")]
    #[diagnostic(code(binder::unbind_failure))]
    UnbindFailure {
        realm: String,
        #[source]
        #[diagnostic_source]
        source: RealmError,
    },
}

impl BinderError {
    /// Name of the realm that failed, if the error came from a realm
    pub fn realm(&self) -> Option<&str> {
        match self {
            BinderError::BindFailure { realm, .. } | BinderError::UnbindFailure { realm, .. } => {
                Some(realm)
            }
            _ => None,
        }
    }
}

pub type BinderResult<T> = Result<T, BinderError>;
