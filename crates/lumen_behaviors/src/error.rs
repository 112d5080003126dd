//! Script runtime errors

use crate::runtime::{InstanceId, ScriptKind};
use thiserror::Error;

/// Result type for script runtime operations
pub type Result<T> = std::result::Result<T, ScriptError>;

/// Errors that can occur while managing script instances
#[derive(Debug, Error)]
pub enum ScriptError {
    /// No behavior is registered under this name
    #[error("unknown script implementation: {0}")]
    UnknownImplementation(String),

    /// The instance was never created or was already destroyed
    #[error("script instance not found: {0}")]
    InstanceNotFound(InstanceId),

    /// A UI event was sent to a component script, or the reverse
    #[error("script instance {id} is not a {expected} script")]
    WrongKind { id: InstanceId, expected: ScriptKind },

    /// The implementation exists but attaches to the other kind of handle
    #[error("{script_impl} is not a {expected} script")]
    KindMismatch { script_impl: String, expected: ScriptKind },

    /// Configuration values out of range
    #[error("invalid config: {0}")]
    InvalidConfig(String),

    /// Configuration JSON failed to parse
    #[error("config parse error: {0}")]
    Json(#[from] serde_json::Error),
}
