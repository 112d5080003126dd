//! Binding-layer errors

use thiserror::Error;

/// Result type for binding operations
pub type Result<T> = std::result::Result<T, BindingError>;

/// Errors raised on the guest side of the binding boundary
#[derive(Debug, Error)]
pub enum BindingError {
    /// A string handed over by the host was not valid UTF-8
    #[error("invalid UTF-8 in host string: {0}")]
    InvalidUtf8(#[from] std::str::Utf8Error),

    /// The host passed a null pointer with a non-zero length
    #[error("null pointer for {len}-byte host string")]
    NullString { len: usize },

    /// A global logger was already installed
    #[error("a logger is already installed")]
    LoggerInstalled,

    /// Manifest serialization failed
    #[error("manifest serialization failed: {0}")]
    Json(#[from] serde_json::Error),
}
