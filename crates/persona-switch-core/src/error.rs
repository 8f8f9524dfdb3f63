//! Unified error type exposed by **`persona-switch-core`**.
//!
//! Provider crates convert their internal errors into one of these variants
//! before bubbling them up, so callers only ever match on a single enum.

use thiserror::Error;

/// Convenient alias used throughout the workspace.
pub type Result<T> = std::result::Result<T, SwitchError>;

#[derive(Debug, Error)]
pub enum SwitchError {
    /// Failure while serialising or deserialising JSON payloads sent to /
    /// received from the completion provider.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Generic forwarding of any backend-specific error (transport, status,
    /// malformed response).
    #[error("backend returned an error: {0}")]
    Backend(Box<dyn std::error::Error + Send + Sync + 'static>),

    /// Invalid configuration, e.g. a missing API key.
    #[error("invalid: {0}")]
    Invalid(String),
}
