//! Error types for the Wayfarer foundation crate.

/// Core error type for Wayfarer infrastructure.
#[derive(Debug, thiserror::Error)]
pub enum WayfarerError {
    /// The access token is malformed or missing.
    #[error("invalid access token: {0}")]
    InvalidAccessToken(String),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),

    /// Internal error with context.
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

/// Convenience result type for Wayfarer operations.
pub type WayfarerResult<T> = Result<T, WayfarerError>;
