//! Error types for the tick-labeler system.

use thiserror::Error;

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the tick-labeler system.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (invalid duration string, inverted session
    /// boundaries, non-finite threshold).
    #[error("Configuration error: {0}")]
    Config(String),

    /// Input contract violation (unordered series, non-positive price).
    #[error("Input contract error: {0}")]
    InputContract(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error with message.
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create a configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Error::Config(msg.into())
    }

    /// Create an input contract error.
    pub fn input(msg: impl Into<String>) -> Self {
        Error::InputContract(msg.into())
    }
}
