//! Centralized error types for Senti.

use thiserror::Error;

/// Main error type for Senti operations.
///
/// Outcomes of a trigger cycle (empty input, unreachable backend) are not
/// errors at this level; see [`crate::orchestrator::Rendering`].
#[derive(Error, Debug)]
pub enum SentiError {
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("HTTP client error: {0}")]
    Http(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Result type for Senti operations.
pub type SentiResult<T> = Result<T, SentiError>;

impl SentiError {
    /// Create a validation error.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::ValidationError(msg.into())
    }

    /// Create a configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}
