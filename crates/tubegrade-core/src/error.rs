//! Error types for tubegrade

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for tubegrade
#[derive(Debug, Error)]
pub enum TubegradeError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    /// TOML parsing error
    #[error("TOML error: {0}")]
    Toml(String),

    /// User not found
    #[error("User not found: {0}")]
    UserNotFound(String),

    /// Video not found
    #[error("Video not found: {0}")]
    VideoNotFound(String),

    /// Comment not found
    #[error("Comment not found: {0}")]
    CommentNotFound(String),

    /// Validation error
    #[error("Validation error: {0}")]
    Validation(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// File not found
    #[error("File not found: {0}")]
    FileNotFound(PathBuf),

    /// Generic error with context
    #[error("{context}: {source}")]
    WithContext {
        context: String,
        #[source]
        source: Box<TubegradeError>,
    },
}

impl TubegradeError {
    /// Add context to an error
    pub fn with_context(self, context: impl Into<String>) -> Self {
        TubegradeError::WithContext {
            context: context.into(),
            source: Box::new(self),
        }
    }
}

/// Result type alias for tubegrade
pub type Result<T> = std::result::Result<T, TubegradeError>;
