//! Core type definitions for tubegrade
//!
//! All catalog records are keyed by caller-supplied string ids; the
//! newtypes below keep them from being mixed up at compile time.

use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Unique identifier for a user
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserId(pub String);

impl UserId {
    /// Create a UserId from a string
    pub fn from_string(s: impl Into<String>) -> Self {
        UserId(s.into())
    }

    /// Get the string value
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Unique identifier for a video
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct VideoId(pub String);

impl VideoId {
    /// Create a VideoId from a string
    pub fn from_string(s: impl Into<String>) -> Self {
        VideoId(s.into())
    }

    /// Get the string value
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for VideoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Unique identifier for a comment
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CommentId(pub String);

impl CommentId {
    /// Create a CommentId from a string
    pub fn from_string(s: impl Into<String>) -> Self {
        CommentId(s.into())
    }

    /// Get the string value
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CommentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Unique identifier for an analysis result
/// Format: YYYYMMDDHHMMSS-<short_uuid>
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ResultId(pub String);

impl ResultId {
    /// Generate a new ResultId
    pub fn generate() -> Self {
        let now = chrono::Utc::now();
        let uuid = Uuid::new_v4();
        let short_uuid = &uuid.to_string()[..8];
        ResultId(format!("{}-{}", now.format("%Y%m%d%H%M%S"), short_uuid))
    }

    /// Get the string value
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for ResultId {
    fn default() -> Self {
        Self::generate()
    }
}

impl fmt::Display for ResultId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
