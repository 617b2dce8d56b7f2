//! User data model
//!
//! User roles are a tagged variant rather than a type hierarchy; the
//! behavioral differences are a couple of fields and are handled by
//! capability methods on the variant.

use crate::types::{UserId, VideoId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A user of the platform
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// Unique user identifier
    pub id: UserId,
    /// Display name
    pub username: String,
    /// Contact email
    pub email: String,
    /// When the user registered
    pub registered_at: DateTime<Utc>,
    /// Role-specific data
    #[serde(default)]
    pub kind: UserKind,
}

impl User {
    /// Create a plain user
    pub fn new(id: UserId, username: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id,
            username: username.into(),
            email: email.into(),
            registered_at: Utc::now(),
            kind: UserKind::Plain,
        }
    }

    /// Create a video creator
    pub fn creator(id: UserId, username: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            kind: UserKind::Creator {
                subscriber_count: 0,
                total_videos: 0,
                verified: false,
            },
            ..Self::new(id, username, email)
        }
    }

    /// Create a viewer
    pub fn viewer(id: UserId, username: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            kind: UserKind::Viewer {
                watch_history: Vec::new(),
                favorite_categories: Vec::new(),
            },
            ..Self::new(id, username, email)
        }
    }

    /// Change the display name
    pub fn set_username(&mut self, username: impl Into<String>) {
        self.username = username.into();
    }

    /// Change the contact email
    pub fn set_email(&mut self, email: impl Into<String>) {
        self.email = email.into();
    }

    /// Whether this user can upload videos
    pub fn is_creator(&self) -> bool {
        matches!(self.kind, UserKind::Creator { .. })
    }

    /// Whether this user tracks watch history
    pub fn is_viewer(&self) -> bool {
        matches!(self.kind, UserKind::Viewer { .. })
    }

    /// Record an upload. No-op for non-creators.
    pub fn record_upload(&mut self) {
        if let UserKind::Creator { total_videos, .. } = &mut self.kind {
            *total_videos += 1;
        }
    }

    /// Record a deleted video. No-op for non-creators.
    pub fn record_video_removed(&mut self) {
        if let UserKind::Creator { total_videos, .. } = &mut self.kind {
            *total_videos = total_videos.saturating_sub(1);
        }
    }

    /// Record a watched video. No-op for non-viewers.
    pub fn record_watch(&mut self, video_id: VideoId) {
        if let UserKind::Viewer { watch_history, .. } = &mut self.kind {
            watch_history.push(video_id);
        }
    }
}

/// Role-specific user data
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "role", rename_all = "snake_case")]
pub enum UserKind {
    /// Regular account with no extra capabilities
    Plain,
    /// Uploads videos
    Creator {
        /// Current subscriber count
        subscriber_count: u64,
        /// Number of videos currently uploaded
        total_videos: u64,
        /// Verified channel badge
        verified: bool,
    },
    /// Watches videos
    Viewer {
        /// Videos watched, in order
        watch_history: Vec<VideoId>,
        /// Preferred categories
        favorite_categories: Vec<String>,
    },
}

impl Default for UserKind {
    fn default() -> Self {
        UserKind::Plain
    }
}

impl fmt::Display for UserKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UserKind::Plain => write!(f, "user"),
            UserKind::Creator { .. } => write!(f, "creator"),
            UserKind::Viewer { .. } => write!(f, "viewer"),
        }
    }
}
