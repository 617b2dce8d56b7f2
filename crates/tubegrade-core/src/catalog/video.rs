//! Video data model

use crate::types::{UserId, VideoId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A video in the catalog
///
/// Comments reference the video by id and are held in the catalog's
/// comment repository, not inside the video itself.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Video {
    /// Unique video identifier
    pub id: VideoId,
    /// Creator who uploaded the video
    pub creator_id: UserId,
    /// Video title
    pub title: String,
    /// Source URL
    pub url: String,
    /// Duration in seconds
    pub duration_secs: u64,
    /// Category label
    pub category: String,
    /// View counter
    #[serde(default)]
    pub view_count: u64,
    /// When the video was uploaded
    pub uploaded_at: DateTime<Utc>,
}

impl Video {
    /// Create a new video with a zeroed view counter
    pub fn new(
        id: VideoId,
        creator_id: UserId,
        title: impl Into<String>,
        url: impl Into<String>,
        duration_secs: u64,
        category: impl Into<String>,
    ) -> Self {
        Self {
            id,
            creator_id,
            title: title.into(),
            url: url.into(),
            duration_secs,
            category: category.into(),
            view_count: 0,
            uploaded_at: Utc::now(),
        }
    }

    /// Register a view
    pub fn add_view(&mut self) {
        self.view_count += 1;
    }
}
