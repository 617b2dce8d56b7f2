//! Comment data model

use crate::types::{CommentId, UserId, VideoId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A comment posted by a user on a video
///
/// Immutable after creation except for the like/dislike counters,
/// which only ever increase.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Comment {
    /// Unique comment identifier
    pub id: CommentId,
    /// Video this comment was posted on
    pub video_id: VideoId,
    /// Author of the comment
    pub author_id: UserId,
    /// Comment text
    pub text: String,
    /// When the comment was posted
    pub posted_at: DateTime<Utc>,
    /// Number of likes
    #[serde(default)]
    pub like_count: u64,
    /// Number of dislikes
    #[serde(default)]
    pub dislike_count: u64,
}

impl Comment {
    /// Create a new comment with zeroed counters
    pub fn new(
        id: CommentId,
        video_id: VideoId,
        author_id: UserId,
        text: impl Into<String>,
    ) -> Self {
        Self {
            id,
            video_id,
            author_id,
            text: text.into(),
            posted_at: Utc::now(),
            like_count: 0,
            dislike_count: 0,
        }
    }

    /// Register a like
    pub fn like(&mut self) {
        self.like_count += 1;
    }

    /// Register a dislike
    pub fn dislike(&mut self) {
        self.dislike_count += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_comment() -> Comment {
        Comment::new(
            CommentId::from_string("c1"),
            VideoId::from_string("v1"),
            UserId::from_string("u1"),
            "Great video",
        )
    }

    #[test]
    fn test_comment_creation() {
        let comment = create_test_comment();
        assert_eq!(comment.text, "Great video");
        assert_eq!(comment.like_count, 0);
        assert_eq!(comment.dislike_count, 0);
    }

    #[test]
    fn test_counters_only_increase() {
        let mut comment = create_test_comment();
        comment.like();
        comment.like();
        comment.dislike();
        assert_eq!(comment.like_count, 2);
        assert_eq!(comment.dislike_count, 1);
    }

    #[test]
    fn test_comment_serialization() {
        let comment = create_test_comment();
        let json = serde_json::to_string(&comment).unwrap();
        let comment2: Comment = serde_json::from_str(&json).unwrap();
        assert_eq!(comment.id, comment2.id);
        assert_eq!(comment.text, comment2.text);
    }

    #[test]
    fn test_counters_default_when_absent() {
        let json = r#"{
            "id": "c1",
            "video_id": "v1",
            "author_id": "u1",
            "text": "ok",
            "posted_at": "2026-01-01T00:00:00Z"
        }"#;
        let comment: Comment = serde_json::from_str(json).unwrap();
        assert_eq!(comment.like_count, 0);
        assert_eq!(comment.dislike_count, 0);
    }
}
