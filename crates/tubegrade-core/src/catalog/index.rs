//! Comment indexing for fast lookup

use super::comment::Comment;
use crate::types::{CommentId, UserId, VideoId};
use std::collections::HashMap;

/// Secondary index over comment ids
#[derive(Debug, Clone, Default)]
pub struct CommentIndex {
    /// Index by video ID
    by_video: HashMap<VideoId, Vec<CommentId>>,
    /// Index by author ID
    by_author: HashMap<UserId, Vec<CommentId>>,
}

impl CommentIndex {
    /// Create a new empty index
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a comment to the index
    pub fn add(&mut self, comment: &Comment) {
        self.by_video
            .entry(comment.video_id.clone())
            .or_default()
            .push(comment.id.clone());

        self.by_author
            .entry(comment.author_id.clone())
            .or_default()
            .push(comment.id.clone());
    }

    /// Remove a comment from the index
    pub fn remove(&mut self, comment: &Comment) {
        if let Some(ids) = self.by_video.get_mut(&comment.video_id) {
            ids.retain(|id| id != &comment.id);
            if ids.is_empty() {
                self.by_video.remove(&comment.video_id);
            }
        }

        if let Some(ids) = self.by_author.get_mut(&comment.author_id) {
            ids.retain(|id| id != &comment.id);
            if ids.is_empty() {
                self.by_author.remove(&comment.author_id);
            }
        }
    }

    /// Get comment ids for a video
    pub fn get_by_video(&self, video_id: &VideoId) -> Vec<CommentId> {
        self.by_video.get(video_id).cloned().unwrap_or_default()
    }

    /// Get comment ids for an author
    pub fn get_by_author(&self, author_id: &UserId) -> Vec<CommentId> {
        self.by_author.get(author_id).cloned().unwrap_or_default()
    }

    /// Get comment count for a video
    pub fn video_comment_count(&self, video_id: &VideoId) -> usize {
        self.by_video.get(video_id).map(|ids| ids.len()).unwrap_or(0)
    }

    /// Clear the entire index
    pub fn clear(&mut self) {
        self.by_video.clear();
        self.by_author.clear();
    }

    /// Rebuild index from a collection of comments
    pub fn rebuild<'a>(&mut self, comments: impl IntoIterator<Item = &'a Comment>) {
        self.clear();
        for comment in comments {
            self.add(comment);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_comment(id: &str, video: &str, author: &str) -> Comment {
        Comment::new(
            CommentId::from_string(id),
            VideoId::from_string(video),
            UserId::from_string(author),
            "Test",
        )
    }

    #[test]
    fn test_add_and_get_by_video() {
        let mut index = CommentIndex::new();
        index.add(&create_test_comment("c1", "v1", "u1"));
        index.add(&create_test_comment("c2", "v1", "u2"));
        index.add(&create_test_comment("c3", "v2", "u1"));

        assert_eq!(index.get_by_video(&VideoId::from_string("v1")).len(), 2);
        assert_eq!(index.get_by_video(&VideoId::from_string("v2")).len(), 1);
        assert_eq!(index.get_by_video(&VideoId::from_string("v3")).len(), 0);
    }

    #[test]
    fn test_add_and_get_by_author() {
        let mut index = CommentIndex::new();
        index.add(&create_test_comment("c1", "v1", "u1"));
        index.add(&create_test_comment("c2", "v2", "u1"));

        assert_eq!(index.get_by_author(&UserId::from_string("u1")).len(), 2);
        assert_eq!(index.get_by_author(&UserId::from_string("u2")).len(), 0);
    }

    #[test]
    fn test_remove() {
        let mut index = CommentIndex::new();
        let comment = create_test_comment("c1", "v1", "u1");
        index.add(&comment);
        assert_eq!(index.video_comment_count(&VideoId::from_string("v1")), 1);

        index.remove(&comment);
        assert_eq!(index.video_comment_count(&VideoId::from_string("v1")), 0);
        assert_eq!(index.get_by_author(&UserId::from_string("u1")).len(), 0);
    }

    #[test]
    fn test_rebuild() {
        let mut index = CommentIndex::new();
        index.add(&create_test_comment("old", "v9", "u9"));

        let comments = vec![
            create_test_comment("c1", "v1", "u1"),
            create_test_comment("c2", "v1", "u1"),
        ];
        index.rebuild(comments.iter());

        assert_eq!(index.get_by_video(&VideoId::from_string("v9")).len(), 0);
        assert_eq!(index.get_by_video(&VideoId::from_string("v1")).len(), 2);
    }
}
