//! Catalog manager for CRUD operations and analysis

use super::comment::Comment;
use super::index::CommentIndex;
use super::repository::{MemoryRepository, Repository};
use super::user::User;
use super::video::Video;
use crate::error::{Result, TubegradeError};
use crate::scoring::{CommentScorer, ScoreResult};
use crate::types::{CommentId, UserId, VideoId};
use serde::{Deserialize, Serialize};

/// In-memory catalog of users, videos, comments and analysis results
///
/// Cross-record rules live here: a video needs an existing creator, a
/// comment needs an existing video and author, and deleting a video
/// takes its comments and stored result with it. The scorer itself
/// never touches the repositories.
#[derive(Debug, Clone, Serialize)]
pub struct Catalog {
    /// All users by ID
    users: MemoryRepository<UserId, User>,
    /// All videos by ID
    videos: MemoryRepository<VideoId, Video>,
    /// All comments by ID
    comments: MemoryRepository<CommentId, Comment>,
    /// Latest analysis result per video
    results: MemoryRepository<VideoId, ScoreResult>,
    /// Secondary comment index
    #[serde(skip)]
    index: CommentIndex,
}

impl Catalog {
    /// Create a new empty catalog
    pub fn new() -> Self {
        Self {
            users: MemoryRepository::new(),
            videos: MemoryRepository::new(),
            comments: MemoryRepository::new(),
            results: MemoryRepository::new(),
            index: CommentIndex::new(),
        }
    }

    // Users

    /// Add a user
    pub fn add_user(&mut self, user: User) -> Result<UserId> {
        if self.users.contains(&user.id) {
            return Err(TubegradeError::Validation(format!(
                "User with ID {} already exists",
                user.id
            )));
        }

        let id = user.id.clone();
        tracing::debug!(user = %id, kind = %user.kind, "user added");
        self.users.insert(id.clone(), user);
        Ok(id)
    }

    /// Get a user by ID
    pub fn user(&self, id: &UserId) -> Option<&User> {
        self.users.get(id)
    }

    /// All users sorted by registration time
    pub fn users_sorted(&self) -> Vec<&User> {
        let mut users = self.users.values();
        users.sort_by(|a, b| a.registered_at.cmp(&b.registered_at));
        users
    }

    /// Delete a user. Their comments stay in the catalog with a
    /// dangling author id.
    pub fn delete_user(&mut self, id: &UserId) -> Result<User> {
        self.users
            .remove(id)
            .ok_or_else(|| TubegradeError::UserNotFound(id.to_string()))
    }

    // Videos

    /// Add a video uploaded by an existing creator
    pub fn add_video(&mut self, video: Video) -> Result<VideoId> {
        if self.videos.contains(&video.id) {
            return Err(TubegradeError::Validation(format!(
                "Video with ID {} already exists",
                video.id
            )));
        }

        let creator = self
            .users
            .get_mut(&video.creator_id)
            .ok_or_else(|| TubegradeError::UserNotFound(video.creator_id.to_string()))?;
        if !creator.is_creator() {
            return Err(TubegradeError::Validation(format!(
                "User {} is not a creator",
                video.creator_id
            )));
        }
        creator.record_upload();

        let id = video.id.clone();
        tracing::debug!(video = %id, creator = %video.creator_id, "video added");
        self.videos.insert(id.clone(), video);
        Ok(id)
    }

    /// Get a video by ID
    pub fn video(&self, id: &VideoId) -> Option<&Video> {
        self.videos.get(id)
    }

    /// All videos sorted by upload time
    pub fn videos_sorted(&self) -> Vec<&Video> {
        let mut videos = self.videos.values();
        videos.sort_by(|a, b| a.uploaded_at.cmp(&b.uploaded_at));
        videos
    }

    /// Search videos by title or category substring (case-insensitive)
    pub fn search_videos(&self, query: &str) -> Vec<&Video> {
        let query_lower = query.to_lowercase();
        self.videos
            .values()
            .into_iter()
            .filter(|v| {
                v.title.to_lowercase().contains(&query_lower)
                    || v.category.to_lowercase().contains(&query_lower)
            })
            .collect()
    }

    /// Delete a video along with its comments and stored result
    pub fn delete_video(&mut self, id: &VideoId) -> Result<Video> {
        let video = self
            .videos
            .remove(id)
            .ok_or_else(|| TubegradeError::VideoNotFound(id.to_string()))?;

        let removed_comments = self.delete_comments_for_video(id);
        self.results.remove(id);

        if let Some(creator) = self.users.get_mut(&video.creator_id) {
            creator.record_video_removed();
        }

        tracing::debug!(video = %id, comments = removed_comments, "video deleted");
        Ok(video)
    }

    // Comments

    /// Add a comment to an existing video by an existing user
    pub fn add_comment(&mut self, comment: Comment) -> Result<CommentId> {
        if self.comments.contains(&comment.id) {
            return Err(TubegradeError::Validation(format!(
                "Comment with ID {} already exists",
                comment.id
            )));
        }
        if !self.videos.contains(&comment.video_id) {
            return Err(TubegradeError::VideoNotFound(comment.video_id.to_string()));
        }
        if !self.users.contains(&comment.author_id) {
            return Err(TubegradeError::UserNotFound(comment.author_id.to_string()));
        }

        let id = comment.id.clone();
        tracing::debug!(comment = %id, video = %comment.video_id, "comment added");
        self.index.add(&comment);
        self.comments.insert(id.clone(), comment);
        Ok(id)
    }

    /// Get a comment by ID
    pub fn comment(&self, id: &CommentId) -> Option<&Comment> {
        self.comments.get(id)
    }

    /// All comments sorted by post time
    pub fn comments_sorted(&self) -> Vec<&Comment> {
        let mut comments = self.comments.values();
        comments.sort_by(|a, b| a.posted_at.cmp(&b.posted_at));
        comments
    }

    /// Comments on a video, sorted by post time
    pub fn comments_for_video(&self, video_id: &VideoId) -> Vec<&Comment> {
        let mut comments: Vec<&Comment> = self
            .index
            .get_by_video(video_id)
            .iter()
            .filter_map(|id| self.comments.get(id))
            .collect();
        comments.sort_by(|a, b| a.posted_at.cmp(&b.posted_at));
        comments
    }

    /// Comments written by an author
    pub fn comments_by_author(&self, author_id: &UserId) -> Vec<&Comment> {
        self.index
            .get_by_author(author_id)
            .iter()
            .filter_map(|id| self.comments.get(id))
            .collect()
    }

    /// Delete a comment
    pub fn delete_comment(&mut self, id: &CommentId) -> Result<Comment> {
        let comment = self
            .comments
            .remove(id)
            .ok_or_else(|| TubegradeError::CommentNotFound(id.to_string()))?;
        self.index.remove(&comment);
        Ok(comment)
    }

    fn delete_comments_for_video(&mut self, video_id: &VideoId) -> usize {
        let ids = self.index.get_by_video(video_id);
        let count = ids.len();
        for id in ids {
            if let Some(comment) = self.comments.remove(&id) {
                self.index.remove(&comment);
            }
        }
        count
    }

    /// Like a comment
    pub fn like_comment(&mut self, id: &CommentId) -> Result<()> {
        let comment = self
            .comments
            .get_mut(id)
            .ok_or_else(|| TubegradeError::CommentNotFound(id.to_string()))?;
        comment.like();
        Ok(())
    }

    /// Dislike a comment
    pub fn dislike_comment(&mut self, id: &CommentId) -> Result<()> {
        let comment = self
            .comments
            .get_mut(id)
            .ok_or_else(|| TubegradeError::CommentNotFound(id.to_string()))?;
        comment.dislike();
        Ok(())
    }

    // Watching

    /// Record a view: bumps the video's counter and, for viewers, the
    /// watch history
    pub fn watch(&mut self, user_id: &UserId, video_id: &VideoId) -> Result<()> {
        if !self.users.contains(user_id) {
            return Err(TubegradeError::UserNotFound(user_id.to_string()));
        }
        let video = self
            .videos
            .get_mut(video_id)
            .ok_or_else(|| TubegradeError::VideoNotFound(video_id.to_string()))?;
        video.add_view();

        if let Some(user) = self.users.get_mut(user_id) {
            user.record_watch(video_id.clone());
        }
        Ok(())
    }

    // Analysis

    /// Score a video's comments and store the result keyed by video id.
    ///
    /// A video with no comments is still analyzed; it gets the neutral
    /// default score.
    pub fn analyze_video(&mut self, video_id: &VideoId) -> Result<ScoreResult> {
        if !self.videos.contains(video_id) {
            return Err(TubegradeError::VideoNotFound(video_id.to_string()));
        }

        let comments: Vec<Comment> = self
            .comments_for_video(video_id)
            .into_iter()
            .cloned()
            .collect();

        let result = CommentScorer::new().analyze(&comments);
        tracing::info!(
            video = %video_id,
            score = result.quality_score,
            tier = %result.tier,
            "video analyzed"
        );

        self.results.insert(video_id.clone(), result.clone());
        Ok(result)
    }

    /// Stored analysis result for a video, if it was analyzed
    pub fn result_for(&self, video_id: &VideoId) -> Option<&ScoreResult> {
        self.results.get(video_id)
    }

    // Counts

    /// Number of users
    pub fn user_count(&self) -> usize {
        self.users.len()
    }

    /// Number of videos
    pub fn video_count(&self) -> usize {
        self.videos.len()
    }

    /// Number of comments
    pub fn comment_count(&self) -> usize {
        self.comments.len()
    }

    /// Check if the catalog holds no records at all
    pub fn is_empty(&self) -> bool {
        self.users.is_empty() && self.videos.is_empty() && self.comments.is_empty()
    }

    /// Rebuild the comment index (after deserialization)
    pub fn rebuild_index(&mut self) {
        let comments: Vec<Comment> = self.comments.values().into_iter().cloned().collect();
        self.index.rebuild(comments.iter());
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}

// Custom deserialization to rebuild the index
impl<'de> serde::de::Deserialize<'de> for Catalog {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::de::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct CatalogHelper {
            users: MemoryRepository<UserId, User>,
            videos: MemoryRepository<VideoId, Video>,
            comments: MemoryRepository<CommentId, Comment>,
            #[serde(default)]
            results: MemoryRepository<VideoId, ScoreResult>,
        }

        let helper = CatalogHelper::deserialize(deserializer)?;
        let mut catalog = Self {
            users: helper.users,
            videos: helper.videos,
            comments: helper.comments,
            results: helper.results,
            index: CommentIndex::new(),
        };
        catalog.rebuild_index();
        Ok(catalog)
    }
}

#[cfg(test)]
mod tests {
    use super::super::user::UserKind;
    use super::*;
    use crate::scoring::RecommendationTier;
    use pretty_assertions::assert_eq;

    fn catalog_with_video() -> Catalog {
        let mut catalog = Catalog::new();
        catalog
            .add_user(User::creator(
                UserId::from_string("creator"),
                "chan",
                "chan@example.com",
            ))
            .unwrap();
        catalog
            .add_user(User::viewer(
                UserId::from_string("viewer"),
                "vera",
                "vera@example.com",
            ))
            .unwrap();
        catalog
            .add_video(Video::new(
                VideoId::from_string("v1"),
                UserId::from_string("creator"),
                "Test video",
                "https://example.com/v1",
                60,
                "testing",
            ))
            .unwrap();
        catalog
    }

    fn comment(id: &str, text: &str) -> Comment {
        Comment::new(
            CommentId::from_string(id),
            VideoId::from_string("v1"),
            UserId::from_string("viewer"),
            text,
        )
    }

    #[test]
    fn test_add_duplicate_user_fails() {
        let mut catalog = Catalog::new();
        let user = User::new(UserId::from_string("u1"), "alice", "a@example.com");
        catalog.add_user(user.clone()).unwrap();
        assert!(catalog.add_user(user).is_err());
    }

    #[test]
    fn test_video_requires_creator() {
        let mut catalog = Catalog::new();
        catalog
            .add_user(User::new(
                UserId::from_string("plain"),
                "pat",
                "pat@example.com",
            ))
            .unwrap();

        let video = Video::new(
            VideoId::from_string("v1"),
            UserId::from_string("plain"),
            "Nope",
            "https://example.com",
            10,
            "misc",
        );
        assert!(matches!(
            catalog.add_video(video),
            Err(TubegradeError::Validation(_))
        ));

        let orphan = Video::new(
            VideoId::from_string("v2"),
            UserId::from_string("missing"),
            "Nope",
            "https://example.com",
            10,
            "misc",
        );
        assert!(matches!(
            catalog.add_video(orphan),
            Err(TubegradeError::UserNotFound(_))
        ));
    }

    #[test]
    fn test_upload_counts_tracked() {
        let catalog = catalog_with_video();
        match &catalog.user(&UserId::from_string("creator")).unwrap().kind {
            UserKind::Creator { total_videos, .. } => assert_eq!(*total_videos, 1),
            _ => panic!("expected creator"),
        }
    }

    #[test]
    fn test_comment_requires_video_and_author() {
        let mut catalog = catalog_with_video();

        let bad_video = Comment::new(
            CommentId::from_string("c1"),
            VideoId::from_string("missing"),
            UserId::from_string("viewer"),
            "hi",
        );
        assert!(matches!(
            catalog.add_comment(bad_video),
            Err(TubegradeError::VideoNotFound(_))
        ));

        let bad_author = Comment::new(
            CommentId::from_string("c1"),
            VideoId::from_string("v1"),
            UserId::from_string("missing"),
            "hi",
        );
        assert!(matches!(
            catalog.add_comment(bad_author),
            Err(TubegradeError::UserNotFound(_))
        ));
    }

    #[test]
    fn test_comments_for_video_sorted() {
        let mut catalog = catalog_with_video();
        catalog.add_comment(comment("c1", "first")).unwrap();
        catalog.add_comment(comment("c2", "second")).unwrap();

        let comments = catalog.comments_for_video(&VideoId::from_string("v1"));
        assert_eq!(comments.len(), 2);
        assert!(comments[0].posted_at <= comments[1].posted_at);
    }

    #[test]
    fn test_like_dislike() {
        let mut catalog = catalog_with_video();
        catalog.add_comment(comment("c1", "nice")).unwrap();

        let id = CommentId::from_string("c1");
        catalog.like_comment(&id).unwrap();
        catalog.like_comment(&id).unwrap();
        catalog.dislike_comment(&id).unwrap();

        let stored = catalog.comment(&id).unwrap();
        assert_eq!(stored.like_count, 2);
        assert_eq!(stored.dislike_count, 1);

        assert!(catalog
            .like_comment(&CommentId::from_string("missing"))
            .is_err());
    }

    #[test]
    fn test_watch_updates_view_and_history() {
        let mut catalog = catalog_with_video();
        catalog
            .watch(&UserId::from_string("viewer"), &VideoId::from_string("v1"))
            .unwrap();

        assert_eq!(
            catalog.video(&VideoId::from_string("v1")).unwrap().view_count,
            1
        );
        match &catalog.user(&UserId::from_string("viewer")).unwrap().kind {
            UserKind::Viewer { watch_history, .. } => {
                assert_eq!(watch_history, &vec![VideoId::from_string("v1")])
            }
            _ => panic!("expected viewer"),
        }
    }

    #[test]
    fn test_analyze_video_stores_result() {
        let mut catalog = catalog_with_video();
        catalog.add_comment(comment("c1", "great video, love it")).unwrap();
        catalog.add_comment(comment("c2", "the worst")).unwrap();

        let video_id = VideoId::from_string("v1");
        let result = catalog.analyze_video(&video_id).unwrap();
        // Sentiments 1.0 and -1.0 average to neutral.
        assert_eq!(result.quality_score, 5.0);
        assert_eq!(result.comments_analyzed, 2);

        let stored = catalog.result_for(&video_id).unwrap();
        assert_eq!(stored.quality_score, result.quality_score);
    }

    #[test]
    fn test_analyze_video_without_comments() {
        let mut catalog = catalog_with_video();
        let result = catalog.analyze_video(&VideoId::from_string("v1")).unwrap();
        assert_eq!(result.quality_score, 5.0);
        assert_eq!(result.comments_analyzed, 0);
        assert_eq!(result.tier, RecommendationTier::Mixed);
    }

    #[test]
    fn test_analyze_missing_video() {
        let mut catalog = Catalog::new();
        assert!(matches!(
            catalog.analyze_video(&VideoId::from_string("missing")),
            Err(TubegradeError::VideoNotFound(_))
        ));
    }

    #[test]
    fn test_delete_video_cascades() {
        let mut catalog = catalog_with_video();
        catalog.add_comment(comment("c1", "good")).unwrap();
        catalog.add_comment(comment("c2", "bad")).unwrap();
        let video_id = VideoId::from_string("v1");
        catalog.analyze_video(&video_id).unwrap();

        catalog.delete_video(&video_id).unwrap();

        assert!(catalog.video(&video_id).is_none());
        assert_eq!(catalog.comment_count(), 0);
        assert!(catalog.result_for(&video_id).is_none());
        match &catalog.user(&UserId::from_string("creator")).unwrap().kind {
            UserKind::Creator { total_videos, .. } => assert_eq!(*total_videos, 0),
            _ => panic!("expected creator"),
        }
    }

    #[test]
    fn test_search_videos() {
        let mut catalog = catalog_with_video();
        catalog
            .add_video(Video::new(
                VideoId::from_string("v2"),
                UserId::from_string("creator"),
                "Cooking basics",
                "https://example.com/v2",
                120,
                "food",
            ))
            .unwrap();

        assert_eq!(catalog.search_videos("cooking").len(), 1);
        assert_eq!(catalog.search_videos("FOOD").len(), 1);
        assert_eq!(catalog.search_videos("test").len(), 1);
        assert_eq!(catalog.search_videos("zzz").len(), 0);
    }

    #[test]
    fn test_serialization_rebuilds_index() {
        let mut catalog = catalog_with_video();
        catalog.add_comment(comment("c1", "good")).unwrap();

        let json = serde_json::to_string(&catalog).unwrap();
        let catalog2: Catalog = serde_json::from_str(&json).unwrap();

        assert_eq!(catalog2.comment_count(), 1);
        assert_eq!(
            catalog2.comments_for_video(&VideoId::from_string("v1")).len(),
            1
        );
    }
}
