//! JSON report renderer

use super::ReportRenderer;
use crate::catalog::{Comment, Video};
use crate::error::Result;
use crate::scoring::{comment_sentiment, RecommendationTier, ScoreResult};
use chrono::{DateTime, Utc};
use serde::Serialize;

/// JSON report for machine consumption
pub struct JsonReport {
    /// Include per-comment sentiment breakdown
    include_breakdown: bool,
}

/// Serialized report payload
#[derive(Debug, Serialize)]
struct ReportPayload<'a> {
    video_id: &'a str,
    title: &'a str,
    category: &'a str,
    quality_score: f64,
    tier: RecommendationTier,
    recommendation: &'static str,
    comments_analyzed: usize,
    computed_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    breakdown: Option<Vec<CommentSentiment<'a>>>,
}

/// One comment's sentiment in the breakdown
#[derive(Debug, Serialize)]
struct CommentSentiment<'a> {
    comment_id: &'a str,
    sentiment: f64,
    text: &'a str,
}

impl JsonReport {
    /// Create a new JSON renderer with default settings
    pub fn new() -> Self {
        Self {
            include_breakdown: false,
        }
    }

    /// Set whether to include the per-comment breakdown
    pub fn with_breakdown(mut self, include: bool) -> Self {
        self.include_breakdown = include;
        self
    }
}

impl Default for JsonReport {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportRenderer for JsonReport {
    fn render(
        &self,
        video: &Video,
        result: &ScoreResult,
        comments: &[&Comment],
    ) -> Result<String> {
        let breakdown = if self.include_breakdown {
            Some(
                comments
                    .iter()
                    .map(|c| CommentSentiment {
                        comment_id: c.id.as_str(),
                        sentiment: comment_sentiment(&c.text),
                        text: &c.text,
                    })
                    .collect(),
            )
        } else {
            None
        };

        let payload = ReportPayload {
            video_id: video.id.as_str(),
            title: &video.title,
            category: &video.category,
            quality_score: result.quality_score,
            tier: result.tier,
            recommendation: result.recommendation(),
            comments_analyzed: result.comments_analyzed,
            computed_at: result.computed_at,
            breakdown,
        };

        Ok(serde_json::to_string_pretty(&payload)?)
    }

    fn format_name(&self) -> &'static str {
        "json"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::CommentScorer;
    use crate::types::{CommentId, UserId, VideoId};

    fn fixtures() -> (Video, Vec<Comment>) {
        let video = Video::new(
            VideoId::from_string("v1"),
            UserId::from_string("u1"),
            "Test video",
            "https://example.com/v1",
            60,
            "testing",
        );
        let comments = vec![Comment::new(
            CommentId::from_string("c1"),
            VideoId::from_string("v1"),
            UserId::from_string("u1"),
            "best video ever",
        )];
        (video, comments)
    }

    #[test]
    fn test_render_valid_json() {
        let (video, comments) = fixtures();
        let result = CommentScorer::new().analyze(&comments);
        let refs: Vec<&Comment> = comments.iter().collect();

        let report = JsonReport::new().render(&video, &result, &refs).unwrap();
        let value: serde_json::Value = serde_json::from_str(&report).unwrap();

        assert_eq!(value["video_id"], "v1");
        assert_eq!(value["quality_score"], 10.0);
        assert_eq!(value["tier"], "HighlyRecommended");
        assert!(value.get("breakdown").is_none());
    }

    #[test]
    fn test_render_with_breakdown() {
        let (video, comments) = fixtures();
        let result = CommentScorer::new().analyze(&comments);
        let refs: Vec<&Comment> = comments.iter().collect();

        let report = JsonReport::new()
            .with_breakdown(true)
            .render(&video, &result, &refs)
            .unwrap();
        let value: serde_json::Value = serde_json::from_str(&report).unwrap();

        assert_eq!(value["breakdown"][0]["comment_id"], "c1");
        assert_eq!(value["breakdown"][0]["sentiment"], 1.0);
    }
}
