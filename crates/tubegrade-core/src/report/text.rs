//! Plain-text report renderer

use super::ReportRenderer;
use crate::catalog::{Comment, Video};
use crate::error::Result;
use crate::scoring::{comment_sentiment, ScoreResult};

/// Plain-text report for terminal display
pub struct TextReport {
    /// Include per-comment sentiment breakdown
    include_breakdown: bool,
}

impl TextReport {
    /// Create a new text renderer with default settings
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

impl Default for TextReport {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportRenderer for TextReport {
    fn render(
        &self,
        video: &Video,
        result: &ScoreResult,
        comments: &[&Comment],
    ) -> Result<String> {
        let rule = "=".repeat(50);
        let mut out = String::new();

        out.push_str(&rule);
        out.push('\n');
        out.push_str("ANALYSIS RESULT\n");
        out.push_str(&rule);
        out.push('\n');
        out.push_str(&format!("Video: {} ({})\n", video.title, video.id));
        out.push_str(&format!("Quality Score: {:.1}/10\n", result.quality_score));
        out.push_str(&format!(
            "Total Comments Analyzed: {}\n",
            result.comments_analyzed
        ));
        out.push_str(&format!("Recommendation: {}\n", result.recommendation()));
        out.push_str(&format!(
            "Computed At: {}\n",
            result.computed_at.format("%Y-%m-%d %H:%M:%S UTC")
        ));

        if self.include_breakdown && !comments.is_empty() {
            out.push_str(&"-".repeat(50));
            out.push('\n');
            for comment in comments {
                out.push_str(&format!(
                    "  [{:+.2}] {}: {}\n",
                    comment_sentiment(&comment.text),
                    comment.id,
                    comment.text
                ));
            }
        }

        out.push_str(&rule);
        out.push('\n');
        Ok(out)
    }

    fn format_name(&self) -> &'static str {
        "text"
    }
}
