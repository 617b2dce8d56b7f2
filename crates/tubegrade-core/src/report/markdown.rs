//! Markdown report renderer

use super::ReportRenderer;
use crate::catalog::{Comment, Video};
use crate::error::Result;
use crate::scoring::{comment_sentiment, ScoreResult};

/// Markdown report suitable for docs or chat
pub struct MarkdownReport {
    /// Include per-comment sentiment breakdown
    include_breakdown: bool,
}

impl MarkdownReport {
    /// Create a new markdown renderer with default settings
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

    fn render_header(&self, video: &Video, result: &ScoreResult) -> String {
        let mut header = String::new();
        header.push_str("# Video Analysis Report\n\n");
        header.push_str(&format!("**Video:** {} (`{}`)\n", video.title, video.id));
        header.push_str(&format!("**Category:** {}\n", video.category));
        header.push_str(&format!(
            "**Date:** {}\n\n",
            result.computed_at.format("%Y-%m-%d %H:%M:%S UTC")
        ));
        header
    }

    fn render_summary(&self, result: &ScoreResult) -> String {
        let mut summary = String::new();
        summary.push_str("## Summary\n\n");
        summary.push_str(&format!(
            "- **Quality Score:** {:.1}/10\n",
            result.quality_score
        ));
        summary.push_str(&format!("- **Tier:** {}\n", result.tier));
        summary.push_str(&format!(
            "- **Comments Analyzed:** {}\n\n",
            result.comments_analyzed
        ));
        summary.push_str(&format!("> {}\n\n", result.recommendation()));
        summary
    }

    fn render_breakdown(&self, comments: &[&Comment]) -> String {
        if !self.include_breakdown || comments.is_empty() {
            return String::new();
        }

        let mut breakdown = String::new();
        breakdown.push_str("## Comments\n\n");
        breakdown.push_str("| Comment | Sentiment | Text |\n");
        breakdown.push_str("|---|---|---|\n");
        for comment in comments {
            breakdown.push_str(&format!(
                "| `{}` | {:+.2} | {} |\n",
                comment.id,
                comment_sentiment(&comment.text),
                comment.text.replace('|', "\\|")
            ));
        }
        breakdown.push('\n');
        breakdown
    }
}

impl Default for MarkdownReport {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportRenderer for MarkdownReport {
    fn render(
        &self,
        video: &Video,
        result: &ScoreResult,
        comments: &[&Comment],
    ) -> Result<String> {
        let mut out = String::new();
        out.push_str(&self.render_header(video, result));
        out.push_str(&self.render_summary(result));
        out.push_str(&self.render_breakdown(comments));
        Ok(out)
    }

    fn format_name(&self) -> &'static str {
        "markdown"
    }
}
