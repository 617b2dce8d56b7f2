//! Report rendering for analysis results
//!
//! Renderers turn a video's analysis into text, markdown or JSON for
//! display or piping. The catalog stays in charge of producing the
//! data; renderers only format it.

pub mod json;
pub mod markdown;
pub mod text;

use crate::catalog::{Comment, Video};
use crate::error::{Result, TubegradeError};
use crate::scoring::ScoreResult;
use std::str::FromStr;

pub use json::JsonReport;
pub use markdown::MarkdownReport;
pub use text::TextReport;

/// Renderer for one video's analysis report
pub trait ReportRenderer {
    /// Render the report
    fn render(&self, video: &Video, result: &ScoreResult, comments: &[&Comment])
        -> Result<String>;

    /// Format name for display
    fn format_name(&self) -> &'static str;
}

/// Supported report formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
    Text,
    Markdown,
    Json,
}

impl ReportFormat {
    /// Create a renderer for this format
    pub fn renderer(&self, include_breakdown: bool) -> Box<dyn ReportRenderer> {
        match self {
            ReportFormat::Text => Box::new(TextReport::new().with_breakdown(include_breakdown)),
            ReportFormat::Markdown => {
                Box::new(MarkdownReport::new().with_breakdown(include_breakdown))
            }
            ReportFormat::Json => Box::new(JsonReport::new().with_breakdown(include_breakdown)),
        }
    }
}

impl FromStr for ReportFormat {
    type Err = TubegradeError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(ReportFormat::Text),
            "markdown" | "md" => Ok(ReportFormat::Markdown),
            "json" => Ok(ReportFormat::Json),
            other => Err(TubegradeError::Validation(format!(
                "Unknown report format: {}",
                other
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_from_str() {
        assert_eq!("text".parse::<ReportFormat>().unwrap(), ReportFormat::Text);
        assert_eq!("md".parse::<ReportFormat>().unwrap(), ReportFormat::Markdown);
        assert_eq!("JSON".parse::<ReportFormat>().unwrap(), ReportFormat::Json);
        assert!("yaml".parse::<ReportFormat>().is_err());
    }

    #[test]
    fn test_renderer_dispatch() {
        assert_eq!(ReportFormat::Text.renderer(false).format_name(), "text");
        assert_eq!(
            ReportFormat::Markdown.renderer(false).format_name(),
            "markdown"
        );
        assert_eq!(ReportFormat::Json.renderer(false).format_name(), "json");
    }
}
