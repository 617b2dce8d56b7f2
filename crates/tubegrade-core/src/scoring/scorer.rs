//! Keyword-based comment scorer
//!
//! The scorer is total over its input: any sequence of zero or more
//! comments (including empty texts) maps to a defined result, so the
//! analysis functions never return errors.

use super::result::ScoreResult;
use crate::catalog::Comment;

/// Keywords counted as positive sentiment
pub const POSITIVE_KEYWORDS: [&str; 7] = [
    "good", "great", "excellent", "amazing", "love", "best", "awesome",
];

/// Keywords counted as negative sentiment
pub const NEGATIVE_KEYWORDS: [&str; 7] = [
    "bad", "terrible", "awful", "hate", "worst", "poor", "disappointing",
];

/// Sentiment of a single comment text, in [-1, 1].
///
/// Each keyword counts at most once, regardless of how often it occurs,
/// and matches as a plain substring of the lowercased text. Text with
/// no keyword from either list is neutral (0.0).
pub fn comment_sentiment(text: &str) -> f64 {
    let lowered = text.to_lowercase();

    let positive = POSITIVE_KEYWORDS
        .iter()
        .filter(|word| lowered.contains(*word))
        .count();
    let negative = NEGATIVE_KEYWORDS
        .iter()
        .filter(|word| lowered.contains(*word))
        .count();

    if positive + negative == 0 {
        return 0.0;
    }
    (positive as f64 - negative as f64) / (positive as f64 + negative as f64)
}

/// Comment quality scorer
///
/// Stateless: every call computes sentiment fresh over exactly the
/// comments passed in, so repeated analyses of the same input yield the
/// same score and instances can be shared freely.
#[derive(Debug, Clone, Copy, Default)]
pub struct CommentScorer;

impl CommentScorer {
    /// Create a new scorer
    pub fn new() -> Self {
        Self
    }

    /// Analyze a sequence of comments and produce a score result
    pub fn analyze(&self, comments: &[Comment]) -> ScoreResult {
        self.analyze_texts(comments.iter().map(|c| c.text.as_str()))
    }

    /// Analyze raw comment texts without full comment records
    pub fn analyze_texts<'a, I>(&self, texts: I) -> ScoreResult
    where
        I: IntoIterator<Item = &'a str>,
    {
        let sentiments: Vec<f64> = texts.into_iter().map(comment_sentiment).collect();
        let quality_score = aggregate_quality(&sentiments);

        tracing::debug!(
            comments = sentiments.len(),
            score = quality_score,
            "analyzed comments"
        );

        ScoreResult::new(quality_score, sentiments.len())
    }
}

/// Map per-comment sentiments onto a quality score in [0, 10].
///
/// An empty input has no evidence either way and scores the neutral
/// default of 5.0.
fn aggregate_quality(sentiments: &[f64]) -> f64 {
    if sentiments.is_empty() {
        return 5.0;
    }

    let avg = sentiments.iter().sum::<f64>() / sentiments.len() as f64;
    // avg is in [-1, 1]; the clamp guards the invariant against float
    // rounding at the extremes.
    ((avg + 1.0) * 5.0).clamp(0.0, 10.0)
}
