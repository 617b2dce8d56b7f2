//! Analysis result model

use crate::types::ResultId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Recommendation tier derived from a quality score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RecommendationTier {
    /// Quality score >= 8.0
    HighlyRecommended,
    /// Quality score in [6.0, 8.0)
    Recommended,
    /// Quality score in [4.0, 6.0)
    Mixed,
    /// Quality score < 4.0
    NotRecommended,
}

impl RecommendationTier {
    /// Classify a quality score into a tier. Thresholds are half-open:
    /// 8.0 itself is HighlyRecommended, not Recommended.
    pub fn classify(quality_score: f64) -> Self {
        if quality_score >= 8.0 {
            RecommendationTier::HighlyRecommended
        } else if quality_score >= 6.0 {
            RecommendationTier::Recommended
        } else if quality_score >= 4.0 {
            RecommendationTier::Mixed
        } else {
            RecommendationTier::NotRecommended
        }
    }

    /// Fixed recommendation text for this tier
    pub fn message(&self) -> &'static str {
        match self {
            RecommendationTier::HighlyRecommended => {
                "Highly recommended! This video has excellent reviews."
            }
            RecommendationTier::Recommended => {
                "Recommended. This video has good reviews overall."
            }
            RecommendationTier::Mixed => "Mixed reviews. Watch at your own discretion.",
            RecommendationTier::NotRecommended => {
                "Not recommended. This video has poor reviews."
            }
        }
    }
}

impl fmt::Display for RecommendationTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecommendationTier::HighlyRecommended => write!(f, "Highly Recommended"),
            RecommendationTier::Recommended => write!(f, "Recommended"),
            RecommendationTier::Mixed => write!(f, "Mixed"),
            RecommendationTier::NotRecommended => write!(f, "Not Recommended"),
        }
    }
}

/// Outcome of one analysis invocation
///
/// Derived data, never mutated after creation. One result per analysis
/// call; results are not merged across runs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreResult {
    /// Unique result identifier
    pub id: ResultId,
    /// Quality score in [0, 10]
    pub quality_score: f64,
    /// Number of comments analyzed in this invocation
    pub comments_analyzed: usize,
    /// Tier selected by the quality score
    pub tier: RecommendationTier,
    /// When the analysis ran
    pub computed_at: DateTime<Utc>,
}

impl ScoreResult {
    /// Create a result from an already-clamped quality score
    pub fn new(quality_score: f64, comments_analyzed: usize) -> Self {
        Self {
            id: ResultId::generate(),
            quality_score,
            comments_analyzed,
            tier: RecommendationTier::classify(quality_score),
            computed_at: Utc::now(),
        }
    }

    /// Recommendation text for this result
    pub fn recommendation(&self) -> &'static str {
        self.tier.message()
    }
}
