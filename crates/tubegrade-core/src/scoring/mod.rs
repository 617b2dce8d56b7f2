//! Comment quality scoring
//!
//! A keyword-based sentiment heuristic over a video's comments. Each
//! comment maps to a sentiment in [-1, 1]; the average sentiment maps
//! linearly onto a quality score in [0, 10], which selects one of four
//! fixed recommendation tiers.

pub mod result;
pub mod scorer;

pub use result::{RecommendationTier, ScoreResult};
pub use scorer::{comment_sentiment, CommentScorer};
