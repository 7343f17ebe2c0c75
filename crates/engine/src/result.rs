//! Output of a scoring pass.

use catalog::Movie;
use serde::Serialize;

/// Results scoring above this are flagged as hot
pub const HOT_SCORE_THRESHOLD: f64 = 20.0;

/// A movie with its resolved status, score and the reason shown to the user.
///
/// Scores have no fixed range and may be negative; they only mean
/// something relative to other results from the same pass.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RecommendationResult {
    pub movie: Movie,
    pub score: f64,
    pub reason: String,
}

impl RecommendationResult {
    /// "Hot Recommendation" marker
    pub fn is_hot(&self) -> bool {
        self.score > HOT_SCORE_THRESHOLD
    }
}
