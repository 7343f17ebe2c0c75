//! Core traits for the scoring chain.
//!
//! A scoring pass runs an ordered list of rules over each movie. Rules
//! see the movie and the user stats and adjust a shared `ScoreCard`.

use crate::user_stats::UserStats;
use catalog::Movie;

/// Reason attached to every result unless a rule replaces it
pub const DEFAULT_REASON: &str = "Recommended based on your interests.";

/// Running state for one movie while the rules are applied.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreCard {
    pub score: f64,
    pub reason: String,
    /// Genre occurrences that counted towards the score
    pub matched_genres: usize,
}

impl ScoreCard {
    pub fn new() -> Self {
        Self {
            score: 0.0,
            reason: DEFAULT_REASON.to_string(),
            matched_genres: 0,
        }
    }
}

impl Default for ScoreCard {
    fn default() -> Self {
        Self::new()
    }
}

/// A single step of the scoring chain.
///
/// ## Design Note
/// - Order matters: rules run in the order they were added to the
///   `Scorer`, and each sees the card the previous one left behind
/// - Rules must not fail; missing data means "no adjustment"
pub trait ScoreRule: Send + Sync {
    /// Returns the name of this rule (for logging/debugging)
    fn name(&self) -> &str;

    /// Adjust `card` for `movie` given the user's stats.
    fn apply(&self, movie: &Movie, stats: &UserStats, card: &mut ScoreCard);
}
