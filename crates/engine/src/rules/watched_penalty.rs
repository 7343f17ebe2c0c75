//! Rule that pushes already-watched movies to the bottom.
//!
//! Runs after the wishlist boost, so a movie that is both wishlisted and
//! watched ends up at `(base + bonus) * 1.5 - 100`.

use crate::traits::{ScoreCard, ScoreRule};
use crate::user_stats::UserStats;
use catalog::Movie;

pub const WATCHED_PENALTY: f64 = 100.0;

/// Subtracts a flat penalty from movies in the watch history.
///
/// ## Algorithm
/// Uses the set in UserStats.watch_history for lookups; the reason is
/// left alone.
pub struct WatchedPenaltyRule {
    penalty: f64,
}

impl WatchedPenaltyRule {
    pub fn new() -> Self {
        Self {
            penalty: WATCHED_PENALTY,
        }
    }
}

impl Default for WatchedPenaltyRule {
    fn default() -> Self {
        Self::new()
    }
}

impl ScoreRule for WatchedPenaltyRule {
    fn name(&self) -> &str {
        "WatchedPenaltyRule"
    }

    fn apply(&self, movie: &Movie, stats: &UserStats, card: &mut ScoreCard) {
        if stats.has_watched(&movie.id) {
            card.score -= self.penalty;
        }
    }
}
