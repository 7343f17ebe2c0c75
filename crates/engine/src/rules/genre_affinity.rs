//! Rule that rewards overlap with the genres the user actually watches.

use crate::traits::{ScoreCard, ScoreRule};
use crate::user_stats::UserStats;
use catalog::Movie;

/// Points per matching genre occurrence
pub const GENRE_MATCH_POINTS: f64 = 10.0;

/// Points per daily hour of a matching genre
pub const HOURS_WEIGHT: f64 = 5.0;

/// Scores a movie by its matching genres.
///
/// ## Algorithm
/// 1. A genre matches when the user logs strictly more than 0 hours for it
/// 2. Add `match_points` per matching occurrence
/// 3. Then add `hours_weight * hours` for each matching occurrence
///
/// Duplicate tags on a movie count once per occurrence.
pub struct GenreAffinityRule {
    match_points: f64,
    hours_weight: f64,
}

impl GenreAffinityRule {
    pub fn new() -> Self {
        Self {
            match_points: GENRE_MATCH_POINTS,
            hours_weight: HOURS_WEIGHT,
        }
    }
}

impl Default for GenreAffinityRule {
    fn default() -> Self {
        Self::new()
    }
}

impl ScoreRule for GenreAffinityRule {
    fn name(&self) -> &str {
        "GenreAffinityRule"
    }

    fn apply(&self, movie: &Movie, stats: &UserStats, card: &mut ScoreCard) {
        let matching: Vec<f64> = movie
            .genres
            .iter()
            .map(|genre| stats.hours_for(genre))
            .filter(|&hours| hours > 0.0)
            .collect();

        card.matched_genres += matching.len();
        card.score += matching.len() as f64 * self.match_points;
        for hours in matching {
            card.score += hours * self.hours_weight;
        }
    }
}
