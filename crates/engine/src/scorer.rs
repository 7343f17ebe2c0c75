//! The Scorer runs the rule chain over a catalog.
//!
//! A pass is pure: it reads the movies and the user stats and produces
//! fresh results, one per input movie, ordered by descending score.

use crate::result::RecommendationResult;
use crate::rules::{GenreAffinityRule, WatchedPenaltyRule, WishlistBoostRule};
use crate::status::resolve_status;
use crate::traits::{ScoreCard, ScoreRule};
use crate::user_stats::UserStats;
use catalog::Movie;
use tracing::{debug, instrument};

/// Chains score rules together into a scoring pass.
///
/// ## Usage
/// ```ignore
/// let scorer = Scorer::new()
///     .add_rule(GenreAffinityRule::new())
///     .add_rule(WishlistBoostRule::new())
///     .add_rule(WatchedPenaltyRule::new());
///
/// let results = scorer.score(catalog.movies(), &stats);
/// ```
pub struct Scorer {
    rules: Vec<Box<dyn ScoreRule>>,
}

impl Scorer {
    /// Create a scorer with no rules; every movie scores 0.
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// The standard chain: genre affinity, then wishlist boost, then
    /// watched penalty.
    pub fn standard() -> Self {
        Self::new()
            .add_rule(GenreAffinityRule::new())
            .add_rule(WishlistBoostRule::new())
            .add_rule(WatchedPenaltyRule::new())
    }

    /// Append a rule to the chain (builder pattern).
    pub fn add_rule(mut self, rule: impl ScoreRule + 'static) -> Self {
        self.rules.push(Box::new(rule));
        self
    }

    pub fn rule_names(&self) -> Vec<&str> {
        self.rules.iter().map(|r| r.name()).collect()
    }

    /// Score every movie against `stats`.
    ///
    /// ## Algorithm
    /// 1. Compute the favorite-genre set once for the pass
    /// 2. For each movie, run every rule in order over a fresh card
    /// 3. Resolve the movie's status
    /// 4. Sort by descending score (stable, so ties keep input order)
    #[instrument(skip_all, fields(movies = movies.len()))]
    pub fn score(&self, movies: &[Movie], stats: &UserStats) -> Vec<RecommendationResult> {
        let favorite_genres = stats.favorite_genres();
        debug!("Favorite genres for this pass: {:?}", favorite_genres);

        let mut results: Vec<RecommendationResult> = movies
            .iter()
            .map(|movie| {
                let mut card = ScoreCard::new();
                for rule in &self.rules {
                    rule.apply(movie, stats, &mut card);
                }
                debug!(
                    "Scored {} ({}): {} from {} matching genres",
                    movie.id, movie.title, card.score, card.matched_genres
                );

                let status = resolve_status(movie, stats, &favorite_genres);
                RecommendationResult {
                    movie: movie.with_status(status),
                    score: card.score,
                    reason: card.reason,
                }
            })
            .collect();

        results.sort_by(|a, b| b.score.total_cmp(&a.score));
        results
    }
}

impl Default for Scorer {
    fn default() -> Self {
        Self::standard()
    }
}

/// Score `movies` with the standard rule chain
pub fn calculate_recommendations(movies: &[Movie], stats: &UserStats) -> Vec<RecommendationResult> {
    Scorer::standard().score(movies, stats)
}
