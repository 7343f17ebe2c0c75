//! Rule that lifts wishlisted movies.

use crate::traits::{ScoreCard, ScoreRule};
use crate::user_stats::UserStats;
use catalog::Movie;

pub const WISHLIST_MULTIPLIER: f64 = 1.5;

pub const WISHLIST_REASON: &str = "Prioritized from your Wishlist.";

/// Multiplies the running score of a wishlisted movie and swaps its reason.
pub struct WishlistBoostRule {
    multiplier: f64,
}

impl WishlistBoostRule {
    pub fn new() -> Self {
        Self {
            multiplier: WISHLIST_MULTIPLIER,
        }
    }
}

impl Default for WishlistBoostRule {
    fn default() -> Self {
        Self::new()
    }
}

impl ScoreRule for WishlistBoostRule {
    fn name(&self) -> &str {
        "WishlistBoostRule"
    }

    fn apply(&self, movie: &Movie, stats: &UserStats, card: &mut ScoreCard) {
        if stats.is_wishlisted(&movie.id) {
            card.score *= self.multiplier;
            card.reason = WISHLIST_REASON.to_string();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::DEFAULT_REASON;
    use catalog::Catalog;

    #[test]
    fn test_wishlisted_movie_boosted() {
        let catalog = Catalog::builtin();
        let mut stats = UserStats::new();
        stats.add_to_wishlist("1");

        let mut card = ScoreCard {
            score: 25.0,
            ..ScoreCard::new()
        };
        WishlistBoostRule::new().apply(catalog.get_movie("1").unwrap(), &stats, &mut card);

        assert_eq!(card.score, 37.5);
        assert_eq!(card.reason, WISHLIST_REASON);
    }

    #[test]
    fn test_other_movies_untouched() {
        let catalog = Catalog::builtin();
        let mut stats = UserStats::new();
        stats.add_to_wishlist("1");

        let mut card = ScoreCard {
            score: 25.0,
            ..ScoreCard::new()
        };
        WishlistBoostRule::new().apply(catalog.get_movie("2").unwrap(), &stats, &mut card);

        assert_eq!(card.score, 25.0);
        assert_eq!(card.reason, DEFAULT_REASON);
    }

    #[test]
    fn test_zero_score_stays_zero() {
        let catalog = Catalog::builtin();
        let mut stats = UserStats::new();
        stats.add_to_wishlist("4");

        let mut card = ScoreCard::new();
        WishlistBoostRule::new().apply(catalog.get_movie("4").unwrap(), &stats, &mut card);

        assert_eq!(card.score, 0.0);
        assert_eq!(card.reason, WISHLIST_REASON);
    }
}
