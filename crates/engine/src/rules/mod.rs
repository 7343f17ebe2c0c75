//! Score rule implementations.
//!
//! This module contains the concrete rules that can be chained into a
//! `Scorer`. The standard chain applies them in the order listed here.

pub mod genre_affinity;
pub mod wishlist_boost;
pub mod watched_penalty;

// Re-export for convenience
pub use genre_affinity::GenreAffinityRule;
pub use wishlist_boost::WishlistBoostRule;
pub use watched_penalty::WatchedPenaltyRule;
