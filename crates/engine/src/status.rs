//! Status resolution for a scored movie.

use crate::user_stats::UserStats;
use catalog::{Movie, MovieStatus};
use std::collections::HashSet;

/// Pick the single status tag for `movie`.
///
/// Watch history wins over everything else, including the wishlist.
/// Otherwise any genre in `favorite_genres` makes it a favorite.
pub fn resolve_status(
    movie: &Movie,
    stats: &UserStats,
    favorite_genres: &HashSet<&str>,
) -> MovieStatus {
    if stats.has_watched(&movie.id) {
        MovieStatus::Watched
    } else if movie
        .genres
        .iter()
        .any(|genre| favorite_genres.contains(genre.as_str()))
    {
        MovieStatus::Favorite
    } else {
        MovieStatus::Discovery
    }
}
