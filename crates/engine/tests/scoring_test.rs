//! Integration tests for the scorer.
//!
//! These exercise the standard rule chain end to end against small
//! hand-built catalogs and the built-in one.

use catalog::{Catalog, Movie, MovieStatus};
use engine::rules::wishlist_boost::WISHLIST_REASON;
use engine::{DEFAULT_REASON, RecommendationResult, Scorer, UserStats, calculate_recommendations};
use std::collections::HashSet;

fn movie(id: &str, genres: &[&str]) -> Movie {
    Movie {
        id: id.to_string(),
        title: format!("Movie {}", id),
        genres: genres.iter().map(|g| g.to_string()).collect(),
        description: "A test movie.".to_string(),
        rating: 7.5,
        year: 2001,
        image_url: String::new(),
        status: MovieStatus::Discovery,
    }
}

fn stats_with_hours(hours: &[(&str, f64)]) -> UserStats {
    let mut stats = UserStats::new();
    for &(genre, h) in hours {
        stats.set_hours(genre, h).unwrap();
    }
    stats
}

fn find<'a>(results: &'a [RecommendationResult], id: &str) -> &'a RecommendationResult {
    results.iter().find(|r| r.movie.id == id).unwrap()
}

#[test]
fn test_sci_fi_example() {
    let movies = vec![movie("1", &["Sci-Fi", "Drama"])];
    let stats = stats_with_hours(&[("Sci-Fi", 3.0)]);

    let results = calculate_recommendations(&movies, &stats);
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].score, 25.0);
    assert_eq!(results[0].movie.status, MovieStatus::Favorite);
    assert_eq!(results[0].reason, DEFAULT_REASON);
}

#[test]
fn test_sci_fi_example_wishlisted() {
    let movies = vec![movie("1", &["Sci-Fi", "Drama"])];
    let mut stats = stats_with_hours(&[("Sci-Fi", 3.0)]);
    stats.add_to_wishlist("1");

    let results = calculate_recommendations(&movies, &stats);
    assert_eq!(results[0].score, 37.5);
    assert_eq!(results[0].reason, WISHLIST_REASON);
    assert_eq!(results[0].movie.status, MovieStatus::Favorite);
}

#[test]
fn test_sci_fi_example_watched() {
    let movies = vec![movie("1", &["Sci-Fi", "Drama"])];
    let mut stats = stats_with_hours(&[("Sci-Fi", 3.0)]);
    stats.mark_watched("1");

    let results = calculate_recommendations(&movies, &stats);
    assert_eq!(results[0].score, -75.0);
    assert_eq!(results[0].movie.status, MovieStatus::Watched);
    assert_eq!(results[0].reason, DEFAULT_REASON);
}

#[test]
fn test_wishlisted_and_watched() {
    let movies = vec![movie("1", &["Sci-Fi", "Drama"])];
    let mut stats = stats_with_hours(&[("Sci-Fi", 3.0)]);
    stats.add_to_wishlist("1");
    stats.mark_watched("1");

    let results = calculate_recommendations(&movies, &stats);
    // (10 + 15) * 1.5 - 100
    assert_eq!(results[0].score, -62.5);
    assert_eq!(results[0].movie.status, MovieStatus::Watched);
    assert_eq!(results[0].reason, WISHLIST_REASON);
}

#[test]
fn test_sorting_puts_wishlist_above_watched() {
    let movies = vec![movie("w", &["Sci-Fi"]), movie("b", &["Sci-Fi"])];
    let mut stats = stats_with_hours(&[("Sci-Fi", 3.0)]);
    stats.mark_watched("w");
    stats.add_to_wishlist("b");

    let results = calculate_recommendations(&movies, &stats);
    assert_eq!(results[0].movie.id, "b");
    assert_eq!(results[0].score, 37.5);
    assert_eq!(results[1].movie.id, "w");
    assert_eq!(results[1].score, -75.0);
}

#[test]
fn test_favorite_threshold_exactly_one_hour() {
    let movies = vec![movie("1", &["Action", "Horror"])];
    let stats = stats_with_hours(&[("Action", 1.0)]);

    let results = calculate_recommendations(&movies, &stats);
    assert_eq!(results[0].movie.status, MovieStatus::Discovery);
    // Still counts for the score
    assert_eq!(results[0].score, 15.0);
}

#[test]
fn test_one_result_per_input_movie() {
    let catalog = Catalog::builtin();
    let mut stats = UserStats::demo();
    stats.add_to_wishlist("does-not-exist");
    stats.mark_watched("4");

    let results = calculate_recommendations(catalog.movies(), &stats);
    assert_eq!(results.len(), catalog.len());

    let ids: HashSet<&str> = results.iter().map(|r| r.movie.id.as_str()).collect();
    assert_eq!(ids.len(), catalog.len());
    for movie in catalog.movies() {
        assert!(ids.contains(movie.id.as_str()));
    }
}

#[test]
fn test_results_sorted_descending() {
    let catalog = Catalog::builtin();
    let mut stats = UserStats::demo();
    stats.add_to_wishlist("6");
    stats.mark_watched("3");

    let results = calculate_recommendations(catalog.movies(), &stats);
    for pair in results.windows(2) {
        assert!(pair[0].score >= pair[1].score);
    }
}

#[test]
fn test_scoring_is_idempotent() {
    let catalog = Catalog::builtin();
    let mut stats = UserStats::demo();
    stats.add_to_wishlist("2");
    stats.mark_watched("5");

    let scorer = Scorer::standard();
    let first = scorer.score(catalog.movies(), &stats);
    let second = scorer.score(catalog.movies(), &stats);
    assert_eq!(first, second);
}

#[test]
fn test_more_hours_never_lowers_score() {
    let catalog = Catalog::builtin();
    let base = UserStats::demo();

    for hours in [0.0, 0.5, 1.0, 2.0, 7.5] {
        let mut lower = base.clone();
        lower.set_hours("Drama", hours).unwrap();
        let mut higher = base.clone();
        higher.set_hours("Drama", hours + 0.25).unwrap();

        let before = calculate_recommendations(catalog.movies(), &lower);
        let after = calculate_recommendations(catalog.movies(), &higher);

        for id in catalog.get_movies_by_genre("Drama") {
            assert!(find(&after, id).score >= find(&before, id).score);
        }
    }
}

#[test]
fn test_watched_always_wins_status() {
    let catalog = Catalog::builtin();
    let mut stats = stats_with_hours(&[("Sci-Fi", 5.0), ("Drama", 4.0), ("Action", 2.0)]);
    for movie in catalog.movies() {
        stats.mark_watched(movie.id.clone());
    }

    let results = calculate_recommendations(catalog.movies(), &stats);
    assert!(results.iter().all(|r| r.movie.status == MovieStatus::Watched));
}

#[test]
fn test_empty_catalog() {
    let results = calculate_recommendations(&[], &UserStats::demo());
    assert!(results.is_empty());
}

#[test]
fn test_hot_flag() {
    let catalog = Catalog::builtin();
    let results = calculate_recommendations(catalog.movies(), &UserStats::demo());

    // Inception scores 40, The Dark Knight 15
    assert!(find(&results, "3").is_hot());
    assert!(!find(&results, "2").is_hot());
}
