//! Benchmarks for the scoring pass
//!
//! Run with: cargo bench --package engine

use catalog::{Catalog, Movie, MovieStatus};
use criterion::{Criterion, black_box, criterion_group, criterion_main};
use engine::{Scorer, UserStats};

const GENRES: [&str; 9] = [
    "Sci-Fi", "Action", "Drama", "Comedy", "Thriller", "Horror", "Documentary", "Crime", "Biography",
];

/// A synthetic catalog of `size` movies cycling through the genre list
fn synthetic_catalog(size: usize) -> Vec<Movie> {
    (0..size)
        .map(|i| Movie {
            id: i.to_string(),
            title: format!("Synthetic {}", i),
            genres: vec![
                GENRES[i % GENRES.len()].to_string(),
                GENRES[(i * 7 + 3) % GENRES.len()].to_string(),
            ],
            description: String::new(),
            rating: 7.0,
            year: 2000,
            image_url: String::new(),
            status: MovieStatus::Discovery,
        })
        .collect()
}

fn busy_profile(size: usize) -> UserStats {
    let mut stats = UserStats::demo();
    for i in (0..size).step_by(5) {
        stats.add_to_wishlist(i.to_string());
    }
    for i in (0..size).step_by(3) {
        stats.mark_watched(i.to_string());
    }
    stats
}

fn bench_builtin_catalog(c: &mut Criterion) {
    let catalog = Catalog::builtin();
    let scorer = Scorer::standard();
    let stats = UserStats::demo();

    c.bench_function("score_builtin_catalog", |b| {
        b.iter(|| {
            let results = scorer.score(black_box(catalog.movies()), black_box(&stats));
            black_box(results)
        })
    });
}

fn bench_large_catalog(c: &mut Criterion) {
    let movies = synthetic_catalog(10_000);
    let stats = busy_profile(10_000);
    let scorer = Scorer::standard();

    c.bench_function("score_10k_movies", |b| {
        b.iter(|| {
            let results = scorer.score(black_box(&movies), black_box(&stats));
            black_box(results)
        })
    });
}

criterion_group!(benches, bench_builtin_catalog, bench_large_catalog);
criterion_main!(benches);
