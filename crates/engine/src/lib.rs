//! Recommendation scoring for the movie catalog.
//!
//! This crate provides:
//! - `UserStats`, the user's wishlist, watch history and genre hours
//! - the `ScoreRule` trait and the standard rules
//! - `Scorer` for chaining rules into a scoring pass
//! - status resolution (favorite / watched / discovery)
//!
//! ## Architecture
//! A pass handles each movie on its own:
//! 1. Genre affinity adds points for genres the user watches
//! 2. The wishlist boost multiplies the running score
//! 3. The watched penalty subtracts a flat amount
//! 4. The status is resolved, with watch history taking priority
//!
//! Results are then sorted by descending score.
//!
//! ## Example Usage
//! ```ignore
//! use catalog::Catalog;
//! use engine::{calculate_recommendations, UserStats};
//!
//! let catalog = Catalog::builtin();
//! let results = calculate_recommendations(catalog.movies(), &UserStats::demo());
//! for r in &results {
//!     println!("{} {:.1} {}", r.movie.title, r.score, r.reason);
//! }
//! ```

pub mod error;
pub mod user_stats;
pub mod traits;
pub mod rules;
pub mod status;
pub mod result;
pub mod scorer;

// Re-export main types
pub use error::{EngineError, Result};
pub use result::{HOT_SCORE_THRESHOLD, RecommendationResult};
pub use scorer::{Scorer, calculate_recommendations};
pub use status::resolve_status;
pub use traits::{DEFAULT_REASON, ScoreCard, ScoreRule};
pub use user_stats::{FAVORITE_HOURS_THRESHOLD, UserStats};
