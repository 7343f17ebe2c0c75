//! # Catalog Crate
//!
//! Movie records and the in-memory table the recommender scores against.
//!
//! ## Main Components
//!
//! - **types**: `Movie`, `MovieStatus` and the indexed `Catalog`
//! - **builtin**: the embedded demo catalog
//! - **parser**: JSON catalog files and per-record validation
//! - **index**: building and validating a `Catalog`
//! - **error**: error types for catalog loading
//!
//! ## Example Usage
//!
//! ```ignore
//! use catalog::Catalog;
//! use std::path::Path;
//!
//! let builtin = Catalog::builtin();
//! let custom = Catalog::load_from_file(Path::new("movies.json"))?;
//!
//! let movie = builtin.get_movie("1").unwrap();
//! println!("{} ({})", movie.title, movie.year);
//! ```

// Public modules
pub mod error;
pub mod types;
pub mod parser;
pub mod index;
pub mod builtin;

// Re-export commonly used types for convenience
pub use builtin::{ALL_GENRES, builtin_movies};
pub use error::{CatalogError, Result};
pub use types::{Catalog, GenreName, Movie, MovieId, MovieStatus};
