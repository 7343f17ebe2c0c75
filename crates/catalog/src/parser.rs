//! Parser for catalog files.
//!
//! A catalog file is a JSON array of movie records:
//!
//! ```json
//! [
//!   { "id": "1", "title": "Interstellar", "genre": ["Sci-Fi", "Drama"],
//!     "description": "...", "rating": 8.7, "year": 2014,
//!     "imageUrl": "https://picsum.photos/seed/inter/400/600" }
//! ]
//! ```
//!
//! `status` may be omitted and defaults to `discovery`. Whatever a file
//! says, the status is recomputed on the next scoring pass.

use crate::error::{CatalogError, Result};
use crate::types::Movie;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

/// Parse a JSON array of movie records
pub fn parse_movies_json(content: &str) -> Result<Vec<Movie>> {
    let movies: Vec<Movie> = serde_json::from_str(content)?;
    Ok(movies)
}

/// Read and parse a catalog file
pub fn parse_movies_file(path: &Path) -> Result<Vec<Movie>> {
    let content = fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => CatalogError::FileNotFound {
            path: path.display().to_string(),
        },
        _ => CatalogError::Io(e),
    })?;
    parse_movies_json(&content)
}

/// Check the fields of a single record
pub fn validate_movie(movie: &Movie) -> Result<()> {
    let invalid = |reason: &str| CatalogError::InvalidMovie {
        id: movie.id.clone(),
        reason: reason.to_string(),
    };

    if movie.id.trim().is_empty() {
        return Err(invalid("empty id"));
    }
    if movie.title.trim().is_empty() {
        return Err(invalid("empty title"));
    }
    if movie.genres.is_empty() {
        return Err(invalid("no genres"));
    }
    if movie.genres.iter().any(|g| g.trim().is_empty()) {
        return Err(invalid("blank genre tag"));
    }
    if !movie.rating.is_finite() {
        return Err(invalid("rating is not a finite number"));
    }
    Ok(())
}
