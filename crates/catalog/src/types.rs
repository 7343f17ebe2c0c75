//! Core domain types for the movie catalog.
//!
//! Movies are keyed by a string id and tagged with free-form genre names.
//! The catalog keeps insertion order so that a fresh scoring pass sees
//! the movies the way they were declared.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

use crate::error::{CatalogError, Result};

// =============================================================================
// Type Aliases
// =============================================================================

/// Unique identifier for a movie within a catalog
pub type MovieId = String;

/// Genre tag as it appears on a movie and in a user's hours map
pub type GenreName = String;

// =============================================================================
// Movie-related Types
// =============================================================================

/// Status tag derived on every scoring pass.
///
/// Exactly one applies to a movie at a time. It is never a source of truth
/// on its own; it reflects the user stats it was last computed against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MovieStatus {
    /// At least one genre the user watches more than an hour a day
    Favorite,
    /// Already in the user's watch history
    Watched,
    /// Everything else
    #[default]
    Discovery,
}

impl MovieStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            MovieStatus::Favorite => "favorite",
            MovieStatus::Watched => "watched",
            MovieStatus::Discovery => "discovery",
        }
    }
}

impl fmt::Display for MovieStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Represents a movie in the catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    pub id: MovieId,
    pub title: String,
    /// Genre tags, non-empty; duplicates are kept as declared
    #[serde(rename = "genre")]
    pub genres: Vec<GenreName>,
    pub description: String,
    /// Critic rating, e.g. 8.7
    pub rating: f32,
    pub year: u16,
    /// Poster reference
    #[serde(rename = "imageUrl")]
    pub image_url: String,
    #[serde(default)]
    pub status: MovieStatus,
}

impl Movie {
    /// Returns a copy of this movie carrying `status`
    pub fn with_status(&self, status: MovieStatus) -> Self {
        Self {
            status,
            ..self.clone()
        }
    }
}

// =============================================================================
// Catalog - The In-Memory Movie Table
// =============================================================================

/// Holds the movie list plus the indices used for lookups.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    /// Movies in declaration order
    pub(crate) movies: Vec<Movie>,
    /// Position of each movie in `movies`
    pub(crate) id_index: HashMap<MovieId, usize>,
    /// Movies grouped by genre (one movie can appear in several lists)
    pub(crate) genre_index: HashMap<GenreName, Vec<MovieId>>,
}

impl Catalog {
    /// Creates a new, empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Get a movie by id
    pub fn get_movie(&self, id: &str) -> Option<&Movie> {
        self.id_index.get(id).map(|&pos| &self.movies[pos])
    }

    /// All movies in declaration order
    pub fn movies(&self) -> &[Movie] {
        &self.movies
    }

    /// Ids of every movie tagged with `genre`
    ///
    /// Returns an empty slice for unknown genres
    pub fn get_movies_by_genre(&self, genre: &str) -> &[MovieId] {
        self.genre_index
            .get(genre)
            .map(|v| v.as_slice())
            .unwrap_or(&[])
    }

    /// Distinct genres across the catalog, sorted by name
    pub fn genres(&self) -> Vec<&str> {
        let mut genres: Vec<&str> = self.genre_index.keys().map(|g| g.as_str()).collect();
        genres.sort_unstable();
        genres
    }

    pub fn len(&self) -> usize {
        self.movies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }

    /// Insert a movie and update the indices
    ///
    /// Fails if a movie with the same id is already present.
    pub fn insert_movie(&mut self, movie: Movie) -> Result<()> {
        if self.id_index.contains_key(&movie.id) {
            return Err(CatalogError::DuplicateMovie { id: movie.id });
        }

        let mut seen: Vec<&GenreName> = Vec::with_capacity(movie.genres.len());
        for genre in &movie.genres {
            // A duplicated tag should still list the movie once per genre
            if seen.contains(&genre) {
                continue;
            }
            seen.push(genre);
            self.genre_index
                .entry(genre.clone())
                .or_default()
                .push(movie.id.clone());
        }

        self.id_index.insert(movie.id.clone(), self.movies.len());
        self.movies.push(movie);
        Ok(())
    }
}
