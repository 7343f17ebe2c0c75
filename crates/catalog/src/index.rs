//! Catalog building and validation.
//!
//! Turns parsed records into an indexed `Catalog` and checks every record
//! before the catalog is handed to the scorer.

use crate::error::Result;
use crate::parser;
use crate::types::{Catalog, Movie};
use rayon::prelude::*;
use std::path::Path;
use tracing::info;

impl Catalog {
    /// Load and validate a catalog from a JSON file
    ///
    /// Steps:
    /// 1. Parse the records
    /// 2. Insert them in file order (rejects duplicate ids)
    /// 3. Validate every record
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let movies = parser::parse_movies_file(path)?;
        let catalog = Self::from_movies(movies)?;
        info!(
            "Loaded {} movies across {} genres from {}",
            catalog.len(),
            catalog.genre_index.len(),
            path.display()
        );
        Ok(catalog)
    }

    /// Build a validated catalog from owned records
    pub fn from_movies(movies: Vec<Movie>) -> Result<Self> {
        let mut catalog = Catalog::new();
        for movie in movies {
            catalog.insert_movie(movie)?;
        }
        catalog.validate()?;
        Ok(catalog)
    }

    /// Validate every record in parallel
    ///
    /// Returns the first failure rayon reports; which one that is when
    /// several records are bad is unspecified.
    pub fn validate(&self) -> Result<()> {
        self.movies.par_iter().try_for_each(parser::validate_movie)
    }
}
