//! Error types for the catalog crate.
//!
//! Only loading and validating a catalog can fail. Lookups on a built
//! catalog return `Option` or empty slices instead.

use thiserror::Error;

/// Errors that can occur while loading or validating a movie catalog
#[derive(Error, Debug)]
pub enum CatalogError {
    /// Catalog file could not be found
    #[error("Failed to open catalog file: {path}")]
    FileNotFound { path: String },

    /// I/O error occurred while reading the catalog
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Catalog file is not a valid JSON array of movie records
    #[error("Malformed catalog JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Two records share the same movie id
    #[error("Duplicate movie id: {id}")]
    DuplicateMovie { id: String },

    /// A record failed validation
    #[error("Invalid movie '{id}': {reason}")]
    InvalidMovie { id: String, reason: String },
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, CatalogError>;
