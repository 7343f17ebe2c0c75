//! Error types for the engine crate.
//!
//! Scoring itself never fails. These cover building a `UserStats` from
//! untrusted input.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum EngineError {
    /// Daily hours must be a finite, non-negative number
    #[error("Invalid daily hours for {genre}: {hours}")]
    InvalidHours { genre: String, hours: f64 },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed profile JSON: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, EngineError>;
