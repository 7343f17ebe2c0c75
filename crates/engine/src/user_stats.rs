//! The user's self-reported viewing profile.
//!
//! A `UserStats` is a snapshot the scorer reads and never writes. The
//! caller mutates it only through `add_to_wishlist` and `mark_watched`,
//! both of which are idempotent.

use crate::error::{EngineError, Result};
use catalog::{GenreName, MovieId};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap, HashSet};
use std::fs;
use std::path::Path;

/// Genres above this many daily hours mark a movie as a favorite
pub const FAVORITE_HOURS_THRESHOLD: f64 = 1.0;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserStats {
    /// Movies the user wants to see; membership only
    #[serde(default)]
    pub wishlist: BTreeSet<MovieId>,
    /// Movies the user has already seen
    #[serde(default)]
    pub watch_history: BTreeSet<MovieId>,
    /// Sparse map of genre to daily hours; absent genres count as zero
    #[serde(default)]
    pub daily_hours_per_genre: HashMap<GenreName, f64>,
}

impl UserStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// The profile the demo starts with
    pub fn demo() -> Self {
        let mut stats = Self::new();
        stats.daily_hours_per_genre.insert("Sci-Fi".to_string(), 3.0);
        stats.daily_hours_per_genre.insert("Action".to_string(), 1.0);
        stats.daily_hours_per_genre.insert("Drama".to_string(), 0.5);
        stats
    }

    /// Parse a profile and check its hours
    pub fn from_json_str(content: &str) -> Result<Self> {
        let stats: UserStats = serde_json::from_str(content)?;
        stats.validate()?;
        Ok(stats)
    }

    pub fn load_from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }

    /// Reject negative or non-finite hours
    pub fn validate(&self) -> Result<()> {
        for (genre, &hours) in &self.daily_hours_per_genre {
            check_hours(genre, hours)?;
        }
        Ok(())
    }

    /// Daily hours for `genre`, zero when absent
    pub fn hours_for(&self, genre: &str) -> f64 {
        self.daily_hours_per_genre.get(genre).copied().unwrap_or(0.0)
    }

    pub fn set_hours(&mut self, genre: impl Into<GenreName>, hours: f64) -> Result<()> {
        let genre = genre.into();
        check_hours(&genre, hours)?;
        self.daily_hours_per_genre.insert(genre, hours);
        Ok(())
    }

    pub fn is_wishlisted(&self, id: &str) -> bool {
        self.wishlist.contains(id)
    }

    pub fn has_watched(&self, id: &str) -> bool {
        self.watch_history.contains(id)
    }

    /// Genres watched strictly more than one hour a day
    pub fn favorite_genres(&self) -> HashSet<&str> {
        self.daily_hours_per_genre
            .iter()
            .filter(|&(_, &hours)| hours > FAVORITE_HOURS_THRESHOLD)
            .map(|(genre, _)| genre.as_str())
            .collect()
    }

    /// Returns `true` if the id was not already on the wishlist
    pub fn add_to_wishlist(&mut self, id: impl Into<MovieId>) -> bool {
        self.wishlist.insert(id.into())
    }

    /// Returns `true` if the id was not already in the watch history
    pub fn mark_watched(&mut self, id: impl Into<MovieId>) -> bool {
        self.watch_history.insert(id.into())
    }
}

fn check_hours(genre: &str, hours: f64) -> Result<()> {
    if !hours.is_finite() || hours < 0.0 {
        return Err(EngineError::InvalidHours {
            genre: genre.to_string(),
            hours,
        });
    }
    Ok(())
}
