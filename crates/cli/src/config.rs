//! Run configuration.
//!
//! Settings come from an optional JSON file and are then overridden by
//! command-line flags. Absent keys fall back to the defaults below.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use catalog::Catalog;
use engine::UserStats;
use serde::Deserialize;
use tracing::info;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AppConfig {
    /// Catalog file; the built-in catalog when unset
    #[serde(default)]
    pub catalog: Option<PathBuf>,
    /// Profile file; the demo profile when unset
    #[serde(default)]
    pub profile: Option<PathBuf>,
    #[serde(default)]
    pub high_contrast: bool,
    #[serde(default = "default_limit")]
    pub limit: usize,
}

fn default_limit() -> usize {
    20
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            catalog: None,
            profile: None,
            high_contrast: false,
            limit: default_limit(),
        }
    }
}

/// Profile edits given on the command line
#[derive(Debug, Clone, Default)]
pub struct ProfileOverrides {
    pub hours: Vec<(String, f64)>,
    pub wishlist: Vec<String>,
    pub watched: Vec<String>,
}

impl AppConfig {
    /// Load from `path`, or use defaults when no file is given
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config file {}", path.display()))?;
        info!("Loaded config from {}", path.display());
        Ok(config)
    }

    pub fn load_catalog(&self) -> Result<Catalog> {
        match &self.catalog {
            Some(path) => Catalog::load_from_file(path)
                .with_context(|| format!("Failed to load catalog {}", path.display())),
            None => Ok(Catalog::builtin()),
        }
    }

    /// The starting profile with command-line edits applied
    pub fn load_profile(&self, overrides: &ProfileOverrides) -> Result<UserStats> {
        let mut stats = match &self.profile {
            Some(path) => UserStats::load_from_file(path)
                .with_context(|| format!("Failed to load profile {}", path.display()))?,
            None => UserStats::demo(),
        };

        for (genre, hours) in &overrides.hours {
            stats.set_hours(genre.as_str(), *hours)?;
        }
        for id in &overrides.wishlist {
            stats.add_to_wishlist(id.as_str());
        }
        for id in &overrides.watched {
            stats.mark_watched(id.as_str());
        }
        Ok(stats)
    }
}

/// Parse a `GENRE=HOURS` pair
pub fn parse_hours(s: &str) -> std::result::Result<(String, f64), String> {
    let (genre, hours) = s
        .split_once('=')
        .ok_or_else(|| format!("expected GENRE=HOURS, got '{}'", s))?;
    let genre = genre.trim();
    if genre.is_empty() {
        return Err("genre name is empty".to_string());
    }
    let hours: f64 = hours
        .trim()
        .parse()
        .map_err(|_| format!("invalid hours '{}'", hours))?;
    Ok((genre.to_string(), hours))
}
