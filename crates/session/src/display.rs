//! Display mode and the status palette.

use catalog::MovieStatus;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DisplayMode {
    #[default]
    Standard,
    HighContrast,
}

impl DisplayMode {
    pub fn toggle(self) -> Self {
        match self {
            DisplayMode::Standard => DisplayMode::HighContrast,
            DisplayMode::HighContrast => DisplayMode::Standard,
        }
    }

    pub fn is_high_contrast(self) -> bool {
        self == DisplayMode::HighContrast
    }
}

impl fmt::Display for DisplayMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DisplayMode::Standard => f.write_str("standard"),
            DisplayMode::HighContrast => f.write_str("high-contrast"),
        }
    }
}

/// Style classes for a card carrying `status` in `mode`
pub fn status_style(status: MovieStatus, mode: DisplayMode) -> &'static str {
    match (mode, status) {
        (DisplayMode::HighContrast, MovieStatus::Favorite) => "high-contrast-red",
        (DisplayMode::HighContrast, MovieStatus::Watched) => "high-contrast-black",
        (DisplayMode::HighContrast, MovieStatus::Discovery) => "high-contrast-white",
        (DisplayMode::Standard, MovieStatus::Favorite) => "bg-red-600 border-red-400",
        (DisplayMode::Standard, MovieStatus::Watched) => {
            "bg-black border-gray-700 opacity-60 grayscale"
        }
        (DisplayMode::Standard, MovieStatus::Discovery) => "bg-gray-800 border-gray-600",
    }
}

/// One row of the status legend
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LegendEntry {
    pub status: MovieStatus,
    pub label: &'static str,
    pub description: &'static str,
}

pub const LEGEND: [LegendEntry; 3] = [
    LegendEntry {
        status: MovieStatus::Favorite,
        label: "Red (Favorite)",
        description: "Genres you watch >1hr daily",
    },
    LegendEntry {
        status: MovieStatus::Watched,
        label: "Black (Watched)",
        description: "Movies already in your history",
    },
    LegendEntry {
        status: MovieStatus::Discovery,
        label: "White (Discovery)",
        description: "New content to explore",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_round_trip() {
        let mode = DisplayMode::default();
        assert_eq!(mode, DisplayMode::Standard);
        assert!(mode.toggle().is_high_contrast());
        assert_eq!(mode.toggle().toggle(), DisplayMode::Standard);
    }

    #[test]
    fn test_status_styles() {
        assert_eq!(
            status_style(MovieStatus::Favorite, DisplayMode::HighContrast),
            "high-contrast-red"
        );
        assert_eq!(
            status_style(MovieStatus::Discovery, DisplayMode::Standard),
            "bg-gray-800 border-gray-600"
        );
        assert!(status_style(MovieStatus::Watched, DisplayMode::Standard).contains("grayscale"));
    }

    #[test]
    fn test_legend_covers_every_status() {
        let statuses: Vec<MovieStatus> = LEGEND.iter().map(|e| e.status).collect();
        assert_eq!(
            statuses,
            vec![MovieStatus::Favorite, MovieStatus::Watched, MovieStatus::Discovery]
        );
    }
}
