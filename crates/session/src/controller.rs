//! # Application Controller
//!
//! Owns all interactive state and changes it only through the named
//! transitions below:
//! 1. Profile edits (wishlist, watched) trigger a full rescoring
//! 2. Display mode and voice control toggle independently
//! 3. Selection moves within the current list, clamped at both ends
//! 4. Voice transcripts are parsed into commands and applied
//!
//! Everything runs on the caller's thread. Speech output is the only
//! thing that continues in the background.

use std::sync::Arc;

use tracing::{debug, info, warn};

use catalog::{Catalog, Movie};
use engine::{RecommendationResult, Scorer, UserStats};

use crate::display::DisplayMode;
use crate::error::SessionError;
use crate::recognizer::{ListeningSession, RecognizerConfig, SpeechRecognizer};
use crate::speech::{Announcer, SpeechSynthesizer};
use crate::voice::VoiceCommand;

pub const ACTIVATION_PROMPT: &str =
    "Voice commands activated. You can say: next, previous, read details, or add to wishlist.";

/// Interactive session over a catalog and one user's stats
pub struct AppController<S: SpeechSynthesizer> {
    catalog: Arc<Catalog>,
    scorer: Scorer,
    stats: UserStats,
    recommendations: Vec<RecommendationResult>,
    display_mode: DisplayMode,
    selected_index: usize,
    listening: bool,
    /// Idle recognizer, present while not listening (if the host has one)
    recognizer: Option<Box<dyn SpeechRecognizer>>,
    session: Option<ListeningSession>,
    recognizer_config: RecognizerConfig,
    announcer: Announcer<S>,
}

impl<S: SpeechSynthesizer> AppController<S> {
    /// Create a controller and compute the initial recommendations.
    ///
    /// No recognizer is attached; voice control stays a no-op until
    /// `with_recognizer` supplies one.
    pub fn new(catalog: Arc<Catalog>, stats: UserStats, synthesizer: S) -> Self {
        let mut controller = Self {
            catalog,
            scorer: Scorer::standard(),
            stats,
            recommendations: Vec::new(),
            display_mode: DisplayMode::Standard,
            selected_index: 0,
            listening: false,
            recognizer: None,
            session: None,
            recognizer_config: RecognizerConfig::default(),
            announcer: Announcer::new(synthesizer),
        };
        controller.recompute();
        controller
    }

    /// Attach the host's speech recognizer (builder pattern).
    pub fn with_recognizer(mut self, recognizer: Box<dyn SpeechRecognizer>) -> Self {
        self.recognizer = Some(recognizer);
        self
    }

    pub fn with_display_mode(mut self, mode: DisplayMode) -> Self {
        self.display_mode = mode;
        self
    }

    // Accessors

    pub fn recommendations(&self) -> &[RecommendationResult] {
        &self.recommendations
    }

    pub fn selected(&self) -> Option<&RecommendationResult> {
        self.recommendations.get(self.selected_index)
    }

    pub fn selected_index(&self) -> usize {
        self.selected_index
    }

    pub fn stats(&self) -> &UserStats {
        &self.stats
    }

    pub fn display_mode(&self) -> DisplayMode {
        self.display_mode
    }

    pub fn is_listening(&self) -> bool {
        self.listening
    }

    pub fn announcer(&self) -> &Announcer<S> {
        &self.announcer
    }

    // Profile transitions

    /// Add `id` to the wishlist; rescoring only happens when it is new.
    pub fn add_to_wishlist(&mut self, id: &str) -> bool {
        let added = self.stats.add_to_wishlist(id);
        if added {
            info!("Added {} to wishlist", id);
            self.recompute();
        }
        added
    }

    /// Add `id` to the watch history; rescoring only happens when it is new.
    pub fn mark_watched(&mut self, id: &str) -> bool {
        let added = self.stats.mark_watched(id);
        if added {
            info!("Marked {} as watched", id);
            self.recompute();
        }
        added
    }

    // UI transitions

    pub fn toggle_display_mode(&mut self) -> DisplayMode {
        self.display_mode = self.display_mode.toggle();
        info!("Display mode: {}", self.display_mode);
        self.display_mode
    }

    /// Turn voice control on or off.
    ///
    /// Without a working recognizer the flag still flips, but no
    /// transcripts will ever arrive.
    pub fn toggle_listening(&mut self) -> bool {
        if self.listening {
            if let Some(session) = self.session.take() {
                self.recognizer = session.release();
            }
            info!("Voice control off");
        } else {
            match self.recognizer.take() {
                Some(recognizer) => {
                    match ListeningSession::acquire(recognizer, &self.recognizer_config) {
                        Ok(session) => self.session = Some(session),
                        Err((recognizer, e)) => {
                            warn!("Voice control degraded: {}", e);
                            self.recognizer = Some(recognizer);
                        }
                    }
                }
                None => warn!("Voice control degraded: {}", SessionError::RecognizerUnavailable),
            }
            info!("Voice control on");
            self.announcer.announce(ACTIVATION_PROMPT);
        }
        self.listening = !self.listening;
        self.listening
    }

    pub fn select_next(&mut self) -> usize {
        let last = self.recommendations.len().saturating_sub(1);
        self.selected_index = (self.selected_index + 1).min(last);
        self.selected_index
    }

    pub fn select_previous(&mut self) -> usize {
        self.selected_index = self.selected_index.saturating_sub(1);
        self.selected_index
    }

    // Voice

    /// Parse a recognizer transcript and apply it.
    ///
    /// Ignored while voice control is off. Returns the command that was
    /// applied, if any.
    pub fn handle_transcript(&mut self, transcript: &str) -> Option<VoiceCommand> {
        if !self.listening {
            debug!("Ignoring transcript while not listening: {}", transcript);
            return None;
        }
        info!("Voice command received: {}", transcript);
        let command = VoiceCommand::parse(transcript)?;
        self.apply_command(command);
        Some(command)
    }

    pub fn apply_command(&mut self, command: VoiceCommand) {
        match command {
            VoiceCommand::Next => {
                self.select_next();
                self.announcer.announce("Next movie selected");
            }
            VoiceCommand::Previous => {
                self.select_previous();
                self.announcer.announce("Previous movie selected");
            }
            VoiceCommand::ReadDetails => {
                if let Some(movie) = self.selected_movie() {
                    let text = describe(&movie);
                    self.announcer.announce(text);
                }
            }
            VoiceCommand::AddToWishlist => {
                if let Some(movie) = self.selected_movie() {
                    self.add_to_wishlist(&movie.id);
                    self.announcer
                        .announce(format!("Added {} to your wishlist.", movie.title));
                }
            }
            VoiceCommand::ToggleMode => {
                let mode = self.toggle_display_mode();
                let state = if mode.is_high_contrast() { "on" } else { "off" };
                self.announcer.announce(format!("Accessibility mode {}", state));
            }
        }
    }

    fn selected_movie(&self) -> Option<Movie> {
        self.selected().map(|r| r.movie.clone())
    }

    /// Rescore the whole catalog against the current stats
    fn recompute(&mut self) {
        self.recommendations = self.scorer.score(self.catalog.movies(), &self.stats);
        let last = self.recommendations.len().saturating_sub(1);
        self.selected_index = self.selected_index.min(last);
        debug!("Recomputed {} recommendations", self.recommendations.len());
    }
}

/// Spoken summary of a movie
pub fn describe(movie: &Movie) -> String {
    format!(
        "{}. Rating {}. Summary: {}",
        movie.title, movie.rating, movie.description
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::speech::MemorySynthesizer;

    fn controller() -> AppController<MemorySynthesizer> {
        AppController::new(
            Arc::new(Catalog::builtin()),
            UserStats::demo(),
            MemorySynthesizer::new(),
        )
    }

    #[test]
    fn test_initial_state() {
        let c = controller();
        assert_eq!(c.recommendations().len(), 8);
        assert_eq!(c.selected_index(), 0);
        assert_eq!(c.display_mode(), DisplayMode::Standard);
        assert!(!c.is_listening());
        assert_eq!(c.selected().unwrap().movie.id, "3");
    }

    #[test]
    fn test_selection_clamps() {
        let mut c = controller();
        assert_eq!(c.select_previous(), 0);
        for _ in 0..20 {
            c.select_next();
        }
        assert_eq!(c.selected_index(), 7);
        assert_eq!(c.select_previous(), 6);
    }

    #[test]
    fn test_selection_on_empty_catalog() {
        let mut c = AppController::new(
            Arc::new(Catalog::new()),
            UserStats::demo(),
            MemorySynthesizer::new(),
        );
        assert_eq!(c.select_next(), 0);
        assert_eq!(c.select_previous(), 0);
        assert!(c.selected().is_none());
    }

    #[test]
    fn test_wishlist_rescoring() {
        let mut c = controller();
        // Pulp Fiction scores 0 and ranks last
        assert_eq!(c.recommendations().last().unwrap().movie.id, "4");

        assert!(c.add_to_wishlist("2"));
        assert!(!c.add_to_wishlist("2"));

        let dark_knight = c
            .recommendations()
            .iter()
            .find(|r| r.movie.id == "2")
            .unwrap();
        assert_eq!(dark_knight.score, 22.5);
        assert!(dark_knight.is_hot());
    }

    #[test]
    fn test_mark_watched_sinks_movie() {
        let mut c = controller();
        assert!(c.mark_watched("3"));
        let last = c.recommendations().last().unwrap();
        assert_eq!(last.movie.id, "3");
        assert_eq!(last.score, -60.0);
        assert_eq!(last.movie.status, catalog::MovieStatus::Watched);
    }

    #[test]
    fn test_describe() {
        let catalog = Catalog::builtin();
        let text = describe(catalog.get_movie("2").unwrap());
        assert_eq!(
            text,
            "The Dark Knight. Rating 9. Summary: When the menace known as the Joker wreaks havoc and chaos on the people of Gotham."
        );
    }
}
