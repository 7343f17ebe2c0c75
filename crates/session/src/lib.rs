//! Interactive session layer for the recommender.
//!
//! This crate contains the controller that owns UI state, plus the seams
//! to the outside world: voice command parsing, speech output and the
//! recognizer lifecycle.

pub mod error;
pub mod voice;
pub mod speech;
pub mod recognizer;
pub mod display;
pub mod controller;

pub use controller::{ACTIVATION_PROMPT, AppController, describe};
pub use display::{DisplayMode, LEGEND, LegendEntry, status_style};
pub use error::SessionError;
pub use recognizer::{ListeningSession, ManualRecognizer, RecognizerConfig, SpeechRecognizer};
pub use speech::{Announcer, MemorySynthesizer, SpeechLog, SpeechSynthesizer, TerminalSynthesizer, Utterance};
pub use voice::VoiceCommand;
