//! Error types for the session crate.

use thiserror::Error;

/// Voice-control failures. The controller logs these and carries on
/// without voice input; they never reach the user as an error state.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SessionError {
    /// The host has no speech recognizer
    #[error("Speech recognition is not supported on this host")]
    RecognizerUnavailable,

    /// The recognizer refused to start
    #[error("Speech recognizer failed to start: {0}")]
    RecognizerStart(String),
}

pub type Result<T> = std::result::Result<T, SessionError>;
