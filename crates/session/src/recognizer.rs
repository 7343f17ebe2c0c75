//! Speech recognizer lifecycle.
//!
//! The recognizer is an external resource. It runs only while a
//! `ListeningSession` holds it: acquiring the session starts it and
//! releasing or dropping the session stops it.

use crate::error::Result;
use tracing::{debug, warn};

/// Settings handed to a recognizer when it starts
#[derive(Debug, Clone, PartialEq)]
pub struct RecognizerConfig {
    /// Keep listening after each phrase
    pub continuous: bool,
    /// Only final transcripts are delivered
    pub interim_results: bool,
    pub language: String,
}

impl Default for RecognizerConfig {
    fn default() -> Self {
        Self {
            continuous: true,
            interim_results: false,
            language: "en-US".to_string(),
        }
    }
}

/// Speech recognizer seam.
///
/// Transcripts are delivered out of band (the host calls
/// `AppController::handle_transcript`); this trait only covers start/stop.
pub trait SpeechRecognizer: Send {
    fn start(&mut self, config: &RecognizerConfig) -> Result<()>;

    fn stop(&mut self);
}

/// Scoped handle on a running recognizer
pub struct ListeningSession {
    recognizer: Option<Box<dyn SpeechRecognizer>>,
}

impl ListeningSession {
    /// Start `recognizer` and wrap it in a session.
    ///
    /// On failure the recognizer is handed back so the caller can keep it
    /// for a later attempt.
    pub fn acquire(
        mut recognizer: Box<dyn SpeechRecognizer>,
        config: &RecognizerConfig,
    ) -> std::result::Result<Self, (Box<dyn SpeechRecognizer>, crate::error::SessionError)> {
        match recognizer.start(config) {
            Ok(()) => {
                debug!("Recognizer started ({})", config.language);
                Ok(Self {
                    recognizer: Some(recognizer),
                })
            }
            Err(e) => {
                warn!("Recognizer failed to start: {}", e);
                Err((recognizer, e))
            }
        }
    }

    /// Stop the recognizer and give it back
    pub fn release(mut self) -> Option<Box<dyn SpeechRecognizer>> {
        let mut recognizer = self.recognizer.take()?;
        recognizer.stop();
        debug!("Recognizer stopped");
        Some(recognizer)
    }
}

impl Drop for ListeningSession {
    fn drop(&mut self) {
        if let Some(mut recognizer) = self.recognizer.take() {
            recognizer.stop();
            debug!("Recognizer stopped on drop");
        }
    }
}

/// Recognizer whose transcripts arrive from some other input (stdin in
/// the CLI). It only tracks whether it is running.
#[derive(Debug, Default)]
pub struct ManualRecognizer {
    running: bool,
}

impl ManualRecognizer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_running(&self) -> bool {
        self.running
    }
}

impl SpeechRecognizer for ManualRecognizer {
    fn start(&mut self, _config: &RecognizerConfig) -> Result<()> {
        self.running = true;
        Ok(())
    }

    fn stop(&mut self) {
        self.running = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SessionError;
    use std::sync::{Arc, Mutex};

    /// Records start/stop calls into a shared list
    struct ProbeRecognizer {
        events: Arc<Mutex<Vec<&'static str>>>,
        fail: bool,
    }

    impl SpeechRecognizer for ProbeRecognizer {
        fn start(&mut self, _config: &RecognizerConfig) -> Result<()> {
            if self.fail {
                return Err(SessionError::RecognizerStart("microphone busy".to_string()));
            }
            self.events.lock().unwrap().push("start");
            Ok(())
        }

        fn stop(&mut self) {
            self.events.lock().unwrap().push("stop");
        }
    }

    fn tracked_recognizer(fail: bool) -> (Box<dyn SpeechRecognizer>, Arc<Mutex<Vec<&'static str>>>) {
        let events = Arc::new(Mutex::new(Vec::new()));
        let recognizer = ProbeRecognizer {
            events: Arc::clone(&events),
            fail,
        };
        (Box::new(recognizer), events)
    }

    #[test]
    fn test_default_config() {
        let config = RecognizerConfig::default();
        assert!(config.continuous);
        assert!(!config.interim_results);
        assert_eq!(config.language, "en-US");
    }

    #[test]
    fn test_release_stops_once() {
        let (recognizer, events) = tracked_recognizer(false);
        let session = ListeningSession::acquire(recognizer, &RecognizerConfig::default())
            .ok()
            .unwrap();
        let returned = session.release();

        assert!(returned.is_some());
        assert_eq!(*events.lock().unwrap(), vec!["start", "stop"]);
    }

    #[test]
    fn test_drop_stops() {
        let (recognizer, events) = tracked_recognizer(false);
        {
            let _session = ListeningSession::acquire(recognizer, &RecognizerConfig::default())
                .ok()
                .unwrap();
        }
        assert_eq!(*events.lock().unwrap(), vec!["start", "stop"]);
    }

    #[test]
    fn test_failed_start_returns_recognizer() {
        let (recognizer, events) = tracked_recognizer(true);
        let result = ListeningSession::acquire(recognizer, &RecognizerConfig::default());

        let (_recognizer, err) = result.err().unwrap();
        assert!(matches!(err, SessionError::RecognizerStart(_)));
        assert!(events.lock().unwrap().is_empty());
    }

    #[test]
    fn test_manual_recognizer() {
        let mut recognizer = ManualRecognizer::new();
        recognizer.start(&RecognizerConfig::default()).unwrap();
        assert!(recognizer.is_running());
        recognizer.stop();
        assert!(!recognizer.is_running());
    }
}
