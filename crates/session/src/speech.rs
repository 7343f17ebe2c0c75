//! Speech output.
//!
//! Speech is fire-and-forget and at most one utterance plays at a time.
//! The `Announcer` enforces last-request-wins on top of any synthesizer:
//! a new announcement cancels whatever is still playing, nothing queues.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tracing::debug;

/// A single request to the synthesizer
#[derive(Debug, Clone, PartialEq)]
pub struct Utterance {
    pub text: String,
    pub rate: f32,
    pub pitch: f32,
}

impl Utterance {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            rate: 1.0,
            pitch: 1.0,
        }
    }
}

/// Speech synthesizer seam.
///
/// Implementations start speaking and return immediately.
pub trait SpeechSynthesizer: Send {
    fn speak(&mut self, utterance: &Utterance);

    /// Stop the current utterance, if any
    fn cancel(&mut self);

    fn is_speaking(&self) -> bool;
}

/// Last-request-wins wrapper around a synthesizer
pub struct Announcer<S: SpeechSynthesizer> {
    synth: S,
}

impl<S: SpeechSynthesizer> Announcer<S> {
    pub fn new(synth: S) -> Self {
        Self { synth }
    }

    /// Speak `text`, cutting off anything still in flight
    pub fn announce(&mut self, text: impl Into<String>) {
        if self.synth.is_speaking() {
            debug!("Cancelling in-flight utterance");
            self.synth.cancel();
        }
        let utterance = Utterance::new(text);
        debug!("Announcing: {}", utterance.text);
        self.synth.speak(&utterance);
    }

    pub fn stop(&mut self) {
        self.synth.cancel();
    }

    pub fn synthesizer(&self) -> &S {
        &self.synth
    }
}

// =============================================================================
// Terminal synthesizer
// =============================================================================

/// Milliseconds per word at rate 1.0
const WORD_MILLIS: f64 = 60.0;

/// "Speaks" by printing an utterance as one line, then holding a tokio
/// task open for as long as reading it aloud would take.
///
/// The line is written with a single `println!`, so it never splits
/// other terminal output. Outside a tokio runtime the text is printed and
/// nothing is held open.
pub struct TerminalSynthesizer {
    runtime: Option<Handle>,
    current: Option<JoinHandle<()>>,
}

impl TerminalSynthesizer {
    pub fn new() -> Self {
        Self {
            runtime: Handle::try_current().ok(),
            current: None,
        }
    }
}

impl Default for TerminalSynthesizer {
    fn default() -> Self {
        Self::new()
    }
}

/// How long `utterance` occupies the synthesizer
pub fn speaking_time(utterance: &Utterance) -> Duration {
    let words = utterance.text.split_whitespace().count() as f64;
    let rate = f64::from(utterance.rate.max(0.1));
    Duration::from_millis((words * WORD_MILLIS / rate).round() as u64)
}

impl SpeechSynthesizer for TerminalSynthesizer {
    fn speak(&mut self, utterance: &Utterance) {
        println!("🔊 {}", utterance.text);
        let Some(runtime) = &self.runtime else {
            return;
        };

        let duration = speaking_time(utterance);
        self.current = Some(runtime.spawn(async move {
            tokio::time::sleep(duration).await;
        }));
    }

    fn cancel(&mut self) {
        if let Some(task) = self.current.take() {
            task.abort();
        }
    }

    fn is_speaking(&self) -> bool {
        self.current.as_ref().is_some_and(|task| !task.is_finished())
    }
}

impl Drop for TerminalSynthesizer {
    fn drop(&mut self) {
        if let Some(task) = self.current.take() {
            task.abort();
        }
    }
}

// =============================================================================
// In-memory synthesizer
// =============================================================================

/// What a `MemorySynthesizer` has been asked to do
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SpeechLog {
    pub spoken: Vec<String>,
    pub cancelled: usize,
}

/// Records utterances instead of playing them.
///
/// An utterance counts as "speaking" until it is cancelled or
/// `finish` is called. Clones share the same log.
#[derive(Debug, Clone, Default)]
pub struct MemorySynthesizer {
    log: Arc<Mutex<SpeechLog>>,
    speaking: bool,
}

impl MemorySynthesizer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle to the shared log; stays valid after the synthesizer is moved
    pub fn log(&self) -> Arc<Mutex<SpeechLog>> {
        Arc::clone(&self.log)
    }

    /// Mark the current utterance as having played to the end
    pub fn finish(&mut self) {
        self.speaking = false;
    }

    pub fn last_spoken(&self) -> Option<String> {
        self.log.lock().ok()?.spoken.last().cloned()
    }
}

impl SpeechSynthesizer for MemorySynthesizer {
    fn speak(&mut self, utterance: &Utterance) {
        if let Ok(mut log) = self.log.lock() {
            log.spoken.push(utterance.text.clone());
        }
        self.speaking = true;
    }

    fn cancel(&mut self) {
        if self.speaking {
            if let Ok(mut log) = self.log.lock() {
                log.cancelled += 1;
            }
        }
        self.speaking = false;
    }

    fn is_speaking(&self) -> bool {
        self.speaking
    }
}
