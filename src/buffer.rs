//! Typed text and control-key semantics.

use crate::{keyboard::Key, selection::CommitEvent, Result};
use log::{debug, warn};

/// Text to be spoken after a commit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Announcement(pub String);

impl Announcement {
    /// Spoken text
    #[must_use]
    pub fn text(&self) -> &str {
        &self.0
    }
}

/// Receiver of spoken feedback
pub trait SpeechSink {
    /// Speak `text`; errors are reported but never retried
    fn announce(&mut self, text: &str) -> Result<()>;
}

/// Speech sink that only logs
pub struct LogSpeech;

impl SpeechSink for LogSpeech {
    fn announce(&mut self, text: &str) -> Result<()> {
        log::info!("Announce: {text}");
        Ok(())
    }
}

/// Accumulated committed characters
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TypedBuffer {
    text: String,
}

impl TypedBuffer {
    /// Empty buffer
    #[must_use]
    pub const fn new() -> Self {
        Self { text: String::new() }
    }

    /// Current text
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// True when nothing has been typed
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Apply a committed key and return what should be announced
    pub fn apply(&mut self, event: &CommitEvent) -> Announcement {
        self.apply_key(event.key)
    }

    /// Apply a key directly
    pub fn apply_key(&mut self, key: Key) -> Announcement {
        let spoken = match key {
            Key::Backspace => {
                self.text.pop();
                "backspace".to_string()
            }
            Key::Clear => {
                self.text.clear();
                "cleared".to_string()
            }
            Key::Space => {
                self.text.push(' ');
                "space".to_string()
            }
            Key::Char(c) => {
                self.text.push(c);
                c.to_string()
            }
        };
        debug!("Buffer now {:?}", self.text);
        Announcement(spoken)
    }

    /// Apply a commit and forward the announcement to `speech`.
    ///
    /// A failing sink is logged and otherwise ignored; the buffer has already
    /// been updated.
    pub fn commit(&mut self, event: &CommitEvent, speech: &mut dyn SpeechSink) -> Announcement {
        let announcement = self.apply(event);
        if let Err(e) = speech.announce(announcement.text()) {
            warn!("Speech sink failed for {:?}: {}", announcement.text(), e);
        }
        announcement
    }
}
