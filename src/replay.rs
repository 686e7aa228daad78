//! Recorded perception traces.
//!
//! A trace is a JSON-lines file; each line is one frame and/or one control
//! signal:
//!
//! ```text
//! {"t": 0.00, "face": {"x": 0.31, "y": 0.52, "mouth": 4.0}}
//! {"t": 0.03, "face": null, "control": "confirm"}
//! {"t": 0.06, "control": "quit"}
//! ```
//!
//! `t` is seconds since the start of the recording. Lines with a `face` key
//! (even `null`) are frames; lines with only a `control` are signals. Blank
//! lines and lines starting with `#` are skipped.

use crate::{
    perception::{ControlInput, ControlSignal, PerceptionFrame, PerceptionSource, PointerSample},
    Error, Result,
};
use log::{debug, info};
use serde::Deserialize;
use std::{collections::VecDeque, path::Path, time::Duration};

#[derive(Debug, Deserialize)]
struct TraceLine {
    t: f64,
    #[serde(default, deserialize_with = "deserialize_present")]
    face: Option<Option<PointerSample>>,
    #[serde(default)]
    control: Option<ControlSignal>,
}

// Distinguishes `"face": null` (a frame without a face) from a missing key.
fn deserialize_present<'de, D>(deserializer: D) -> std::result::Result<Option<Option<PointerSample>>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Option::<PointerSample>::deserialize(deserializer).map(Some)
}

/// Frames of a trace, replayed in order
#[derive(Debug, Default)]
pub struct ReplaySource {
    frames: VecDeque<PerceptionFrame>,
}

impl ReplaySource {
    /// Source over already built frames
    #[must_use]
    pub fn new(frames: Vec<PerceptionFrame>) -> Self {
        Self { frames: frames.into() }
    }

    /// Frames not yet replayed
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.frames.len()
    }
}

impl PerceptionSource for ReplaySource {
    fn next_frame(&mut self) -> Result<Option<PerceptionFrame>> {
        Ok(self.frames.pop_front())
    }
}

/// Control signals of a trace, released as frame time passes them
#[derive(Debug, Default)]
pub struct ReplayControls {
    signals: VecDeque<(Duration, ControlSignal)>,
}

impl ReplayControls {
    /// Controls from `(time, signal)` pairs
    #[must_use]
    pub fn new(mut signals: Vec<(Duration, ControlSignal)>) -> Self {
        signals.sort_by_key(|(at, _)| *at);
        Self { signals: signals.into() }
    }
}

impl ControlInput for ReplayControls {
    fn poll(&mut self, at: Duration) -> Option<ControlSignal> {
        match self.signals.front() {
            Some((signal_at, _)) if *signal_at <= at => self.signals.pop_front().map(|(_, signal)| signal),
            _ => None,
        }
    }
}

/// A parsed trace
pub struct ReplayTrace;

impl ReplayTrace {
    /// Parse trace text
    ///
    /// # Errors
    ///
    /// Returns [`Error::Perception`] naming the first malformed line
    pub fn parse(content: &str) -> Result<(ReplaySource, ReplayControls)> {
        let mut frames = Vec::new();
        let mut signals = Vec::new();

        for (index, line) in content.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let parsed: TraceLine = serde_json::from_str(line)
                .map_err(|e| Error::Perception(format!("Trace line {}: {e}", index + 1)))?;
            let at = Duration::try_from_secs_f64(parsed.t)
                .map_err(|e| Error::Perception(format!("Trace line {}: bad time {}: {e}", index + 1, parsed.t)))?;

            if let Some(face) = parsed.face {
                frames.push(PerceptionFrame { at, sample: face });
            }
            if let Some(signal) = parsed.control {
                signals.push((at, signal));
            }
        }

        debug!("Parsed trace: {} frames, {} control signals", frames.len(), signals.len());
        Ok((ReplaySource::new(frames), ReplayControls::new(signals)))
    }

    /// Load and parse a trace file
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the file cannot be read, or a parse error
    pub fn load<P: AsRef<Path>>(path: P) -> Result<(ReplaySource, ReplayControls)> {
        let path = path.as_ref();
        info!("Loading perception trace from {}", path.display());
        let content = std::fs::read_to_string(path)?;
        Self::parse(&content)
    }
}
