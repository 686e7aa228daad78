//! Mouth-open "click" with cooldown.
//!
//! A commit fires when the gesture intensity is strictly above the threshold
//! and strictly more than the cooldown has passed since the last commit. A
//! gesture over dead space is swallowed and does not restart the cooldown;
//! only a resolved key does.

use crate::{
    constants::{DEFAULT_COOLDOWN_SECS, DEFAULT_MOUTH_OPEN_THRESHOLD},
    keyboard::{Key, KeyHit},
};
use log::{debug, info};
use std::time::Duration;

/// A key accepted by the selection controller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommitEvent {
    /// Committed key
    pub key: Key,
    /// Layout row of the key
    pub row: usize,
    /// Layout column of the key
    pub col: usize,
    /// Frame time of the commit
    pub at: Duration,
}

impl CommitEvent {
    /// Commit of `hit` at `at`
    #[must_use]
    pub const fn new(hit: KeyHit, at: Duration) -> Self {
        Self {
            key: hit.key,
            row: hit.row,
            col: hit.col,
            at,
        }
    }
}

/// Debounced gesture trigger
#[derive(Debug, Clone)]
pub struct SelectionController {
    threshold: f64,
    cooldown: Duration,
    last_commit: Option<Duration>,
}

impl Default for SelectionController {
    fn default() -> Self {
        Self::new(DEFAULT_MOUTH_OPEN_THRESHOLD, Duration::from_secs_f64(DEFAULT_COOLDOWN_SECS))
    }
}

impl SelectionController {
    /// Controller with the given intensity threshold and cooldown
    #[must_use]
    pub const fn new(threshold: f64, cooldown: Duration) -> Self {
        Self {
            threshold,
            cooldown,
            last_commit: None,
        }
    }

    /// Intensity a gesture must exceed
    #[must_use]
    pub const fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Minimum spacing between commits
    #[must_use]
    pub const fn cooldown(&self) -> Duration {
        self.cooldown
    }

    /// Time of the last commit, if any
    #[must_use]
    pub const fn last_commit(&self) -> Option<Duration> {
        self.last_commit
    }

    /// True if the cooldown has elapsed at `now`
    #[must_use]
    pub fn is_ready(&self, now: Duration) -> bool {
        self.last_commit
            .map_or(true, |last| now.saturating_sub(last) > self.cooldown)
    }

    /// Evaluate one frame, returning a commit if the gesture fires on a key
    pub fn evaluate(&mut self, hit: Option<KeyHit>, gesture_intensity: f64, now: Duration) -> Option<CommitEvent> {
        let fired = gesture_intensity > self.threshold && self.is_ready(now);
        if !fired {
            return None;
        }

        let Some(hit) = hit else {
            debug!("Gesture at {:?} over no key, ignored", now);
            return None;
        };

        self.last_commit = Some(now);
        info!("Selected {} at row {} col {}", hit.key, hit.row, hit.col);
        Some(CommitEvent::new(hit, now))
    }

    /// Forget the last commit
    pub fn reset(&mut self) {
        self.last_commit = None;
    }
}
