//! Four-step calibration: look left, right, up, down, confirming each.
//!
//! Every frame updates the live reading shown next to the prompt. A confirm
//! only counts when the frame it arrives with has a face; otherwise the
//! wizard stays where it is and waits for the next confirm. Nothing is
//! written to the store unless all four steps complete.

use super::{CalibrationBounds, CalibrationStore};
use crate::{
    app::FrameSink,
    perception::{ControlInput, ControlSignal, PerceptionFrame, PerceptionSource, PointerSample},
    Error, Result,
};
use log::{debug, info, warn};
use std::sync::atomic::{AtomicBool, Ordering};

/// Wizard step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardState {
    /// Waiting for the left-edge reading
    AwaitLeft,
    /// Waiting for the right-edge reading
    AwaitRight,
    /// Waiting for the top-edge reading
    AwaitUp,
    /// Waiting for the bottom-edge reading
    AwaitDown,
    /// All four bounds captured
    Done,
}

impl WizardState {
    /// Step that follows this one
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::AwaitLeft => Self::AwaitRight,
            Self::AwaitRight => Self::AwaitUp,
            Self::AwaitUp => Self::AwaitDown,
            Self::AwaitDown | Self::Done => Self::Done,
        }
    }

    /// Instruction shown to the user
    #[must_use]
    pub const fn prompt(self) -> &'static str {
        match self {
            Self::AwaitLeft => "Look LEFT and confirm",
            Self::AwaitRight => "Look RIGHT and confirm",
            Self::AwaitUp => "Look UP and confirm",
            Self::AwaitDown => "Look DOWN and confirm",
            Self::Done => "Calibration complete",
        }
    }

    const fn label(self) -> &'static str {
        match self {
            Self::AwaitLeft => "LEFT",
            Self::AwaitRight => "RIGHT",
            Self::AwaitUp => "UP",
            Self::AwaitDown => "DOWN",
            Self::Done => "DONE",
        }
    }
}

/// What the renderer needs to draw one calibration frame
#[derive(Debug, Clone, PartialEq)]
pub struct CalibrationView {
    /// Current step
    pub state: WizardState,
    /// Instruction for the current step
    pub prompt: &'static str,
    /// Live reading of the latest frame
    pub live: Option<PointerSample>,
    /// Live reading formatted for display
    pub status: String,
}

/// Result of a completed wizard run
#[derive(Debug)]
pub struct WizardOutcome {
    /// Captured bounds, usable even if persisting them failed
    pub bounds: CalibrationBounds,
    /// Set when the store could not be written
    pub save_error: Option<Error>,
}

/// Interactive calibration state machine
#[derive(Debug, Clone)]
pub struct CalibrationWizard {
    state: WizardState,
    bounds: CalibrationBounds,
    live: Option<PointerSample>,
}

impl Default for CalibrationWizard {
    fn default() -> Self {
        Self::new()
    }
}

impl CalibrationWizard {
    /// Fresh wizard waiting for the left edge
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: WizardState::AwaitLeft,
            bounds: CalibrationBounds::default(),
            live: None,
        }
    }

    /// Current step
    #[must_use]
    pub const fn state(&self) -> WizardState {
        self.state
    }

    /// Bounds captured so far
    #[must_use]
    pub const fn bounds(&self) -> &CalibrationBounds {
        &self.bounds
    }

    /// Instruction for the current step
    #[must_use]
    pub const fn prompt(&self) -> &'static str {
        self.state.prompt()
    }

    /// True once all four bounds have been captured
    #[must_use]
    pub fn is_done(&self) -> bool {
        self.state == WizardState::Done
    }

    /// Live reading for display next to the prompt
    #[must_use]
    pub fn status_line(&self) -> String {
        match self.live {
            Some(sample) => format!("{}: x={:.3}, y={:.3}", self.state.label(), sample.x, sample.y),
            None => format!("{}: no face", self.state.label()),
        }
    }

    /// Snapshot for the renderer
    #[must_use]
    pub fn view(&self) -> CalibrationView {
        CalibrationView {
            state: self.state,
            prompt: self.prompt(),
            live: self.live,
            status: self.status_line(),
        }
    }

    /// Record the reading of the current frame
    pub fn observe(&mut self, frame: &PerceptionFrame) {
        self.live = frame.sample;
    }

    /// Accept the current reading for the current step.
    ///
    /// Returns `false` without advancing when the current frame has no face
    /// or the wizard is already done.
    pub fn confirm(&mut self) -> bool {
        let Some(sample) = self.live else {
            debug!("Confirm ignored at {:?}: no face in current frame", self.state);
            return false;
        };

        let captured = match self.state {
            WizardState::AwaitLeft => self.bounds.left.insert(sample.x),
            WizardState::AwaitRight => self.bounds.right.insert(sample.x),
            WizardState::AwaitUp => self.bounds.up.insert(sample.y),
            WizardState::AwaitDown => self.bounds.down.insert(sample.y),
            WizardState::Done => return false,
        };
        info!("Calibrated {} = {:.3}", self.state.label(), captured);

        self.state = self.state.next();
        true
    }

    /// Feed one frame and an optional control signal; returns the new state.
    ///
    /// # Errors
    ///
    /// Returns [`Error::CalibrationAborted`] on a quit signal before completion
    pub fn handle_frame(&mut self, frame: &PerceptionFrame, signal: Option<ControlSignal>) -> Result<WizardState> {
        self.observe(frame);
        match signal {
            Some(ControlSignal::Confirm) => {
                self.confirm();
            }
            Some(ControlSignal::Quit) if !self.is_done() => {
                warn!("Calibration quit at {:?}; nothing saved", self.state);
                return Err(Error::CalibrationAborted);
            }
            _ => {}
        }
        Ok(self.state)
    }

    /// Consume the wizard and return its bounds
    ///
    /// # Errors
    ///
    /// Returns [`Error::CalibrationAborted`] if not all steps completed
    pub fn finish(self) -> Result<CalibrationBounds> {
        if self.is_done() {
            Ok(self.bounds)
        } else {
            Err(Error::CalibrationAborted)
        }
    }

    /// Drive the wizard from live frames until done, then persist the bounds.
    ///
    /// Every processed frame is presented to `renderer` as a
    /// [`CalibrationView`]. The cancellation flag is checked once per frame.
    /// A failed save is logged and reported in the outcome; the captured
    /// bounds are returned either way.
    ///
    /// # Errors
    ///
    /// Returns [`Error::CalibrationAborted`] if cancelled, quit, or the source
    /// runs dry before completion; perception errors are propagated
    pub fn run(
        mut self,
        source: &mut dyn PerceptionSource,
        controls: &mut dyn ControlInput,
        renderer: &mut dyn FrameSink,
        store: &CalibrationStore,
        cancel: &AtomicBool,
    ) -> Result<WizardOutcome> {
        info!("Starting calibration: {}", self.prompt());

        while !self.is_done() {
            if cancel.load(Ordering::Relaxed) {
                warn!("Calibration cancelled at {:?}; nothing saved", self.state);
                return Err(Error::CalibrationAborted);
            }

            let Some(frame) = source.next_frame()? else {
                warn!("Perception source ended during calibration at {:?}", self.state);
                return Err(Error::CalibrationAborted);
            };

            let before = self.state;
            let after = self.handle_frame(&frame, controls.poll(frame.at))?;
            if after != before {
                info!("{}", after.prompt());
            }
            renderer.present_calibration(&self.view());
        }

        let bounds = self.finish()?;
        let save_error = store.save(&bounds).err();
        if let Some(e) = &save_error {
            warn!("{e}; continuing with unsaved calibration");
        }

        Ok(WizardOutcome { bounds, save_error })
    }
}
