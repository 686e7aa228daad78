//! Input session: the per-frame loop tying calibration, mapping, hit testing,
//! selection and the typed buffer together.

use crate::{
    buffer::{SpeechSink, TypedBuffer},
    calibration::{CalibrationBounds, CalibrationStore, CalibrationView, CalibrationWizard},
    config::Config,
    error::{Error, Result},
    filters::PointerFilter,
    keyboard::KeyboardLayout,
    mapping::{CoordinateMapper, MappedPointer, ScreenGeometry},
    perception::{ControlInput, ControlSignal, PerceptionFrame, PerceptionSource},
    selection::{CommitEvent, SelectionController},
};
use log::{debug, info, warn};
use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};

/// Prompt shown while the calibration cannot be used
pub const RECALIBRATE_PROMPT: &str = "recalibrate";

/// What the renderer needs to draw one frame
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameView {
    /// Pointer position; neutral when no face is tracked
    pub pointer: MappedPointer,
    /// Highlighted key as (row, col)
    pub highlighted: Option<(usize, usize)>,
    /// Typed text so far
    pub text: String,
    /// Message for the user, if any
    pub prompt: Option<&'static str>,
    /// Key committed on this frame
    pub commit: Option<CommitEvent>,
}

/// Renderer output boundary
pub trait FrameSink {
    /// Present one typing frame
    fn present(&mut self, view: &FrameView);

    /// Present one calibration frame
    fn present_calibration(&mut self, view: &CalibrationView);
}

/// Renderer that only logs
pub struct LogFrameSink;

impl FrameSink for LogFrameSink {
    fn present(&mut self, view: &FrameView) {
        debug!(
            "Pointer ({}, {}) key {:?} text {:?}",
            view.pointer.x, view.pointer.y, view.highlighted, view.text
        );
        if let Some(prompt) = view.prompt {
            warn!("Prompt: {prompt}");
        }
    }

    fn present_calibration(&mut self, view: &CalibrationView) {
        debug!("{} ({})", view.status, view.prompt);
    }
}

/// One user's typing session
pub struct InputSession {
    store: CalibrationStore,
    recalibrate_on_start: bool,
    layout: KeyboardLayout,
    mapper: CoordinateMapper,
    selection: SelectionController,
    buffer: TypedBuffer,
    filter: Box<dyn PointerFilter>,
    needs_recalibration: bool,
    cancel: Arc<AtomicBool>,
}

impl InputSession {
    /// Create a session from configuration, uncalibrated until bounds are set
    pub fn new(config: Config) -> Result<Self> {
        config.validate()?;
        let geometry = config.geometry();
        info!(
            "Initializing input session: screen {}x{}, threshold {}, cooldown {}s",
            geometry.width, geometry.height, config.selection.mouth_open_threshold, config.selection.cooldown_secs
        );

        let filter = config.create_filter()?;
        info!("Pointer smoothing: {}", filter.name());

        Ok(Self {
            store: CalibrationStore::new(config.calibration.file.clone()),
            recalibrate_on_start: config.calibration.recalibrate,
            layout: config.create_layout()?,
            mapper: CoordinateMapper::new(CalibrationBounds::default(), geometry),
            selection: config.create_selection()?,
            buffer: TypedBuffer::new(),
            filter,
            needs_recalibration: false,
            cancel: Arc::new(AtomicBool::new(false)),
        })
    }

    /// Flag that stops the loop when set; checked once per frame
    #[must_use]
    pub fn cancel_handle(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.cancel)
    }

    /// Calibration in use
    #[must_use]
    pub const fn bounds(&self) -> &CalibrationBounds {
        self.mapper.bounds()
    }

    /// Screen in use
    #[must_use]
    pub const fn geometry(&self) -> ScreenGeometry {
        self.mapper.geometry()
    }

    /// Keyboard in use
    #[must_use]
    pub const fn layout(&self) -> &KeyboardLayout {
        &self.layout
    }

    /// Typed text
    #[must_use]
    pub fn text(&self) -> &str {
        self.buffer.text()
    }

    /// True after a frame hit a degenerate calibration
    #[must_use]
    pub const fn needs_recalibration(&self) -> bool {
        self.needs_recalibration
    }

    /// Replace the calibration
    pub fn set_bounds(&mut self, bounds: CalibrationBounds) {
        if bounds.is_empty() {
            warn!("Calibration is empty; using uncalibrated mapping");
        }
        self.mapper = CoordinateMapper::new(bounds, self.mapper.geometry());
        self.needs_recalibration = false;
        self.filter.reset();
    }

    /// Load the stored calibration, running the wizard if there is none,
    /// it is unreadable, or recalibration was requested.
    ///
    /// # Errors
    ///
    /// Propagates wizard errors such as [`Error::CalibrationAborted`]
    pub fn ensure_calibrated(
        &mut self,
        source: &mut dyn PerceptionSource,
        controls: &mut dyn ControlInput,
        renderer: &mut dyn FrameSink,
    ) -> Result<()> {
        if self.recalibrate_on_start {
            info!("Recalibration requested");
            return self.recalibrate(source, controls, renderer);
        }

        match self.store.load() {
            Ok(Some(bounds)) => {
                self.set_bounds(bounds);
                Ok(())
            }
            Ok(None) => {
                info!("No calibration at {}; starting wizard", self.store.path().display());
                self.recalibrate(source, controls, renderer)
            }
            Err(e) => {
                warn!("{e}; starting wizard");
                self.recalibrate(source, controls, renderer)
            }
        }
    }

    /// Run the calibration wizard and adopt its bounds
    ///
    /// # Errors
    ///
    /// Returns [`Error::CalibrationAborted`] if the wizard does not finish
    pub fn recalibrate(
        &mut self,
        source: &mut dyn PerceptionSource,
        controls: &mut dyn ControlInput,
        renderer: &mut dyn FrameSink,
    ) -> Result<()> {
        let outcome = CalibrationWizard::new().run(source, controls, renderer, &self.store, &self.cancel)?;
        self.set_bounds(outcome.bounds);
        Ok(())
    }

    fn view(&self, pointer: MappedPointer) -> FrameView {
        FrameView {
            pointer,
            highlighted: None,
            text: self.buffer.text().to_string(),
            prompt: None,
            commit: None,
        }
    }

    /// Process one frame
    ///
    /// Frames without a face, or with non-finite coordinates, are skipped
    /// with a neutral pointer and clear the smoothing history. A degenerate
    /// calibration marks the session for recalibration instead of failing.
    ///
    /// # Errors
    ///
    /// Returns errors other than those recoverable per frame
    pub fn step(&mut self, frame: &PerceptionFrame, speech: &mut dyn SpeechSink) -> Result<FrameView> {
        let sample = match frame.require_face() {
            Ok(sample) => sample,
            Err(Error::NoFaceDetected) => {
                self.filter.reset();
                return Ok(self.view(MappedPointer::NEUTRAL));
            }
            Err(e) => return Err(e),
        };

        let (x, y) = self.filter.apply(sample.x, sample.y);
        let pointer = match self.mapper.map(x, y) {
            Ok(pointer) => pointer,
            Err(e @ Error::DegenerateCalibration { .. }) => {
                if !self.needs_recalibration {
                    warn!("{e}; recalibration required");
                }
                self.needs_recalibration = true;
                let mut view = self.view(MappedPointer::NEUTRAL);
                view.prompt = Some(RECALIBRATE_PROMPT);
                return Ok(view);
            }
            Err(Error::InvalidInput(msg)) => {
                warn!("Skipping frame at {:?}: {msg}", frame.at);
                self.filter.reset();
                return Ok(self.view(MappedPointer::NEUTRAL));
            }
            Err(e) => return Err(e),
        };

        let hit = self.layout.hit_test(pointer.x, pointer.y, self.mapper.geometry());
        let commit = self.selection.evaluate(hit, sample.gesture_intensity, frame.at);
        if let Some(event) = &commit {
            self.buffer.commit(event, speech);
        }

        Ok(FrameView {
            pointer,
            highlighted: hit.map(|h| (h.row, h.col)),
            text: self.buffer.text().to_string(),
            prompt: None,
            commit,
        })
    }

    /// Run until quit, cancellation, or the source runs dry; returns the typed text
    ///
    /// # Errors
    ///
    /// Propagates perception errors and unrecoverable frame errors
    pub fn run(
        &mut self,
        source: &mut dyn PerceptionSource,
        controls: &mut dyn ControlInput,
        renderer: &mut dyn FrameSink,
        speech: &mut dyn SpeechSink,
    ) -> Result<String> {
        info!("Starting main input loop");
        let mut frame_count: u64 = 0;
        let mut commit_count: u64 = 0;

        loop {
            if self.cancel.load(Ordering::Relaxed) {
                info!("Exit requested by user");
                break;
            }

            let Some(frame) = source.next_frame()? else {
                info!("Perception source ended");
                break;
            };
            frame_count += 1;

            if controls.poll(frame.at) == Some(ControlSignal::Quit) {
                info!("Exit requested by user");
                self.cancel.store(true, Ordering::Relaxed);
                break;
            }

            let view = self.step(&frame, speech)?;
            if view.commit.is_some() {
                commit_count += 1;
            }
            renderer.present(&view);

            if self.needs_recalibration {
                match self.recalibrate(source, controls, renderer) {
                    Ok(()) => {}
                    Err(Error::CalibrationAborted) => {
                        warn!("Recalibration aborted; stopping");
                        break;
                    }
                    Err(e) => return Err(e),
                }
            }
        }

        info!("Session ended after {frame_count} frames, {commit_count} commits");
        Ok(self.buffer.text().to_string())
    }
}
