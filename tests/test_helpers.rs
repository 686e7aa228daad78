//! Helper functions and utilities for tests
#![allow(dead_code)]

use nose_keyboard::{
    app::{FrameSink, FrameView},
    buffer::SpeechSink,
    calibration::CalibrationView,
    perception::{PerceptionFrame, PointerSample},
    Error, Result,
};
use std::time::Duration;

/// Frame time from seconds
pub fn secs(s: f64) -> Duration {
    Duration::from_secs_f64(s)
}

/// Frame with a face at `(x, y)` and the given mouth opening
pub fn face_at(t: f64, x: f64, y: f64, mouth: f64) -> PerceptionFrame {
    PerceptionFrame::face(secs(t), PointerSample::new(x, y, mouth))
}

/// Frame without a face
pub fn no_face(t: f64) -> PerceptionFrame {
    PerceptionFrame::no_face(secs(t))
}

/// Speech sink remembering everything announced
#[derive(Default)]
pub struct RecordingSpeech {
    pub spoken: Vec<String>,
}

impl SpeechSink for RecordingSpeech {
    fn announce(&mut self, text: &str) -> Result<()> {
        self.spoken.push(text.to_string());
        Ok(())
    }
}

/// Speech sink that always fails
pub struct FailingSpeech;

impl SpeechSink for FailingSpeech {
    fn announce(&mut self, _text: &str) -> Result<()> {
        Err(Error::InvalidInput("no audio device".to_string()))
    }
}

/// Renderer remembering every presented frame
#[derive(Default)]
pub struct RecordingRenderer {
    pub frames: Vec<FrameView>,
    pub calibration: Vec<CalibrationView>,
}

impl FrameSink for RecordingRenderer {
    fn present(&mut self, view: &FrameView) {
        self.frames.push(view.clone());
    }

    fn present_calibration(&mut self, view: &CalibrationView) {
        self.calibration.push(view.clone());
    }
}

/// Trace line for a frame with a face
pub fn trace_face(t: f64, x: f64, y: f64, mouth: f64) -> String {
    format!(r#"{{"t": {t}, "face": {{"x": {x}, "y": {y}, "mouth": {mouth}}}}}"#)
}

/// Trace line for a frame with a face and a confirm press
pub fn trace_confirm(t: f64, x: f64, y: f64) -> String {
    format!(r#"{{"t": {t}, "face": {{"x": {x}, "y": {y}, "mouth": 0.0}}, "control": "confirm"}}"#)
}

/// Trace lines for a full calibration looking at the given bounds
pub fn calibration_trace(start: f64, left: f64, right: f64, up: f64, down: f64) -> Vec<String> {
    vec![
        trace_confirm(start, left, 0.5),
        trace_confirm(start + 0.1, right, 0.5),
        trace_confirm(start + 0.2, 0.5, up),
        trace_confirm(start + 0.3, 0.5, down),
    ]
}
