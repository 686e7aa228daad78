//! Boundary to the external perception component.
//!
//! Landmark extraction happens elsewhere; the core only sees one
//! [`PerceptionFrame`] per captured camera frame. Host input (key presses,
//! switches) reaches the core as [`ControlSignal`]s through [`ControlInput`].

use crate::{
    constants::{LOWER_LIP_LANDMARK, NOSE_TIP_LANDMARK, UPPER_LIP_LANDMARK},
    utils::{euclidean_distance, to_frame_pixels},
    Error, Result,
};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// One frame's nose position and mouth-open intensity
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointerSample {
    /// Normalized horizontal nose coordinate
    pub x: f64,
    /// Normalized vertical nose coordinate
    pub y: f64,
    /// Inter-lip distance in frame pixels
    #[serde(rename = "mouth")]
    pub gesture_intensity: f64,
}

impl PointerSample {
    /// Create a sample from an already computed gesture intensity
    #[must_use]
    pub const fn new(x: f64, y: f64, gesture_intensity: f64) -> Self {
        Self { x, y, gesture_intensity }
    }

    /// Build a sample from raw normalized landmarks.
    ///
    /// The gesture intensity is the distance between the lip landmarks once
    /// both are scaled to frame pixels.
    #[must_use]
    pub fn from_landmarks(
        nose: (f64, f64),
        upper_lip: (f64, f64),
        lower_lip: (f64, f64),
        frame_width: u32,
        frame_height: u32,
    ) -> Self {
        let top = to_frame_pixels(upper_lip, frame_width, frame_height);
        let bottom = to_frame_pixels(lower_lip, frame_width, frame_height);
        Self::new(nose.0, nose.1, euclidean_distance(top, bottom))
    }

    /// Build a sample from a full face mesh (normalized landmark list).
    ///
    /// # Errors
    ///
    /// Returns an error if the mesh does not contain the nose and lip points
    pub fn from_face_mesh(landmarks: &[(f64, f64)], frame_width: u32, frame_height: u32) -> Result<Self> {
        let point = |index: usize| {
            landmarks.get(index).copied().ok_or_else(|| {
                Error::Perception(format!(
                    "Face mesh has {} landmarks, index {index} missing",
                    landmarks.len()
                ))
            })
        };

        Ok(Self::from_landmarks(
            point(NOSE_TIP_LANDMARK)?,
            point(UPPER_LIP_LANDMARK)?,
            point(LOWER_LIP_LANDMARK)?,
            frame_width,
            frame_height,
        ))
    }
}

/// A perception reading stamped with its capture time
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PerceptionFrame {
    /// Monotonic time since the session started
    pub at: Duration,
    /// `None` when no face was detected in this frame
    pub sample: Option<PointerSample>,
}

impl PerceptionFrame {
    /// Frame with a detected face
    #[must_use]
    pub const fn face(at: Duration, sample: PointerSample) -> Self {
        Self { at, sample: Some(sample) }
    }

    /// Frame where detection failed
    #[must_use]
    pub const fn no_face(at: Duration) -> Self {
        Self { at, sample: None }
    }

    /// The sample, or `NoFaceDetected`
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoFaceDetected`] when the frame carries no face
    pub fn require_face(&self) -> Result<PointerSample> {
        self.sample.ok_or(Error::NoFaceDetected)
    }
}

/// Source of perception frames; `next_frame` is the loop's only blocking call
pub trait PerceptionSource {
    /// Block until the next frame. `Ok(None)` means the source is exhausted.
    fn next_frame(&mut self) -> Result<Option<PerceptionFrame>>;
}

/// Discrete signals from the host input surface
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ControlSignal {
    /// Accept the current calibration reading
    Confirm,
    /// Stop the session
    Quit,
}

/// Non-blocking poll of host control signals
pub trait ControlInput {
    /// Next pending signal at or before `at`, if any
    fn poll(&mut self, at: Duration) -> Option<ControlSignal>;
}

/// Control input that never signals anything
pub struct NoControls;

impl ControlInput for NoControls {
    fn poll(&mut self, _at: Duration) -> Option<ControlSignal> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_landmarks_scales_lip_distance() {
        let sample = PointerSample::from_landmarks((0.5, 0.4), (0.5, 0.60), (0.5, 0.65), 640, 480);
        assert_eq!(sample.x, 0.5);
        assert_eq!(sample.y, 0.4);
        // 0.05 of a 480 px tall frame
        assert!((sample.gesture_intensity - 24.0).abs() < 1e-9);
    }

    #[test]
    fn test_from_face_mesh_requires_lip_points() {
        let short_mesh = vec![(0.0, 0.0); 10];
        let result = PointerSample::from_face_mesh(&short_mesh, 640, 480);
        assert!(matches!(result, Err(Error::Perception(_))));

        let mut mesh = vec![(0.0, 0.0); 468];
        mesh[NOSE_TIP_LANDMARK] = (0.45, 0.55);
        mesh[UPPER_LIP_LANDMARK] = (0.5, 0.7);
        mesh[LOWER_LIP_LANDMARK] = (0.5, 0.7);
        let sample = PointerSample::from_face_mesh(&mesh, 640, 480).unwrap();
        assert_eq!((sample.x, sample.y), (0.45, 0.55));
        assert_eq!(sample.gesture_intensity, 0.0);
    }

    #[test]
    fn test_require_face() {
        let frame = PerceptionFrame::no_face(Duration::ZERO);
        assert!(matches!(frame.require_face(), Err(Error::NoFaceDetected)));

        let sample = PointerSample::new(0.1, 0.2, 3.0);
        let frame = PerceptionFrame::face(Duration::from_millis(33), sample);
        assert_eq!(frame.require_face().unwrap(), sample);
    }
}
