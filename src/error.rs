//! Error types for the nose keyboard input method.

use crate::mapping::Axis;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the library
#[derive(Error, Debug)]
pub enum Error {
    /// The perception frame carried no face
    #[error("No face detected in frame")]
    NoFaceDetected,

    /// Both bounds of an axis are equal (or not finite), so no linear map exists
    #[error("Degenerate calibration on {axis} axis: bounds {low} and {high} span no range")]
    DegenerateCalibration {
        /// Axis whose bounds collapsed
        axis: Axis,
        /// Low bound (left or up)
        low: f64,
        /// High bound (right or down)
        high: f64,
    },

    /// Calibration record exists but could not be read or parsed
    #[error("Failed to load calibration from {}: {reason}", path.display())]
    CalibrationLoad {
        /// Record location
        path: PathBuf,
        /// Underlying cause
        reason: String,
    },

    /// Calibration record could not be written
    #[error("Failed to save calibration to {}: {reason}", path.display())]
    CalibrationSave {
        /// Record location
        path: PathBuf,
        /// Underlying cause
        reason: String,
    },

    /// The wizard stopped before all four bounds were captured
    #[error("Calibration aborted before completion")]
    CalibrationAborted,

    /// File I/O operation failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid input parameters provided
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Smoothing filter construction error
    #[error("Filter error: {0}")]
    FilterError(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Perception source failed to produce a frame
    #[error("Perception error: {0}")]
    Perception(String),
}

/// Convenience type alias for Results with our Error type
pub type Result<T> = std::result::Result<T, Error>;
