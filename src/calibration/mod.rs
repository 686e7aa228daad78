//! Calibration bounds and the ways to obtain them.
//!
//! Bounds come either from a persisted record ([`store`]) or from the
//! interactive four-step [`wizard`]. Once obtained they are passed by value
//! to the mapper; nothing here is global.

/// JSON persistence of calibration bounds
pub mod store;

/// Interactive four-step calibration procedure
pub mod wizard;

use serde::{Deserialize, Serialize};

pub use store::CalibrationStore;
pub use wizard::{CalibrationView, CalibrationWizard, WizardState};

/// Raw-coordinate extremes captured while looking at each screen edge.
///
/// `right > left` and `down > up` give the natural orientation; reversed
/// pairs are accepted and simply invert that axis.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalibrationBounds {
    /// Horizontal coordinate when looking at the left edge
    pub left: Option<f64>,
    /// Horizontal coordinate when looking at the right edge
    pub right: Option<f64>,
    /// Vertical coordinate when looking at the top edge
    pub up: Option<f64>,
    /// Vertical coordinate when looking at the bottom edge
    pub down: Option<f64>,
}

/// Low/high pair for one axis, present only when both bounds are set
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisBounds {
    /// Bound mapped to pixel 0
    pub low: f64,
    /// Bound mapped to the full dimension
    pub high: f64,
}

impl CalibrationBounds {
    /// Bounds with all four values set
    #[must_use]
    pub const fn new(left: f64, right: f64, up: f64, down: f64) -> Self {
        Self {
            left: Some(left),
            right: Some(right),
            up: Some(up),
            down: Some(down),
        }
    }

    /// Horizontal pair, if both left and right are set
    #[must_use]
    pub fn horizontal(&self) -> Option<AxisBounds> {
        Some(AxisBounds {
            low: self.left?,
            high: self.right?,
        })
    }

    /// Vertical pair, if both up and down are set
    #[must_use]
    pub fn vertical(&self) -> Option<AxisBounds> {
        Some(AxisBounds {
            low: self.up?,
            high: self.down?,
        })
    }

    /// True when every bound has been captured
    #[must_use]
    pub const fn is_complete(&self) -> bool {
        self.left.is_some() && self.right.is_some() && self.up.is_some() && self.down.is_some()
    }

    /// True when neither axis is usable and mapping falls back to raw scaling
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}
