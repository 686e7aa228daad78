//! Raw landmark coordinate to screen pixel mapping.
//!
//! With both bounds of an axis set, the raw value is interpolated linearly
//! between them onto `[0, dimension]` and clamped. With either bound missing
//! the raw value is assumed normalized and scaled directly, unclamped.
//!
//! Pixel positions truncate toward zero, so a pointer at x = 191.52 sits in
//! pixel 191. Near a cell border this decides which key is hit.

use crate::{
    calibration::{AxisBounds, CalibrationBounds},
    utils::safe_cast::{clamp_finite, f64_to_i32},
    Error, Result,
};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Screen axis
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    /// Left to right
    Horizontal,
    /// Top to bottom
    Vertical,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Horizontal => f.write_str("horizontal"),
            Self::Vertical => f.write_str("vertical"),
        }
    }
}

/// Target surface size in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScreenGeometry {
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
}

impl ScreenGeometry {
    /// Geometry of a `width` x `height` surface
    #[must_use]
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Size along `axis`
    #[must_use]
    pub const fn dimension(&self, axis: Axis) -> u32 {
        match axis {
            Axis::Horizontal => self.width,
            Axis::Vertical => self.height,
        }
    }
}

/// Pointer position in screen pixels
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MappedPointer {
    /// Horizontal pixel
    pub x: i32,
    /// Vertical pixel
    pub y: i32,
}

impl MappedPointer {
    /// Position shown when no face is tracked
    pub const NEUTRAL: Self = Self { x: 0, y: 0 };
}

/// Map one axis to a sub-pixel position.
///
/// # Errors
///
/// Returns [`Error::DegenerateCalibration`] if the bounds span no range, or
/// [`Error::InvalidInput`] if `raw` is not finite
pub fn map_axis(raw: f64, bounds: Option<AxisBounds>, dimension: u32, axis: Axis) -> Result<f64> {
    if !raw.is_finite() {
        return Err(Error::InvalidInput(format!("Raw {axis} coordinate {raw} is not finite")));
    }

    let dimension = f64::from(dimension);
    let Some(AxisBounds { low, high }) = bounds else {
        return Ok(raw * dimension);
    };

    let span = high - low;
    if span == 0.0 || !span.is_finite() {
        return Err(Error::DegenerateCalibration { axis, low, high });
    }

    Ok(clamp_finite((raw - low) / span * dimension, 0.0, dimension))
}

/// Stateless mapper from raw landmark coordinates to screen pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoordinateMapper {
    bounds: CalibrationBounds,
    geometry: ScreenGeometry,
}

impl CoordinateMapper {
    /// Mapper for a fixed calibration and screen
    #[must_use]
    pub const fn new(bounds: CalibrationBounds, geometry: ScreenGeometry) -> Self {
        Self { bounds, geometry }
    }

    /// Calibration in use
    #[must_use]
    pub const fn bounds(&self) -> &CalibrationBounds {
        &self.bounds
    }

    /// Screen in use
    #[must_use]
    pub const fn geometry(&self) -> ScreenGeometry {
        self.geometry
    }

    /// Map a raw coordinate pair to the screen pixel containing it
    ///
    /// # Errors
    ///
    /// Propagates [`map_axis`] errors for either axis
    pub fn map(&self, raw_x: f64, raw_y: f64) -> Result<MappedPointer> {
        map(raw_x, raw_y, &self.bounds, self.geometry)
    }
}

/// Map a raw coordinate pair to the screen pixel containing it
///
/// # Errors
///
/// Returns [`Error::DegenerateCalibration`] if a calibrated axis has equal
/// bounds, or [`Error::InvalidInput`] for non-finite input
pub fn map(raw_x: f64, raw_y: f64, bounds: &CalibrationBounds, geometry: ScreenGeometry) -> Result<MappedPointer> {
    let x = map_axis(raw_x, bounds.horizontal(), geometry.width, Axis::Horizontal)?;
    let y = map_axis(raw_y, bounds.vertical(), geometry.height, Axis::Vertical)?;

    Ok(MappedPointer {
        x: f64_to_i32(x)?,
        y: f64_to_i32(y)?,
    })
}
