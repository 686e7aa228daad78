//! Jitter smoothing for the raw nose coordinate.
//!
//! Landmark positions wobble by a few thousandths from frame to frame, which
//! is enough to flicker the highlighted key at cell borders. A filter runs on
//! the normalized coordinate before it is mapped to the screen.

/// Exponential smoothing
pub mod exponential;

/// Sliding-window mean
pub mod moving_average;

use crate::{
    constants::{DEFAULT_EXPONENTIAL_ALPHA, DEFAULT_MOVING_AVERAGE_WINDOW},
    Error, Result,
};

/// Smoothing applied to successive raw pointer coordinates
pub trait PointerFilter: Send + Sync {
    /// Feed a raw coordinate and get the smoothed one back
    fn apply(&mut self, x: f64, y: f64) -> (f64, f64);

    /// Forget history, e.g. after the face was lost
    fn reset(&mut self);

    /// Filter name
    fn name(&self) -> &str;
}

/// Pass-through
pub struct NoFilter;

impl PointerFilter for NoFilter {
    fn apply(&mut self, x: f64, y: f64) -> (f64, f64) {
        (x, y)
    }

    fn reset(&mut self) {}

    fn name(&self) -> &str {
        "none"
    }
}

fn parse_param<T: std::str::FromStr>(descriptor: &str, value: &str) -> Result<T> {
    value
        .parse()
        .map_err(|_| Error::FilterError(format!("Invalid parameter {value:?} in filter {descriptor:?}")))
}

/// Create a filter from `name[:param]`, e.g. `exponential:0.3` or `moving_average:7`
///
/// # Errors
///
/// Returns [`Error::FilterError`] for unknown names or invalid parameters
pub fn create_filter(descriptor: &str) -> Result<Box<dyn PointerFilter>> {
    let lowered = descriptor.trim().to_lowercase();
    let (name, param) = match lowered.split_once(':') {
        Some((name, param)) => (name, Some(param)),
        None => (lowered.as_str(), None),
    };

    match name {
        "none" | "nofilter" => Ok(Box::new(NoFilter)),
        "exponential" => {
            let alpha = param.map_or(Ok(DEFAULT_EXPONENTIAL_ALPHA), |p| parse_param(descriptor, p))?;
            Ok(Box::new(exponential::ExponentialFilter::new(alpha)?))
        }
        "moving_average" | "movingaverage" => {
            let window = param.map_or(Ok(DEFAULT_MOVING_AVERAGE_WINDOW), |p| parse_param(descriptor, p))?;
            Ok(Box::new(moving_average::MovingAverageFilter::new(window)?))
        }
        _ => Err(Error::FilterError(format!("Unknown filter type: {descriptor}"))),
    }
}
