//! Geometry helpers shared by the perception boundary and the mapper.

pub mod safe_cast;

/// Euclidean distance between two points
#[must_use]
pub fn euclidean_distance(a: (f64, f64), b: (f64, f64)) -> f64 {
    (a.0 - b.0).hypot(a.1 - b.1)
}

/// Scale a normalized landmark into frame pixel coordinates
#[must_use]
pub fn to_frame_pixels(point: (f64, f64), frame_width: u32, frame_height: u32) -> (f64, f64) {
    (point.0 * f64::from(frame_width), point.1 * f64::from(frame_height))
}
