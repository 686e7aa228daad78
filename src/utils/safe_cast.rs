//! Safe float-to-pixel conversions

use crate::{Error, Result};

/// Safely convert f64 to i32 with bounds checking
///
/// # Errors
///
/// Returns an error if the value is not finite or outside i32 range
#[allow(clippy::cast_possible_truncation)] // Truncation after bounds check is safe
pub fn f64_to_i32(value: f64) -> Result<i32> {
    if value.is_finite() && value >= f64::from(i32::MIN) && value <= f64::from(i32::MAX) {
        Ok(value as i32)
    } else {
        Err(Error::InvalidInput(format!(
            "Value {value} cannot be safely converted to i32"
        )))
    }
}

/// Clamp a value into `[min, max]`, mapping NaN to `min`
#[must_use]
pub fn clamp_finite(value: f64, min: f64, max: f64) -> f64 {
    let (min, max) = if min <= max { (min, max) } else { (max, min) };
    if value.is_nan() {
        return min;
    }
    value.clamp(min, max)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_f64_to_i32() {
        assert_eq!(f64_to_i32(42.0).unwrap(), 42);
        assert_eq!(f64_to_i32(-42.0).unwrap(), -42);
        assert_eq!(f64_to_i32(2147483647.0).unwrap(), i32::MAX);

        assert!(f64_to_i32(f64::INFINITY).is_err());
        assert!(f64_to_i32(f64::NAN).is_err());
        assert!(f64_to_i32(2147483648.0).is_err());
    }

    #[test]
    fn test_f64_to_i32_truncates_toward_zero() {
        assert_eq!(f64_to_i32(191.52).unwrap(), 191);
        assert_eq!(f64_to_i32(960.000_000_000_000_2).unwrap(), 960);
        assert_eq!(f64_to_i32(539.999_999_9).unwrap(), 539);
        assert_eq!(f64_to_i32(-0.7).unwrap(), 0);
    }

    #[test]
    fn test_clamp_finite() {
        assert_eq!(clamp_finite(50.0, 0.0, 100.0), 50.0);
        assert_eq!(clamp_finite(-10.0, 0.0, 100.0), 0.0);
        assert_eq!(clamp_finite(150.0, 0.0, 100.0), 100.0);
        assert_eq!(clamp_finite(f64::NAN, 0.0, 100.0), 0.0);
        assert_eq!(clamp_finite(f64::INFINITY, 0.0, 100.0), 100.0);
        // Swapped bounds are normalised
        assert_eq!(clamp_finite(150.0, 100.0, 0.0), 100.0);
    }

    proptest! {
        #[test]
        fn prop_f64_to_i32_is_monotonic(a in -1.0e6f64..1.0e6, b in -1.0e6f64..1.0e6) {
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            prop_assert!(f64_to_i32(lo).unwrap() <= f64_to_i32(hi).unwrap());
        }

        #[test]
        fn prop_clamp_finite_within_bounds(value in any::<f64>(), max in 0.0f64..10_000.0) {
            let clamped = clamp_finite(value, 0.0, max);
            prop_assert!((0.0..=max).contains(&clamped));
        }
    }
}
