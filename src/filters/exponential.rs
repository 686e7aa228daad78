use super::PointerFilter;
use crate::{Error, Result};

/// Exponential smoothing: `out = alpha * raw + (1 - alpha) * previous`
pub struct ExponentialFilter {
    alpha: f64,
    last: Option<(f64, f64)>,
}

impl ExponentialFilter {
    /// Filter with weight `alpha` on the newest sample
    ///
    /// # Errors
    ///
    /// Returns [`Error::FilterError`] unless `alpha` is in (0, 1]
    pub fn new(alpha: f64) -> Result<Self> {
        if !(alpha > 0.0 && alpha <= 1.0) {
            return Err(Error::FilterError(format!("Alpha must be in (0, 1], got {alpha}")));
        }
        Ok(Self { alpha, last: None })
    }
}

impl PointerFilter for ExponentialFilter {
    fn apply(&mut self, x: f64, y: f64) -> (f64, f64) {
        let smoothed = match self.last {
            Some((last_x, last_y)) => (
                self.alpha * x + (1.0 - self.alpha) * last_x,
                self.alpha * y + (1.0 - self.alpha) * last_y,
            ),
            None => (x, y),
        };
        self.last = Some(smoothed);
        smoothed
    }

    fn reset(&mut self) {
        self.last = None;
    }

    fn name(&self) -> &str {
        "exponential"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exponential_filter() {
        let mut filter = ExponentialFilter::new(0.5).unwrap();

        // First value passes through
        assert_eq!(filter.apply(0.2, 0.4), (0.2, 0.4));

        let (x, y) = filter.apply(0.4, 0.8);
        assert!((x - 0.3).abs() < 1e-12);
        assert!((y - 0.6).abs() < 1e-12);

        filter.reset();
        assert_eq!(filter.apply(0.9, 0.1), (0.9, 0.1));
    }

    #[test]
    fn test_alpha_bounds() {
        assert!(ExponentialFilter::new(1.0).is_ok());
        assert!(ExponentialFilter::new(0.0).is_err());
        assert!(ExponentialFilter::new(f64::NAN).is_err());
    }
}
