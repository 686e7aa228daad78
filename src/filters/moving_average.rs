use super::PointerFilter;
use crate::{Error, Result};
use std::collections::VecDeque;

/// Mean of the last `window_size` coordinates
pub struct MovingAverageFilter {
    window_size: usize,
    history: VecDeque<(f64, f64)>,
}

impl MovingAverageFilter {
    /// Filter averaging over `window_size` frames
    ///
    /// # Errors
    ///
    /// Returns [`Error::FilterError`] for a zero window
    pub fn new(window_size: usize) -> Result<Self> {
        if window_size == 0 {
            return Err(Error::FilterError("Window size must be greater than 0".to_string()));
        }
        Ok(Self {
            window_size,
            history: VecDeque::with_capacity(window_size),
        })
    }
}

impl PointerFilter for MovingAverageFilter {
    #[allow(clippy::cast_precision_loss)] // Window sizes are small
    fn apply(&mut self, x: f64, y: f64) -> (f64, f64) {
        if self.history.len() >= self.window_size {
            self.history.pop_front();
        }
        self.history.push_back((x, y));

        let n = self.history.len() as f64;
        let (sum_x, sum_y) = self
            .history
            .iter()
            .fold((0.0, 0.0), |(sx, sy), &(px, py)| (sx + px, sy + py));
        (sum_x / n, sum_y / n)
    }

    fn reset(&mut self) {
        self.history.clear();
    }

    fn name(&self) -> &str {
        "moving_average"
    }
}
