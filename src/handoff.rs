//! Single-slot handoff from a capture thread to the frame loop.
//!
//! The capture side overwrites the slot with every new frame; the consumer
//! takes whatever is newest. Stale frames are dropped, never queued.

use std::sync::{Arc, Mutex, PoisonError};

/// Latest-value-wins slot shared between threads
#[derive(Debug)]
pub struct LatestSample<T> {
    slot: Arc<Mutex<Option<T>>>,
}

impl<T> Clone for LatestSample<T> {
    fn clone(&self) -> Self {
        Self {
            slot: Arc::clone(&self.slot),
        }
    }
}

impl<T> Default for LatestSample<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> LatestSample<T> {
    /// Empty slot
    #[must_use]
    pub fn new() -> Self {
        Self {
            slot: Arc::new(Mutex::new(None)),
        }
    }

    /// Store `value`, returning the unread value it replaced
    pub fn publish(&self, value: T) -> Option<T> {
        self.slot
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .replace(value)
    }

    /// Remove and return the newest value
    pub fn take(&self) -> Option<T> {
        self.slot.lock().unwrap_or_else(PoisonError::into_inner).take()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn test_newest_value_wins() {
        let slot = LatestSample::new();
        assert_eq!(slot.publish(1), None);
        assert_eq!(slot.publish(2), Some(1));
        assert_eq!(slot.take(), Some(2));
        assert_eq!(slot.take(), None);
    }

    #[test]
    fn test_cross_thread_handoff() {
        let slot = LatestSample::new();
        let producer = slot.clone();
        thread::spawn(move || {
            for frame in 0..100 {
                producer.publish(frame);
            }
        })
        .join()
        .unwrap();
        assert_eq!(slot.take(), Some(99));
    }
}
