//! Fixed-window distance averager
//!
//! Samples are written into a ring of `N` slots. A smoothed value is
//! emitted only when the write index wraps back to slot 0, i.e. once per
//! `N` pushes, and never from a partially filled window.

/// Default number of samples per window
pub const WINDOW_SIZE: usize = 10;

/// Ring buffer that emits the integer mean of each completed window
#[derive(Debug, Clone)]
pub struct DistanceAverager<const N: usize = WINDOW_SIZE> {
    samples: [u16; N],
    index: usize,
    wrapped: bool,
}

impl<const N: usize> Default for DistanceAverager<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> DistanceAverager<N> {
    /// Create an empty averager
    pub const fn new() -> Self {
        assert!(N > 0, "window must hold at least one sample");
        Self {
            samples: [0; N],
            index: 0,
            wrapped: false,
        }
    }

    /// Store a sample (cm) in the current slot and advance
    ///
    /// Returns the truncated mean of all `N` slots when this push
    /// completes a window.
    pub fn push(&mut self, cm: u16) -> Option<u16> {
        self.samples[self.index] = cm;
        self.index = (self.index + 1) % N;

        if self.index != 0 {
            return None;
        }

        self.wrapped = true;
        Some(self.mean())
    }

    fn mean(&self) -> u16 {
        let sum: u32 = self.samples.iter().map(|&s| s as u32).sum();
        (sum / N as u32) as u16
    }

    /// Whether the window has wrapped at least once
    pub fn is_full(&self) -> bool {
        self.wrapped
    }

    /// Number of slots holding a sample
    pub fn len(&self) -> usize {
        if self.wrapped {
            N
        } else {
            self.index
        }
    }

    /// Whether no sample has been pushed yet
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Window capacity
    pub const fn capacity(&self) -> usize {
        N
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_window_never_emits() {
        let mut avg = DistanceAverager::<10>::new();
        for _ in 0..9 {
            assert_eq!(avg.push(50), None);
        }
        assert!(!avg.is_full());
        assert_eq!(avg.len(), 9);
    }

    #[test]
    fn test_emits_once_per_window() {
        let mut avg: DistanceAverager = DistanceAverager::new();
        let mut emitted = 0;
        for i in 0..30u16 {
            if avg.push(i).is_some() {
                emitted += 1;
            }
        }
        assert_eq!(emitted, 3);
        assert!(avg.is_full());
        assert_eq!(avg.len(), 10);
    }

    #[test]
    fn test_mean_truncates() {
        let mut avg = DistanceAverager::<10>::new();
        let samples = [1, 2, 3, 4, 5, 6, 7, 8, 9, 10];
        let mut result = None;
        for s in samples {
            result = avg.push(s);
        }
        // 55 / 10
        assert_eq!(result, Some(5));
    }

    #[test]
    fn test_oldest_slot_is_overwritten() {
        let mut avg = DistanceAverager::<10>::new();
        for _ in 0..10 {
            avg.push(100);
        }
        let mut result = None;
        for _ in 0..10 {
            result = avg.push(20);
        }
        assert_eq!(result, Some(20));
    }

    #[test]
    fn test_no_overflow_with_far_samples() {
        let mut avg = DistanceAverager::<10>::new();
        let mut result = None;
        for _ in 0..10 {
            result = avg.push(u16::MAX);
        }
        assert_eq!(result, Some(u16::MAX));
    }
}
