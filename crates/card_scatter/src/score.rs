//! Click score counters.
//!
//! [`ScoreTracker`] is an owned counter passed explicitly to whatever removes cards.
//! [`AtomicScoreTracker`] offers the same operations through `&self` for hosts that
//! report removals from more than one thread.
use std::sync::atomic::{AtomicU64, Ordering};

use tracing::debug;

/// Points awarded for a single removal unless the caller says otherwise.
pub const DEFAULT_POINTS: u32 = 1;

/// Monotonic score counter.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ScoreTracker {
    score: u64,
}

impl ScoreTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `points` and returns the new total. Saturates at `u64::MAX`.
    pub fn add_score(&mut self, points: u32) -> u64 {
        self.score = self.score.saturating_add(points as u64);
        debug!("Score +{} -> {}.", points, self.score);
        self.score
    }

    /// Adds [`DEFAULT_POINTS`].
    pub fn add_one(&mut self) -> u64 {
        self.add_score(DEFAULT_POINTS)
    }

    pub fn score(&self) -> u64 {
        self.score
    }

    /// Starts a new game from zero.
    pub fn reset(&mut self) {
        self.score = 0;
    }
}

/// Thread-safe counterpart of [`ScoreTracker`].
#[derive(Debug, Default)]
pub struct AtomicScoreTracker {
    score: AtomicU64,
}

impl AtomicScoreTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `points` and returns the new total. Saturates at `u64::MAX`.
    pub fn add_score(&self, points: u32) -> u64 {
        let points = points as u64;
        let previous = self
            .score
            .fetch_update(Ordering::AcqRel, Ordering::Acquire, |s| {
                Some(s.saturating_add(points))
            })
            .unwrap_or_else(|s| s);
        previous.saturating_add(points)
    }

    pub fn add_one(&self) -> u64 {
        self.add_score(DEFAULT_POINTS)
    }

    pub fn score(&self) -> u64 {
        self.score.load(Ordering::Acquire)
    }

    pub fn reset(&self) {
        self.score.store(0, Ordering::Release);
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::thread;

    use super::*;

    #[test]
    fn five_single_points_then_ten() {
        let mut tracker = ScoreTracker::new();
        for _ in 0..5 {
            tracker.add_one();
        }
        assert_eq!(tracker.score(), 5);
        assert_eq!(tracker.add_score(10), 15);
        assert_eq!(tracker.score(), 15);
    }

    #[test]
    fn score_saturates_and_resets() {
        let mut tracker = ScoreTracker { score: u64::MAX - 1 };
        assert_eq!(tracker.add_score(5), u64::MAX);
        tracker.reset();
        assert_eq!(tracker.score(), 0);
    }

    #[test]
    fn zero_points_leave_score_unchanged() {
        let mut tracker = ScoreTracker::new();
        tracker.add_one();
        assert_eq!(tracker.add_score(0), 1);
    }

    #[test]
    fn atomic_tracker_counts_across_threads() {
        let tracker = Arc::new(AtomicScoreTracker::new());
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let tracker = Arc::clone(&tracker);
                thread::spawn(move || {
                    for _ in 0..250 {
                        tracker.add_one();
                    }
                })
            })
            .collect();
        for h in handles {
            h.join().unwrap();
        }
        assert_eq!(tracker.score(), 1000);
        assert_eq!(tracker.add_score(10), 1010);
        tracker.reset();
        assert_eq!(tracker.score(), 0);
    }
}
