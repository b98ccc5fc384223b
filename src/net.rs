//! Network activity derived from the feed's cumulative byte counters.
//!
//! The `/data` payload reports totals in MB since boot; the tracker diffs
//! them across polls and normalizes each tick against the larger of the two
//! deltas. The resulting bar heights show relative activity, not an
//! absolute MB scale, so the chart stays readable on both idle links and
//! saturated ones.

use std::collections::VecDeque;

use crate::history::push_capped;

/// Bars kept in the activity chart.
pub const ACTIVITY_POINTS: usize = 30;

// Ignore deltas at or below this when scaling, so float dust on an idle
// link does not produce full-height bars.
const IDLE_THRESHOLD_MB: f64 = 0.001;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ActivityPoint {
    /// Upload bar height in [0, 100].
    pub sent_height: f64,
    /// Download bar height in [0, 100].
    pub recv_height: f64,
}

pub struct NetworkActivityTracker {
    prev_sent_mb: f64,
    prev_recv_mb: f64,
    history: VecDeque<ActivityPoint>,
}

impl NetworkActivityTracker {
    pub fn new() -> Self {
        Self {
            prev_sent_mb: 0.0,
            prev_recv_mb: 0.0,
            history: VecDeque::with_capacity(ACTIVITY_POINTS),
        }
    }

    /// Feeds one poll's cumulative totals and returns the new bar pair.
    pub fn update(&mut self, sent_mb: f64, recv_mb: f64) -> ActivityPoint {
        // Counter resets (reboot, interface flap) clamp to 0, never negative.
        let sent_delta = (sent_mb - self.prev_sent_mb).max(0.0);
        let recv_delta = (recv_mb - self.prev_recv_mb).max(0.0);
        self.prev_sent_mb = sent_mb;
        self.prev_recv_mb = recv_mb;

        let max_delta = sent_delta.max(recv_delta);
        let scale = if max_delta > IDLE_THRESHOLD_MB {
            100.0 / max_delta
        } else {
            0.0
        };

        let point = ActivityPoint {
            sent_height: (sent_delta * scale).min(100.0),
            recv_height: (recv_delta * scale).min(100.0),
        };
        push_capped(&mut self.history, point, ACTIVITY_POINTS);
        point
    }

    pub fn history(&self) -> &VecDeque<ActivityPoint> {
        &self.history
    }

    /// Upload heights oldest-first, rounded for the sparkline widget.
    pub fn sent_heights(&self) -> Vec<u64> {
        self.history.iter().map(|p| p.sent_height.round() as u64).collect()
    }

    /// Download heights oldest-first, rounded for the sparkline widget.
    pub fn recv_heights(&self) -> Vec<u64> {
        self.history.iter().map(|p| p.recv_height.round() as u64).collect()
    }
}

impl Default for NetworkActivityTracker {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn idle_link_yields_zero_heights() {
        let mut t = NetworkActivityTracker::new();
        t.update(0.0, 0.0);
        let p = t.update(0.0, 0.0);
        assert_eq!(p, ActivityPoint { sent_height: 0.0, recv_height: 0.0 });
    }

    #[test]
    fn heights_scale_to_the_larger_delta() {
        let mut t = NetworkActivityTracker::new();
        t.update(0.0, 10.0);
        // sent delta 10, recv delta 0 -> scale 10, heights (100, 0)
        let p = t.update(10.0, 10.0);
        assert_eq!(p.sent_height, 100.0);
        assert_eq!(p.recv_height, 0.0);
    }

    #[test]
    fn both_deltas_equal_means_both_full() {
        let mut t = NetworkActivityTracker::new();
        let p = t.update(120.0, 300.0);
        // First poll diffs against the zero baseline; recv is larger so it
        // pins 100 and sent scales relative to it.
        assert_eq!(p.recv_height, 100.0);
        assert!(p.sent_height < 100.0);
    }

    #[test]
    fn counter_reset_clamps_to_zero() {
        let mut t = NetworkActivityTracker::new();
        t.update(500.0, 500.0);
        let p = t.update(10.0, 600.0);
        assert_eq!(p.sent_height, 0.0);
        assert_eq!(p.recv_height, 100.0);
        // Previous totals track the new (lower) counters unconditionally.
        let p2 = t.update(20.0, 600.0);
        assert_eq!(p2.sent_height, 100.0);
    }

    #[test]
    fn history_never_exceeds_capacity() {
        let mut t = NetworkActivityTracker::new();
        for i in 0..100 {
            t.update(i as f64, i as f64 * 2.0);
        }
        assert_eq!(t.history().len(), ACTIVITY_POINTS);
        assert_eq!(t.sent_heights().len(), ACTIVITY_POINTS);
    }
}
