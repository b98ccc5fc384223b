//! Small utilities to manage bounded history buffers for charts.

use std::collections::VecDeque;
use tracing::warn;

pub fn push_capped<T>(dq: &mut VecDeque<T>, v: T, cap: usize) {
    if dq.len() == cap {
        dq.pop_front();
    }
    dq.push_back(v);
}

/// Points shown by the rolling percent charts.
pub const CHART_POINTS: usize = 10;

// Fixed-capacity FIFO of samples for one charted metric. Created once at
// startup and pushed to once per successful poll.
pub struct RollingSeries {
    label: &'static str,
    points: VecDeque<f64>,
    cap: usize,
}

impl RollingSeries {
    pub fn new(label: &'static str, cap: usize) -> Self {
        Self {
            label,
            points: VecDeque::with_capacity(cap),
            cap,
        }
    }

    /// Appends a sample, normalizing absent/non-numeric input to 0.
    pub fn push(&mut self, value: Option<f64>) {
        let v = match value {
            Some(v) if v.is_finite() => v,
            _ => {
                warn!(series = self.label, "non-numeric chart value, recording 0");
                0.0
            }
        };
        push_capped(&mut self.points, v, self.cap);
    }

    /// Samples in insertion order, oldest first.
    pub fn snapshot(&self) -> Vec<f64> {
        self.points.iter().copied().collect()
    }

    pub fn latest(&self) -> Option<f64> {
        self.points.back().copied()
    }
}
