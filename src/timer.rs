//! Polled interval gates driven by the simulation clock.

use std::time::Duration;

/// Fires at most once per elapsed period.
///
/// Time only advances through [`Interval::tick`], so the gate follows the
/// simulation's delta rather than the wall clock. Firing discards whatever
/// time overshot the period, the same as re-arming from a "last fired"
/// timestamp would.
#[derive(Debug, Clone, PartialEq)]
pub struct Interval {
    period: f32,
    elapsed: f32,
}

impl Interval {
    pub fn new(period: Duration) -> Self {
        Self {
            period: period.as_secs_f32(),
            elapsed: 0.0,
        }
    }

    pub fn tick(&mut self, dt: f32) {
        self.elapsed += dt.max(0.0);
    }

    /// Returns `true` if a full period has elapsed since the last firing, and re-arms the gate.
    pub fn is_ready(&mut self) -> bool {
        if self.elapsed >= self.period {
            self.elapsed = 0.0;
            true
        } else {
            false
        }
    }

    pub fn reset(&mut self) {
        self.elapsed = 0.0;
    }
}
