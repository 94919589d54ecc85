use crate::constants::{KILL_THRESHOLD, MAX_HEARTS, STARTING_HEALTH};

/// Health and ghost kills for the current run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ledger {
    health: i32,
    kills: u32,
}

impl Default for Ledger {
    fn default() -> Self {
        Self {
            health: STARTING_HEALTH,
            kills: 0,
        }
    }
}

impl Ledger {
    pub fn health(&self) -> i32 {
        self.health
    }

    pub fn kills(&self) -> u32 {
        self.kills
    }

    /// Removes one health point, never going below zero.
    pub fn damage(&mut self) {
        self.health = (self.health - 1).max(0);
    }

    /// Adds one health point. Only the display is capped, not the value.
    pub fn heal(&mut self) {
        self.health = self.health.saturating_add(1);
    }

    pub fn record_kill(&mut self) {
        self.kills = self.kills.saturating_add(1);
    }

    /// Number of heart icons to draw.
    pub fn hearts(&self) -> usize {
        (self.health.max(0) as usize).min(MAX_HEARTS)
    }

    pub fn is_depleted(&self) -> bool {
        self.health <= 0
    }

    pub fn has_won(&self) -> bool {
        self.kills >= KILL_THRESHOLD
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
