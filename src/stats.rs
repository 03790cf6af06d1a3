//! Health tracking shared by players and zombies
//!
//! # Rust Learning Notes
//!
//! This module demonstrates:
//! - **NewType Pattern**: Wrapping the current/max pair in a meaningful type (`Health`)
//! - **Encapsulation**: `max` is private and has no setter, so it can't change
//!   after construction

use serde::Serialize;

/// Represents a character's health points
///
/// Health is tracked separately from max health so that:
/// - Healing can't exceed max health
/// - "Already at full health" checks are trivial
///
/// # Example
///
/// ```rust
/// use zombie_survival::stats::Health;
///
/// let mut health = Health::new(500.0);
/// health.set_current(480.0);
/// assert_eq!(health.heal(30.0), 20.0);
/// assert_eq!(health.current(), 500.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Health {
    current: f64,
    max: f64,
}

impl Health {
    /// Creates a new Health instance with full health
    pub fn new(max: f64) -> Self {
        Health { current: max, max }
    }

    /// Returns the current health value
    pub fn current(&self) -> f64 {
        self.current
    }

    /// Returns the maximum health value
    pub fn max(&self) -> f64 {
        self.max
    }

    /// Returns true when there is nothing left to heal
    pub fn is_full(&self) -> bool {
        self.current >= self.max
    }

    /// Sets current health directly, capped at max health
    ///
    /// Not validated against zero: nothing in the game deals damage yet.
    pub fn set_current(&mut self, value: f64) {
        self.current = value.min(self.max);
    }

    /// Heals health, capped at max health
    ///
    /// Returns the actual amount healed (which may be less than requested
    /// if already near max health)
    pub fn heal(&mut self, amount: f64) -> f64 {
        let old_health = self.current;
        self.current = (self.current + amount).min(self.max);
        self.current - old_health
    }
}
