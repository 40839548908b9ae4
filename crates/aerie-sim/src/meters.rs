//! Resource meters: player health, flight energy and boss health.
//!
//! Every mutation clamps into range, so the meters can never be observed
//! out of bounds.

use aerie_core::constants::{BOSS_MAX_HEALTH, MAX_HEALTH};
use aerie_core::state::MeterRatios;

#[derive(Debug, Clone, PartialEq)]
pub struct ResourceMeters {
    health: f64,
    energy: f64,
    max_energy: f64,
    boss_health: f64,
}

fn clamp(value: f64, max: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, max)
    }
}

impl ResourceMeters {
    /// Full meters. `max_energy` must be positive (checked by `SimConfig`).
    pub fn new(max_energy: f64) -> Self {
        Self {
            health: MAX_HEALTH,
            energy: max_energy,
            max_energy,
            boss_health: BOSS_MAX_HEALTH,
        }
    }

    pub fn health(&self) -> f64 {
        self.health
    }

    pub fn energy(&self) -> f64 {
        self.energy
    }

    pub fn max_energy(&self) -> f64 {
        self.max_energy
    }

    pub fn boss_health(&self) -> f64 {
        self.boss_health
    }

    /// Restore health, capped at MAX_HEALTH. Returns the amount applied.
    pub fn heal(&mut self, amount: f64) -> f64 {
        let before = self.health;
        self.health = clamp(self.health + amount, MAX_HEALTH);
        self.health - before
    }

    pub fn drain_energy(&mut self, amount: f64) {
        self.energy = clamp(self.energy - amount, self.max_energy);
    }

    pub fn regen_energy(&mut self, amount: f64) {
        self.energy = clamp(self.energy + amount, self.max_energy);
    }

    /// Apply boss damage and return the remaining boss health.
    pub fn damage_boss(&mut self, amount: f64) -> f64 {
        self.boss_health = clamp(self.boss_health - amount, BOSS_MAX_HEALTH);
        self.boss_health
    }

    /// Refill boss health for a freshly spawned boss.
    pub fn reset_boss(&mut self) {
        self.boss_health = BOSS_MAX_HEALTH;
    }

    /// Empty the boss meter when the boss leaves play without being shot down.
    pub fn clear_boss(&mut self) {
        self.boss_health = 0.0;
    }

    /// Normalized fills for the HUD bars.
    pub fn ratios(&self) -> MeterRatios {
        MeterRatios {
            health: self.health / MAX_HEALTH,
            energy: self.energy / self.max_energy,
            boss_health: self.boss_health / BOSS_MAX_HEALTH,
        }
    }

    #[cfg(test)]
    pub fn set_health(&mut self, value: f64) {
        self.health = clamp(value, MAX_HEALTH);
    }

    #[cfg(test)]
    pub fn set_energy(&mut self, value: f64) {
        self.energy = clamp(value, self.max_energy);
    }
}
