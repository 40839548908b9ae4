//! Decorative scenery: pillars and spinning ferris wheels. Never collides.

use aerie_core::components::{FerrisWheel, Pillar};
use aerie_core::constants::WHEEL_SPIN_RATE_DEG;

#[derive(Debug, Clone, Default)]
pub struct Scenery {
    pub pillars: Vec<Pillar>,
    pub wheels: Vec<FerrisWheel>,
}

/// Spin every wheel by `dt`.
pub fn run(scenery: &mut Scenery, dt: f64) {
    for wheel in &mut scenery.wheels {
        wheel.rotation_deg = (wheel.rotation_deg + WHEEL_SPIN_RATE_DEG * dt).rem_euclid(360.0);
    }
}
