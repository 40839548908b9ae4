//! Control input consumed by the simulation once per tick.

use glam::{DVec2, DVec3};
use serde::{Deserialize, Serialize};

/// Device-independent player intent for one tick.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ControlSignal {
    /// Planar move axes: x = strafe (right positive), y = forward.
    /// Each component is clamped into [-1, 1] before use.
    pub move_axis: DVec2,
    /// Sprint bonus.
    pub boost: bool,
    /// Jet flight requested (level-triggered).
    pub flight: bool,
    /// Fire requested this tick (edge-triggered; the driver clears it).
    pub fire: bool,
    /// Aim direction used when `fire` is set. Normalized by the simulation.
    pub aim: DVec3,
}

impl Default for ControlSignal {
    fn default() -> Self {
        Self {
            move_axis: DVec2::ZERO,
            boost: false,
            flight: false,
            fire: false,
            aim: DVec3::Z,
        }
    }
}

impl ControlSignal {
    /// Signal that only moves along the given axes.
    pub fn moving(x: f64, y: f64) -> Self {
        Self {
            move_axis: DVec2::new(x, y),
            ..Default::default()
        }
    }

    /// Signal that only requests flight.
    pub fn flying() -> Self {
        Self {
            flight: true,
            ..Default::default()
        }
    }

    /// Move axes clamped into the unit square, mapped onto the ground plane
    /// (x -> x, y -> z) and normalized.
    pub fn planar_direction(&self) -> DVec3 {
        if !self.move_axis.is_finite() {
            return DVec3::ZERO;
        }
        let axis = self.move_axis.clamp(DVec2::splat(-1.0), DVec2::splat(1.0));
        DVec3::new(axis.x, 0.0, axis.y).normalize_or_zero()
    }
}
