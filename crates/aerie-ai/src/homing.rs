//! Greedy single-target pursuit.
//!
//! A drone inside the aggro radius turns toward the player's current position
//! and closes at its fixed speed. No memory, no pathfinding, no avoidance.

use glam::DVec3;

use aerie_core::constants::DRONE_AGGRO_RADIUS;

/// Input to the homing evaluator for a single drone.
pub struct HomingContext {
    pub position: DVec3,
    pub target: DVec3,
    /// Pursuit speed (units/s).
    pub speed: f64,
    pub dt: f64,
}

/// Output from the homing evaluator.
pub struct HomingUpdate {
    pub new_position: DVec3,
    pub pursuing: bool,
}

/// Whether a drone at `position` has noticed a target at `target`.
pub fn in_aggro_range(position: DVec3, target: DVec3) -> bool {
    position.distance(target) < DRONE_AGGRO_RADIUS
}

/// Evaluate one drone. Returns the position after `dt`. A pursuing drone
/// always moves a full `speed * dt`, even past the target.
pub fn evaluate(ctx: &HomingContext) -> HomingUpdate {
    let hold = HomingUpdate {
        new_position: ctx.position,
        pursuing: false,
    };

    if ctx.dt <= 0.0 || !in_aggro_range(ctx.position, ctx.target) {
        return hold;
    }

    // Zero when already on top of the target.
    let heading = (ctx.target - ctx.position).normalize_or_zero();
    HomingUpdate {
        new_position: ctx.position + heading * ctx.speed * ctx.dt,
        pursuing: true,
    }
}
