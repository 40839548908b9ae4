//! Drone AI system: runs the homing evaluator for every drone.

use glam::DVec3;

use aerie_ai::homing::{evaluate, HomingContext};
use aerie_core::components::{Drone, Position};

use crate::registry::EntityRegistry;

/// Move every drone inside aggro range toward `player_position`.
/// Returns how many drones are pursuing.
pub fn run(registry: &mut EntityRegistry, player_position: DVec3, dt: f64) -> usize {
    let mut pursuing = 0;
    for (_entity, (drone, pos)) in registry.world_mut().query_mut::<(&Drone, &mut Position)>() {
        let update = evaluate(&HomingContext {
            position: pos.0,
            target: player_position,
            speed: drone.speed,
            dt,
        });
        if update.pursuing {
            pos.0 = update.new_position;
            pursuing += 1;
        }
    }
    pursuing
}
