//! Player locomotion: horizontal movement plus the Grounded / Flying /
//! Falling vertical state machine, with energy drain and regeneration.

use glam::DVec3;

use aerie_core::commands::ControlSignal;
use aerie_core::components::PlayerState;
use aerie_core::constants::*;
use aerie_core::enums::{MotionState, VisualKind};
use aerie_core::events::{Effect, VisualEffect};

use crate::meters::ResourceMeters;

/// Horizontal speed for the given boost state.
pub fn move_speed(boost: bool) -> f64 {
    if boost {
        BASE_MOVE_SPEED + BOOST_BONUS
    } else {
        BASE_MOVE_SPEED
    }
}

/// Advance the player by `dt`. Always leaves a valid state.
pub fn run(
    player: &mut PlayerState,
    meters: &mut ResourceMeters,
    signal: &ControlSignal,
    dt: f64,
    effects: &mut Vec<Effect>,
) {
    let flying = signal.flight && meters.energy() > 0.0;

    if !player.on_ground() {
        player.vertical_velocity += GRAVITY * dt;
    }

    if flying {
        player.vertical_velocity = FLIGHT_ASCENT_RATE;
        player.motion = MotionState::Flying;
        meters.drain_energy(FLIGHT_ENERGY_DRAIN * dt);
    } else if player.position.y > GROUND_HEIGHT + GROUND_SETTLE_TOLERANCE {
        player.motion = MotionState::Falling;
    } else {
        land(player);
        meters.regen_energy(ENERGY_REGEN_RATE * dt);
    }

    player.position += signal.planar_direction() * move_speed(signal.boost) * dt;
    player.position.y += player.vertical_velocity * dt;

    if player.position.y < GROUND_HEIGHT {
        land(player);
    }

    if flying {
        effects.push(Effect::Visual(VisualEffect {
            kind: VisualKind::JetFlame,
            position: player.position - DVec3::new(0.0, JET_FLAME_DROP, 0.0),
            scale: JET_FLAME_SCALE,
            duration_secs: JET_FLAME_SECS,
        }));
    }
}

fn land(player: &mut PlayerState) {
    player.position.y = GROUND_HEIGHT;
    player.vertical_velocity = 0.0;
    player.motion = MotionState::Grounded;
}
