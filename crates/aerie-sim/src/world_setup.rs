//! Default world layout: pickups, enemies, the boss, and decorative scenery.

use glam::DVec3;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use aerie_core::components::{FerrisWheel, Pillar};
use aerie_core::constants::*;

use crate::registry::Blueprint;
use crate::systems::scenery::Scenery;

/// Entities of the default level, in spawn order.
pub fn default_layout() -> Vec<Blueprint> {
    let mut layout = Vec::new();
    for p in CHECKPOINT_POSITIONS {
        layout.push(Blueprint::Checkpoint {
            position: DVec3::from_array(p),
        });
    }
    for p in POWERUP_POSITIONS {
        layout.push(Blueprint::powerup(DVec3::from_array(p)));
    }
    for p in DRONE_POSITIONS {
        layout.push(Blueprint::drone(DVec3::from_array(p)));
    }
    layout.push(Blueprint::Boss {
        position: DVec3::from_array(BOSS_POSITION),
    });
    layout
}

/// Pillar grid with seeded random heights, plus the ferris wheels.
pub fn build_scenery(rng: &mut ChaCha8Rng) -> Scenery {
    let mut pillars = Vec::with_capacity(PILLAR_GRID.len() * PILLAR_GRID.len());
    for x in PILLAR_GRID {
        for z in PILLAR_GRID {
            let height: f64 = rng.gen_range(PILLAR_MIN_HEIGHT..PILLAR_MAX_HEIGHT);
            pillars.push(Pillar {
                position: DVec3::new(x, height / 2.0, z),
                height,
            });
        }
    }

    let wheels = WHEEL_POSITIONS
        .iter()
        .map(|p| FerrisWheel {
            position: DVec3::from_array(*p),
            rotation_deg: 0.0,
        })
        .collect();

    Scenery { pillars, wheels }
}
