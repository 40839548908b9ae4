//! Snapshot system: builds the presentation read model.
//!
//! Read-only; never modifies the registry.

use aerie_core::components::PlayerState;
use aerie_core::enums::EntityKind;
use aerie_core::state::*;
use aerie_core::types::SimTime;

use crate::meters::ResourceMeters;
use crate::registry::EntityRegistry;
use crate::systems::scenery::Scenery;

/// Build a complete WorldSnapshot from the current simulation state.
pub fn build_snapshot(
    registry: &EntityRegistry,
    player: &PlayerState,
    meters: &ResourceMeters,
    scenery: &Scenery,
    time: &SimTime,
) -> WorldSnapshot {
    WorldSnapshot {
        time: *time,
        player: build_player(player, meters),
        meters: meters.ratios(),
        drones: build_entities(registry, EntityKind::Drone),
        bullets: build_entities(registry, EntityKind::Bullet),
        powerups: build_entities(registry, EntityKind::Powerup),
        checkpoints: build_entities(registry, EntityKind::Checkpoint),
        boss: build_entities(registry, EntityKind::Boss).into_iter().next(),
        pillars: scenery.pillars.clone(),
        wheels: scenery.wheels.clone(),
    }
}

fn build_player(player: &PlayerState, meters: &ResourceMeters) -> PlayerView {
    PlayerView {
        position: player.position,
        vertical_velocity: player.vertical_velocity,
        motion: player.motion,
        health: meters.health(),
        energy: meters.energy(),
        max_energy: meters.max_energy(),
        boss_health: meters.boss_health(),
    }
}

/// Live entities of one kind, in spawn order.
fn build_entities(registry: &EntityRegistry, kind: EntityKind) -> Vec<EntityView> {
    registry
        .live(kind)
        .into_iter()
        .map(|live| EntityView {
            id: live.id,
            position: live.position,
            half_extents: live.bounds.half_extents,
        })
        .collect()
}
