//! Pickup system: player-vs-powerup and player-vs-checkpoint overlaps.

use glam::{DVec2, DVec3};

use aerie_core::components::{PlayerState, Powerup};
use aerie_core::constants::*;
use aerie_core::enums::{EntityKind, TextColor};
use aerie_core::events::{Effect, TextNotification};
use aerie_core::types::Aabb;

use crate::meters::ResourceMeters;
use crate::registry::EntityRegistry;

/// The player's collision box.
pub fn player_bounds(player: &PlayerState) -> Aabb {
    Aabb::new(player.position, DVec3::from_array(PLAYER_HALF_EXTENTS))
}

pub fn run(
    registry: &mut EntityRegistry,
    meters: &mut ResourceMeters,
    player: &PlayerState,
    effects: &mut Vec<Effect>,
) {
    let bounds = player_bounds(player);

    for powerup in registry.live(EntityKind::Powerup) {
        if !bounds.intersects(&powerup.bounds) {
            continue;
        }
        let heal = registry
            .component::<Powerup>(powerup.id)
            .map_or(POWERUP_HEAL, |p| p.heal);
        effects.extend(registry.destroy(powerup.id));
        let applied = meters.heal(heal);
        effects.push(text(HEAL_TEXT, TextColor::Lime, HEAL_TEXT_POSITION, HEAL_TEXT_SECS));
        tracing::debug!(applied, health = meters.health(), "powerup collected");
    }

    registry.for_each_live(EntityKind::Checkpoint, |checkpoint| {
        if bounds.intersects(&checkpoint.bounds) {
            effects.push(text(
                CHECKPOINT_TEXT,
                TextColor::Azure,
                CHECKPOINT_TEXT_POSITION,
                CHECKPOINT_TEXT_SECS,
            ));
            tracing::debug!(checkpoint = checkpoint.id.0, "checkpoint reached");
        }
    });
}

fn text(text: &str, color: TextColor, position: [f64; 2], duration_secs: f64) -> Effect {
    Effect::Text(TextNotification {
        text: text.to_string(),
        color,
        screen_position: DVec2::from_array(position),
        duration_secs,
    })
}
