//! Combat resolver: advances bullets and resolves bullet-vs-drone and
//! bullet-vs-boss hits.
//!
//! Resolution order is fixed: bullets in spawn order; for each bullet,
//! drones in spawn order, then the boss. A bullet resolves at most one hit
//! and is gone as soon as it does.

use glam::{DVec2, DVec3};
use hecs::World;

use aerie_core::components::{Bullet, Collider, Position, SpawnOrder};
use aerie_core::constants::*;
use aerie_core::enums::{EntityKind, TextColor, VisualKind};
use aerie_core::events::{Effect, TextNotification, VisualEffect};
use aerie_core::types::EntityId;

use crate::meters::ResourceMeters;
use crate::registry::{entity_id, EntityRegistry, LiveEntity};

/// Where a bullet went this tick.
#[derive(Debug, Clone, Copy)]
pub struct BulletStep {
    pub id: EntityId,
    pub from: DVec3,
    pub to: DVec3,
    pub half_extents: DVec3,
    pub expired: bool,
}

impl BulletStep {
    /// Swept test: did the bullet's path this tick touch `target`?
    pub fn hits(&self, target: &LiveEntity) -> bool {
        target
            .bounds
            .expanded(self.half_extents)
            .intersects_segment(self.from, self.to)
    }
}

/// Move every bullet and burn its lifetime. Returns steps in spawn order.
pub fn advance_bullets(world: &mut World, dt: f64) -> Vec<BulletStep> {
    let mut steps: Vec<(SpawnOrder, BulletStep)> = Vec::new();
    for (entity, (order, pos, bullet, collider)) in
        world.query_mut::<(&SpawnOrder, &mut Position, &mut Bullet, &Collider)>()
    {
        let from = pos.0;
        pos.0 += bullet.direction * bullet.speed * dt;
        bullet.lifetime_secs -= dt;
        steps.push((
            *order,
            BulletStep {
                id: entity_id(entity),
                from,
                to: pos.0,
                half_extents: collider.half_extents,
                expired: bullet.lifetime_secs <= 0.0,
            },
        ));
    }
    steps.sort_by_key(|(order, _)| *order);
    steps.into_iter().map(|(_, step)| step).collect()
}

/// Run one resolver pass.
pub fn run(
    registry: &mut EntityRegistry,
    meters: &mut ResourceMeters,
    dt: f64,
    effects: &mut Vec<Effect>,
) {
    let steps = advance_bullets(registry.world_mut(), dt);
    let drones = registry.live(EntityKind::Drone);
    let boss = registry.live(EntityKind::Boss).into_iter().next();

    for step in steps {
        if !registry.is_live(step.id) {
            continue;
        }

        if step.expired {
            effects.extend(registry.destroy(step.id));
            continue;
        }

        let hit_drone = drones
            .iter()
            .find(|drone| registry.is_live(drone.id) && step.hits(drone))
            .copied();
        if let Some(drone) = hit_drone {
            effects.extend(registry.destroy(step.id));
            effects.extend(registry.destroy(drone.id));
            effects.push(Effect::Visual(VisualEffect {
                kind: VisualKind::Explosion,
                position: drone.position,
                scale: EXPLOSION_SCALE,
                duration_secs: EXPLOSION_LINGER_SECS,
            }));
            tracing::debug!(drone = drone.id.0, bullet = step.id.0, "drone destroyed");
            continue;
        }

        let Some(boss) = boss.filter(|b| registry.is_live(b.id)) else {
            continue;
        };
        if step.hits(&boss) {
            effects.extend(registry.destroy(step.id));
            let remaining = meters.damage_boss(BOSS_HIT_DAMAGE);
            tracing::debug!(remaining, "boss hit");
            if remaining <= 0.0 {
                effects.extend(registry.destroy(boss.id));
                effects.push(boss_defeated_text());
                tracing::info!("boss defeated");
            }
        }
    }
}

fn boss_defeated_text() -> Effect {
    Effect::Text(TextNotification {
        text: BOSS_DEFEATED_TEXT.to_string(),
        color: TextColor::Violet,
        screen_position: DVec2::from_array(BOSS_DEFEATED_TEXT_POSITION),
        duration_secs: BOSS_DEFEATED_TEXT_SECS,
    })
}
