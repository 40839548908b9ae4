//! Entity registry: the hecs world holding every drone, bullet, powerup,
//! checkpoint and the boss.
//!
//! Destruction is deferred. `destroy` hides an entity from every query at
//! once, while the actual despawn waits for `flush`, so systems can iterate a
//! snapshot of live entities and remove them mid-pass.

use glam::DVec3;
use hecs::{Entity, World};

use aerie_core::components::*;
use aerie_core::constants::*;
use aerie_core::enums::EntityKind;
use aerie_core::events::Effect;
use aerie_core::types::{Aabb, EntityId};

/// Closed set of things the registry can spawn.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Blueprint {
    Drone {
        position: DVec3,
        speed: f64,
    },
    Bullet {
        position: DVec3,
        direction: DVec3,
        speed: f64,
        lifetime_secs: f64,
    },
    Powerup {
        position: DVec3,
        heal: f64,
    },
    Checkpoint {
        position: DVec3,
    },
    Boss {
        position: DVec3,
    },
}

impl Blueprint {
    pub fn drone(position: DVec3) -> Self {
        Self::Drone {
            position,
            speed: DRONE_SPEED,
        }
    }

    /// Standard bullet. `direction` must already be a unit vector.
    pub fn bullet(position: DVec3, direction: DVec3) -> Self {
        Self::Bullet {
            position,
            direction,
            speed: BULLET_SPEED,
            lifetime_secs: BULLET_LIFETIME_SECS,
        }
    }

    pub fn powerup(position: DVec3) -> Self {
        Self::Powerup {
            position,
            heal: POWERUP_HEAL,
        }
    }

    pub fn kind(&self) -> EntityKind {
        match self {
            Self::Drone { .. } => EntityKind::Drone,
            Self::Bullet { .. } => EntityKind::Bullet,
            Self::Powerup { .. } => EntityKind::Powerup,
            Self::Checkpoint { .. } => EntityKind::Checkpoint,
            Self::Boss { .. } => EntityKind::Boss,
        }
    }

    pub fn position(&self) -> DVec3 {
        match *self {
            Self::Drone { position, .. }
            | Self::Bullet { position, .. }
            | Self::Powerup { position, .. }
            | Self::Checkpoint { position }
            | Self::Boss { position } => position,
        }
    }
}

/// A live entity as seen by one resolver pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LiveEntity {
    pub id: EntityId,
    pub position: DVec3,
    pub bounds: Aabb,
}

/// Arena of entities indexed by stable ids.
#[derive(Default)]
pub struct EntityRegistry {
    world: World,
    next_order: u64,
    pending: Vec<Entity>,
}

pub(crate) fn entity_id(entity: Entity) -> EntityId {
    EntityId(entity.to_bits().get())
}

impl EntityRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an entity and return its id.
    pub fn spawn(&mut self, blueprint: Blueprint) -> EntityId {
        let order = SpawnOrder(self.next_order);
        self.next_order += 1;

        let entity = match blueprint {
            Blueprint::Drone { position, speed } => self.world.spawn((
                EntityKind::Drone,
                order,
                Position(position),
                Collider {
                    half_extents: DVec3::splat(DRONE_HALF_EXTENT),
                },
                Drone { speed },
            )),
            Blueprint::Bullet {
                position,
                direction,
                speed,
                lifetime_secs,
            } => self.world.spawn((
                EntityKind::Bullet,
                order,
                Position(position),
                Collider {
                    half_extents: DVec3::splat(BULLET_HALF_EXTENT),
                },
                Bullet {
                    direction,
                    speed,
                    lifetime_secs,
                },
            )),
            Blueprint::Powerup { position, heal } => self.world.spawn((
                EntityKind::Powerup,
                order,
                Position(position),
                Collider {
                    half_extents: DVec3::splat(POWERUP_HALF_EXTENT),
                },
                Powerup { heal },
            )),
            Blueprint::Checkpoint { position } => self.world.spawn((
                EntityKind::Checkpoint,
                order,
                Position(position),
                Collider {
                    half_extents: DVec3::splat(CHECKPOINT_HALF_EXTENT),
                },
                Checkpoint,
            )),
            Blueprint::Boss { position } => self.world.spawn((
                EntityKind::Boss,
                order,
                Position(position),
                Collider {
                    half_extents: DVec3::splat(BOSS_HALF_EXTENT),
                },
                Boss,
            )),
        };

        entity_id(entity)
    }

    /// Mark an entity for removal. Returns the destruction effect, or `None`
    /// when the id is unknown or already destroyed.
    pub fn destroy(&mut self, id: EntityId) -> Option<Effect> {
        let entity = self.resolve(id)?;
        let kind = *self.world.get::<&EntityKind>(entity).ok()?;
        let position = self.world.get::<&Position>(entity).ok()?.0;
        self.pending.push(entity);
        Some(Effect::EntityDestroyed { id, kind, position })
    }

    /// Alive and not marked for removal.
    pub fn is_live(&self, id: EntityId) -> bool {
        self.resolve(id).is_some()
    }

    pub fn kind_of(&self, id: EntityId) -> Option<EntityKind> {
        let entity = self.resolve(id)?;
        self.world.get::<&EntityKind>(entity).ok().map(|k| *k)
    }

    pub fn position_of(&self, id: EntityId) -> Option<DVec3> {
        let entity = self.resolve(id)?;
        self.world.get::<&Position>(entity).ok().map(|p| p.0)
    }

    /// Copy of one component of a live entity.
    pub fn component<T: hecs::Component + Copy>(&self, id: EntityId) -> Option<T> {
        let entity = self.resolve(id)?;
        self.world.get::<&T>(entity).ok().map(|c| *c)
    }

    /// Live entities of one kind, in spawn order.
    pub fn live(&self, kind: EntityKind) -> Vec<LiveEntity> {
        let mut found: Vec<(SpawnOrder, LiveEntity)> = {
            let mut query = self
                .world
                .query::<(&EntityKind, &SpawnOrder, &Position, &Collider)>();
            query
                .iter()
                .filter(|(entity, (k, _, _, _))| **k == kind && !self.pending.contains(entity))
                .map(|(entity, (_, order, pos, collider))| {
                    (
                        *order,
                        LiveEntity {
                            id: entity_id(entity),
                            position: pos.0,
                            bounds: Aabb::new(pos.0, collider.half_extents),
                        },
                    )
                })
                .collect()
        };
        found.sort_by_key(|(order, _)| *order);
        found.into_iter().map(|(_, live)| live).collect()
    }

    /// Visit live entities of one kind in spawn order. The visited set is
    /// fixed before the first call, so `f` never sees entities spawned
    /// during the pass.
    pub fn for_each_live(&self, kind: EntityKind, mut f: impl FnMut(&LiveEntity)) {
        for live in self.live(kind) {
            f(&live);
        }
    }

    pub fn count(&self, kind: EntityKind) -> usize {
        self.live(kind).len()
    }

    /// Despawn everything marked by `destroy`. Returns how many were removed.
    pub fn flush(&mut self) -> usize {
        let mut removed = 0;
        for entity in self.pending.drain(..) {
            if self.world.despawn(entity).is_ok() {
                removed += 1;
            }
        }
        removed
    }

    pub(crate) fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    fn resolve(&self, id: EntityId) -> Option<Entity> {
        let entity = Entity::from_bits(id.0)?;
        (self.world.contains(entity) && !self.pending.contains(&entity)).then_some(entity)
    }
}
