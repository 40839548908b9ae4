//! Simulation engine.
//!
//! `Simulation` owns every piece of mutable game state: the entity registry,
//! the player, the resource meters and the scenery. A frame driver calls
//! `advance` once per frame; nothing else mutates the state.

use glam::DVec3;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use aerie_core::commands::ControlSignal;
use aerie_core::components::PlayerState;
use aerie_core::constants::*;
use aerie_core::enums::EntityKind;
use aerie_core::error::SimError;
use aerie_core::events::{Effect, TickEffects};
use aerie_core::state::{SaveState, WorldSnapshot};
use aerie_core::types::{EntityId, SimTime};

use crate::meters::ResourceMeters;
use crate::persistence;
use crate::registry::{Blueprint, EntityRegistry};
use crate::systems;
use crate::systems::scenery::Scenery;
use crate::world_setup;

/// Configuration for starting a new simulation.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// RNG seed for the decorative layout. Same seed = same world.
    pub seed: u64,
    /// Flight energy ceiling.
    pub max_energy: f64,
    pub spawn_position: DVec3,
    /// Spawn the default level. Off gives an empty arena.
    pub populate_world: bool,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            max_energy: DEFAULT_MAX_ENERGY,
            spawn_position: DVec3::from_array(PLAYER_SPAWN),
            populate_world: true,
        }
    }
}

impl SimConfig {
    pub fn validate(&self) -> Result<(), SimError> {
        if !self.max_energy.is_finite() || self.max_energy <= 0.0 {
            return Err(SimError::InvalidConfig("max_energy must be positive and finite"));
        }
        if !self.spawn_position.is_finite() {
            return Err(SimError::InvalidConfig("spawn_position must be finite"));
        }
        Ok(())
    }
}

/// The simulation. Owns the registry and all sim state.
pub struct Simulation {
    registry: EntityRegistry,
    player: PlayerState,
    meters: ResourceMeters,
    scenery: Scenery,
    time: SimTime,
    /// Effects raised between ticks or during the current tick.
    effects: Vec<Effect>,
}

impl Simulation {
    /// Create a simulation, populating the default level when configured to.
    pub fn new(config: SimConfig) -> Result<Self, SimError> {
        if let Err(e) = config.validate() {
            tracing::warn!(error = %e, "rejected simulation config");
            return Err(e);
        }

        let mut sim = Self {
            registry: EntityRegistry::new(),
            player: PlayerState::at(config.spawn_position),
            meters: ResourceMeters::new(config.max_energy),
            scenery: Scenery::default(),
            time: SimTime::default(),
            effects: Vec::new(),
        };

        if config.populate_world {
            let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
            sim.scenery = world_setup::build_scenery(&mut rng);
            for blueprint in world_setup::default_layout() {
                sim.spawn(blueprint);
            }
            tracing::info!(
                seed = config.seed,
                drones = sim.registry.count(EntityKind::Drone),
                pillars = sim.scenery.pillars.len(),
                "world populated"
            );
        }

        Ok(sim)
    }

    /// Advance the simulation by `dt` seconds.
    ///
    /// Order: locomotion, drone AI, control-signal fire, combat, pickups,
    /// scenery, cleanup, meters. A non-positive or non-finite `dt` is a
    /// no-op returning no effects.
    pub fn advance(&mut self, signal: &ControlSignal, dt: f64) -> TickEffects {
        if !dt.is_finite() || dt <= 0.0 {
            return TickEffects::default();
        }

        // Stale removals from `destroy` calls between ticks.
        systems::cleanup::run(&mut self.registry);

        // 1. Player locomotion
        systems::locomotion::run(
            &mut self.player,
            &mut self.meters,
            signal,
            dt,
            &mut self.effects,
        );
        // 2. Drone AI against the updated player position
        systems::drone_ai::run(&mut self.registry, self.player.position, dt);
        // 3. Fire from the control signal
        if signal.fire {
            let aim = aim_direction(signal.aim);
            self.fire(self.player.position + aim * MUZZLE_OFFSET, aim);
        }
        // 4. Bullets, drones, boss
        systems::combat::run(&mut self.registry, &mut self.meters, dt, &mut self.effects);
        // 5. Powerups and checkpoints
        systems::pickups::run(
            &mut self.registry,
            &mut self.meters,
            &self.player,
            &mut self.effects,
        );
        // 6. Scenery
        systems::scenery::run(&mut self.scenery, dt);
        // 7. Cleanup
        systems::cleanup::run(&mut self.registry);

        self.time.advance(dt);
        self.effects.push(Effect::Meters(self.meters.ratios()));

        TickEffects {
            effects: std::mem::take(&mut self.effects),
        }
    }

    /// Spawn a bullet at `origin` travelling along `aim`.
    /// A zero aim fires along +z; a non-finite origin fires from the player.
    pub fn fire(&mut self, origin: DVec3, aim: DVec3) -> EntityId {
        let origin = if origin.is_finite() {
            origin
        } else {
            tracing::warn!("non-finite fire origin, using player position");
            self.player.position
        };
        let id = self.spawn(Blueprint::bullet(origin, aim_direction(aim)));
        tracing::trace!(bullet = id.0, "fired");
        id
    }

    /// Add an entity. The boss is a singleton: spawning one while another is
    /// alive returns the existing boss.
    pub fn spawn(&mut self, blueprint: Blueprint) -> EntityId {
        if blueprint.kind() == EntityKind::Boss {
            if let Some(existing) = self.registry.live(EntityKind::Boss).first() {
                tracing::warn!(boss = existing.id.0, "boss already alive");
                return existing.id;
            }
            self.meters.reset_boss();
        }

        let id = self.registry.spawn(blueprint);
        self.effects.push(Effect::EntitySpawned {
            id,
            kind: blueprint.kind(),
            position: blueprint.position(),
        });
        id
    }

    /// Remove an entity. Unknown or already-destroyed ids are a no-op
    /// returning `false`. Removing the boss empties its meter.
    pub fn destroy(&mut self, id: EntityId) -> bool {
        match self.registry.destroy(id) {
            Some(effect) => {
                if let Effect::EntityDestroyed {
                    kind: EntityKind::Boss,
                    ..
                } = effect
                {
                    self.meters.clear_boss();
                }
                self.effects.push(effect);
                true
            }
            None => false,
        }
    }

    pub fn export_state(&self) -> SaveState {
        persistence::export_state(&self.player)
    }

    /// Restore a saved state. Invalid data is rejected and nothing changes.
    pub fn import_state(&mut self, state: &SaveState) -> Result<(), SimError> {
        persistence::import_state(&mut self.player, state).inspect_err(|e| {
            tracing::warn!(error = %e, "rejected state import");
        })
    }

    /// Build the presentation read model.
    pub fn snapshot(&self) -> WorldSnapshot {
        systems::snapshot::build_snapshot(
            &self.registry,
            &self.player,
            &self.meters,
            &self.scenery,
            &self.time,
        )
    }

    pub fn player(&self) -> &PlayerState {
        &self.player
    }

    pub fn meters(&self) -> &ResourceMeters {
        &self.meters
    }

    pub fn registry(&self) -> &EntityRegistry {
        &self.registry
    }

    pub fn time(&self) -> SimTime {
        self.time
    }

    /// Direct meter access for tests that need a specific starting value.
    #[cfg(test)]
    pub fn meters_mut(&mut self) -> &mut ResourceMeters {
        &mut self.meters
    }
}

fn aim_direction(aim: DVec3) -> DVec3 {
    if aim.is_finite() {
        aim.try_normalize().unwrap_or(DVec3::Z)
    } else {
        DVec3::Z
    }
}
