//! Read models handed to the presentation and persistence layers.

use glam::DVec3;
use serde::{Deserialize, Serialize};

use crate::components::{FerrisWheel, Pillar};
use crate::enums::MotionState;
use crate::error::SimError;
use crate::types::{EntityId, SimTime};

/// Normalized meter fills in [0, 1].
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct MeterRatios {
    pub health: f64,
    pub energy: f64,
    pub boss_health: f64,
}

/// Complete visible state for a renderer, built on demand.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WorldSnapshot {
    pub time: SimTime,
    pub player: PlayerView,
    pub meters: MeterRatios,
    pub drones: Vec<EntityView>,
    pub bullets: Vec<EntityView>,
    pub powerups: Vec<EntityView>,
    pub checkpoints: Vec<EntityView>,
    pub boss: Option<EntityView>,
    pub pillars: Vec<Pillar>,
    pub wheels: Vec<FerrisWheel>,
}

/// Player status for display.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct PlayerView {
    pub position: DVec3,
    pub vertical_velocity: f64,
    pub motion: MotionState,
    pub health: f64,
    pub energy: f64,
    pub max_energy: f64,
    pub boss_health: f64,
}

/// A live registry entity.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct EntityView {
    pub id: EntityId,
    pub position: DVec3,
    pub half_extents: DVec3,
}

/// Everything persisted between sessions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SaveState {
    pub position: DVec3,
}

impl SaveState {
    /// Structural check: every coordinate must be finite.
    pub fn validate(&self) -> Result<(), SimError> {
        if self.position.is_finite() {
            Ok(())
        } else {
            Err(SimError::NonFinitePosition {
                x: self.position.x,
                y: self.position.y,
                z: self.position.z,
            })
        }
    }

    pub fn to_json(&self) -> Result<String, SimError> {
        serde_json::to_string_pretty(self).map_err(|e| SimError::MalformedSave(e.to_string()))
    }

    /// Decode and validate a save payload.
    pub fn from_json(json: &str) -> Result<Self, SimError> {
        let state: SaveState =
            serde_json::from_str(json).map_err(|e| SimError::MalformedSave(e.to_string()))?;
        state.validate()?;
        Ok(state)
    }
}
