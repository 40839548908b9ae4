//! ECS components for hecs entities, plus the player's kinematic state.
//!
//! Components are plain data structs with no methods.
//! Game logic lives in systems, not components.

use glam::DVec3;
use serde::{Deserialize, Serialize};

use crate::constants::{GROUND_HEIGHT, GROUND_SETTLE_TOLERANCE};
use crate::enums::MotionState;

/// World-space position of an entity's centre.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position(pub DVec3);

/// Axis-aligned collision box around the entity's position.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Collider {
    pub half_extents: DVec3,
}

/// Monotonic spawn sequence number. Defines iteration order within a kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SpawnOrder(pub u64);

/// Enemy drone that homes on the player.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Drone {
    /// Pursuit speed (units/s).
    pub speed: f64,
}

/// Player projectile.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Bullet {
    /// Unit travel direction.
    pub direction: DVec3,
    pub speed: f64,
    /// Seconds left before the bullet expires.
    pub lifetime_secs: f64,
}

/// Health pickup.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Powerup {
    pub heal: f64,
}

/// Re-triggerable checkpoint marker.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Checkpoint;

/// Marks the boss. Its health lives in the resource meters.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Boss;

/// Decorative pillar standing on the ground plane. Never collides.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Pillar {
    /// Centre of the pillar (half its height above the ground plane).
    pub position: DVec3,
    pub height: f64,
}

/// Decorative ferris wheel spinning about its z axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FerrisWheel {
    pub position: DVec3,
    /// Degrees in [0, 360).
    pub rotation_deg: f64,
}

/// Player kinematics. Health and energy live in the resource meters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlayerState {
    pub position: DVec3,
    pub vertical_velocity: f64,
    pub motion: MotionState,
}

impl PlayerState {
    /// Player standing at `position`, snapped onto the ground when close to it.
    pub fn at(position: DVec3) -> Self {
        let mut state = Self {
            position,
            vertical_velocity: 0.0,
            motion: MotionState::Grounded,
        };
        state.place(position);
        state
    }

    /// Teleport, keeping the grounded invariant: anything at or below settle
    /// height lands on the ground, anything above starts falling from rest.
    pub fn place(&mut self, position: DVec3) {
        self.position = position;
        self.vertical_velocity = 0.0;
        if position.y <= GROUND_HEIGHT + GROUND_SETTLE_TOLERANCE {
            self.position.y = GROUND_HEIGHT;
            self.motion = MotionState::Grounded;
        } else {
            self.motion = MotionState::Falling;
        }
    }

    pub fn on_ground(&self) -> bool {
        self.motion == MotionState::Grounded
    }
}
