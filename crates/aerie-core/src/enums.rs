//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Vertical-motion state of the player.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum MotionState {
    /// Standing on the ground plane, regenerating energy.
    #[default]
    Grounded,
    /// Jet flight: fixed ascent, draining energy.
    Flying,
    /// Airborne without thrust, under gravity.
    Falling,
}

/// Closed set of entity kinds known to the simulation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntityKind {
    Player,
    Drone,
    Bullet,
    Powerup,
    Checkpoint,
    Boss,
}

/// Named palette for on-screen text notifications.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TextColor {
    Lime,
    Azure,
    Violet,
}

/// Transient visual effects rendered by the presentation layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VisualKind {
    /// Jet flame under the player while flying.
    JetFlame,
    /// Drone destruction burst.
    Explosion,
}
