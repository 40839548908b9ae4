//! Per-tick systems.
//!
//! Systems are plain functions over the registry, the player and the meters.
//! They do not own state. Effects are appended to the caller's buffer.

pub mod cleanup;
pub mod combat;
pub mod drone_ai;
pub mod locomotion;
pub mod pickups;
pub mod scenery;
pub mod snapshot;
