//! Simulation core for AERIE.
//!
//! Owns the hecs entity registry, the player and the resource meters, runs
//! the per-tick systems in a fixed order, and hands presentation effects back
//! to the caller. Completely headless, enabling deterministic testing.

pub mod engine;
pub mod meters;
pub mod persistence;
pub mod registry;
pub mod systems;
pub mod world_setup;

pub use aerie_core as core;
pub use engine::{SimConfig, Simulation};

#[cfg(test)]
mod tests;
