//! Enemy AI for AERIE.
//!
//! Pure, ECS-free behaviour functions. The simulation crate gathers the
//! inputs from its world and applies the results.

pub mod homing;

pub use aerie_core as core;

#[cfg(test)]
mod tests;
