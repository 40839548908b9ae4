//! AERIE headless frame driver.
//!
//! This crate wires the simulation core to a fixed-rate loop thread,
//! environment configuration and save-file persistence.

pub mod config;
pub mod game_loop;
pub mod save_load;
pub mod state;

pub use aerie_core as core;
