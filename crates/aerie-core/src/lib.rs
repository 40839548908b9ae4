//! Core types and definitions for the AERIE simulation.
//!
//! This crate defines the vocabulary shared across all other crates:
//! components, control signals, effects, snapshots, constants, and errors.
//! It has no dependency on any runtime framework.

pub mod commands;
pub mod components;
pub mod constants;
pub mod enums;
pub mod error;
pub mod events;
pub mod state;
pub mod types;
