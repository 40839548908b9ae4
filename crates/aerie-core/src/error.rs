//! Error type shared by the simulation crates.

use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum SimError {
    /// A position with NaN or infinite components.
    NonFinitePosition { x: f64, y: f64, z: f64 },
    /// Save payload that could not be encoded or decoded.
    MalformedSave(String),
    /// Rejected simulation configuration.
    InvalidConfig(&'static str),
}

impl fmt::Display for SimError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonFinitePosition { x, y, z } => {
                write!(f, "non-finite position: ({x}, {y}, {z})")
            }
            Self::MalformedSave(reason) => write!(f, "malformed save data: {reason}"),
            Self::InvalidConfig(reason) => write!(f, "invalid config: {reason}"),
        }
    }
}

impl std::error::Error for SimError {}
