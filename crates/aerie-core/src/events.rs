//! Presentation-facing effects produced by one tick.
//!
//! The simulation never renders, plays audio, or waits on timers. Everything
//! the presentation layer should show is described here and handed back from
//! `advance`.

use glam::{DVec2, DVec3};
use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::state::MeterRatios;
use crate::types::EntityId;

/// A single presentation-facing event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Effect {
    /// An entity entered the registry.
    EntitySpawned {
        id: EntityId,
        kind: EntityKind,
        position: DVec3,
    },
    /// An entity left the registry (last known position).
    EntityDestroyed {
        id: EntityId,
        kind: EntityKind,
        position: DVec3,
    },
    /// Transient on-screen text.
    Text(TextNotification),
    /// Transient visual effect; the presenter owns its timer.
    Visual(VisualEffect),
    /// Meter fill ratios after all mutations of the tick.
    Meters(MeterRatios),
}

/// Transient text shown for `duration_secs`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextNotification {
    pub text: String,
    pub color: TextColor,
    /// Normalized screen coordinates.
    pub screen_position: DVec2,
    pub duration_secs: f64,
}

/// Fire-and-forget visual, removed by the presenter after `duration_secs`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VisualEffect {
    pub kind: VisualKind,
    pub position: DVec3,
    pub scale: f64,
    pub duration_secs: f64,
}

/// Everything one tick asks the presentation layer to do.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TickEffects {
    pub effects: Vec<Effect>,
}

impl TickEffects {
    pub fn is_empty(&self) -> bool {
        self.effects.is_empty()
    }

    /// Meter snapshot of the tick, if the tick ran.
    pub fn meters(&self) -> Option<&MeterRatios> {
        self.effects.iter().rev().find_map(|e| match e {
            Effect::Meters(m) => Some(m),
            _ => None,
        })
    }

    pub fn texts(&self) -> impl Iterator<Item = &TextNotification> {
        self.effects.iter().filter_map(|e| match e {
            Effect::Text(t) => Some(t),
            _ => None,
        })
    }

    pub fn visuals(&self) -> impl Iterator<Item = &VisualEffect> {
        self.effects.iter().filter_map(|e| match e {
            Effect::Visual(v) => Some(v),
            _ => None,
        })
    }

    /// Ids and kinds destroyed this tick, in resolution order.
    pub fn destroyed(&self) -> impl Iterator<Item = (EntityId, EntityKind)> + '_ {
        self.effects.iter().filter_map(|e| match e {
            Effect::EntityDestroyed { id, kind, .. } => Some((*id, *kind)),
            _ => None,
        })
    }
}
