//! Fundamental geometric and simulation types.

use glam::DVec3;
use serde::{Deserialize, Serialize};

/// Stable identity of a registry entity.
///
/// Derived from the registry's generational handle, so an id is never
/// handed out twice while the entity it names is alive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EntityId(pub u64);

/// Axis-aligned bounding box.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    pub center: DVec3,
    pub half_extents: DVec3,
}

/// Simulation time tracking.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct SimTime {
    /// Number of completed (non-empty) ticks.
    pub tick: u64,
    /// Elapsed simulation time in seconds.
    pub elapsed_secs: f64,
}

impl Aabb {
    pub fn new(center: DVec3, half_extents: DVec3) -> Self {
        Self {
            center,
            half_extents,
        }
    }

    pub fn min(&self) -> DVec3 {
        self.center - self.half_extents
    }

    pub fn max(&self) -> DVec3 {
        self.center + self.half_extents
    }

    /// Overlap test. Touching faces count as overlapping.
    pub fn intersects(&self, other: &Aabb) -> bool {
        let delta = (self.center - other.center).abs();
        let reach = self.half_extents + other.half_extents;
        delta.cmple(reach).all()
    }

    /// Same box grown by `margin` on every side.
    pub fn expanded(&self, margin: DVec3) -> Aabb {
        Aabb::new(self.center, self.half_extents + margin)
    }

    /// Whether the segment `from -> to` passes through this box (slab method).
    pub fn intersects_segment(&self, from: DVec3, to: DVec3) -> bool {
        let dir = to - from;
        let (lo, hi) = (self.min(), self.max());
        let mut t_enter = 0.0_f64;
        let mut t_exit = 1.0_f64;

        for axis in 0..3 {
            let (o, d) = (from[axis], dir[axis]);
            if d.abs() < f64::EPSILON {
                if o < lo[axis] || o > hi[axis] {
                    return false;
                }
                continue;
            }
            let mut t0 = (lo[axis] - o) / d;
            let mut t1 = (hi[axis] - o) / d;
            if t0 > t1 {
                std::mem::swap(&mut t0, &mut t1);
            }
            t_enter = t_enter.max(t0);
            t_exit = t_exit.min(t1);
            if t_enter > t_exit {
                return false;
            }
        }
        true
    }
}

impl SimTime {
    /// Advance by one tick of `dt` seconds.
    pub fn advance(&mut self, dt: f64) {
        self.tick += 1;
        self.elapsed_secs += dt;
    }
}
