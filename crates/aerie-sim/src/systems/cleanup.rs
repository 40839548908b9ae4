//! Cleanup system: despawns everything destroyed during the tick.

use crate::registry::EntityRegistry;

pub fn run(registry: &mut EntityRegistry) {
    let removed = registry.flush();
    if removed > 0 {
        tracing::trace!(removed, "despawned destroyed entities");
    }
}
