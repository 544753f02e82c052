//! Corpse timer for dead enemies.
//!
//! A dead enemy stays in the world for a short while so late observers can
//! still read it. The [`corpse_system`](crate::systems::corpse::corpse_system)
//! counts [`Corpse::remaining`] down and despawns the entity when it runs
//! out. Despawning is what fires the destruction trigger for the enemy.

use bevy_ecs::prelude::Component;

/// Seconds left before a dead enemy is despawned.
///
/// The countdown respects [`WorldTime::time_scale`](crate::resources::worldtime::WorldTime).
#[derive(Component, Clone, Copy, Debug)]
pub struct Corpse {
    pub remaining: f32,
}

impl Corpse {
    pub fn new(seconds: f32) -> Self {
        Corpse { remaining: seconds }
    }
}
