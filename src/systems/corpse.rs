//! Corpse cleanup system.
//!
//! Counts down [`Corpse`](crate::components::corpse::Corpse) timers and
//! despawns dead enemies once they run out. The despawn is what the
//! destruction trigger in [`crate::systems::targeting`] reacts to.

use bevy_ecs::prelude::*;

use crate::components::corpse::Corpse;
use crate::resources::worldtime::WorldTime;

/// Decrements corpse timers and despawns entities when they reach zero.
pub fn corpse_system(
    world_time: Res<WorldTime>,
    mut query: Query<(Entity, &mut Corpse)>,
    mut commands: Commands,
) {
    let dt = world_time.delta; // delta is already scaled by time_scale
    for (entity, mut corpse) in query.iter_mut() {
        corpse.remaining -= dt;
        if corpse.remaining <= 0.0 {
            commands.entity(entity).try_despawn();
        }
    }
}
