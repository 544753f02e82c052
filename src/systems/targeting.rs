//! Target acquisition and the destruction trigger for the current enemy.
//!
//! - [`acquire_target_system`] fills an empty
//!   [`CurrentEnemy`](crate::resources::currentenemy::CurrentEnemy) guard with
//!   the living enemy nearest to the player.
//! - [`observe_enemy_despawned`] is the global observer that clears the guard
//!   when the enemy it references is destroyed.
//!
//! Both go through the guard's `set`/`clear` operations, never through its
//! fields, so the one-subscription-per-reference invariant is kept.

use bevy_ecs::lifecycle::Despawn;
use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::info;

use crate::components::enemy::{Enemy, Player};
use crate::components::health::{Dead, Health};
use crate::components::mapposition::MapPosition;
use crate::events::currentenemy::CurrentEnemyChanged;
use crate::resources::currentenemy::CurrentEnemy;
use crate::resources::stats::ArenaStats;

/// Pick the nearest living enemy when nothing is targeted.
///
/// Ties on distance go to the lowest entity id, so runs are
/// reproducible. Does nothing while the guard holds an enemy or when there
/// is no player.
pub fn acquire_target_system(
    mut current: ResMut<CurrentEnemy>,
    mut stats: ResMut<ArenaStats>,
    players: Query<&MapPosition, With<Player>>,
    enemies: Query<(Entity, &MapPosition), (With<Enemy>, With<Health>, Without<Dead>)>,
    mut commands: Commands,
) {
    if current.is_set() {
        return;
    }
    let Some(origin) = players.iter().next() else {
        return;
    };

    let nearest = enemies
        .iter()
        .map(|(entity, pos)| (entity, origin.distance_sq(pos)))
        .min_by(|(ea, da), (eb, db)| da.total_cmp(db).then_with(|| ea.cmp(eb)));
    let Some((target, _)) = nearest else {
        return;
    };

    if current.set(target, &mut commands) {
        stats.retargets += 1;
        commands.trigger(CurrentEnemyChanged {
            previous: None,
            current: Some(target),
        });
    }
}

/// Clear the guard when the enemy it references is despawned.
///
/// Destroying any other enemy leaves the guard alone.
pub fn observe_enemy_despawned(
    trigger: On<Despawn, Enemy>,
    mut current: ResMut<CurrentEnemy>,
    mut commands: Commands,
) {
    let destroyed = trigger.event().entity;
    if current.clear_if_current(destroyed, &mut commands) {
        info!("Current enemy {:?} destroyed", destroyed);
        commands.trigger(CurrentEnemyChanged {
            previous: Some(destroyed),
            current: None,
        });
    }
}
