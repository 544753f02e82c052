//! Enemy death notification and the current-enemy death handler.
//!
//! [`EnemyDied`] is an entity event raised on an enemy by the
//! [`death_system`](crate::systems::death::death_system). The
//! [`CurrentEnemy`] guard subscribes [`handle_enemy_death`] to it, scoped to
//! the enemy it is tracking, via
//! [`DeathNotifications`](crate::resources::currentenemy::DeathNotifications).
//!
//! # Example
//!
//! ```ignore
//! // Only the current enemy's observer runs:
//! world.trigger(EnemyDied { entity: goblin });
//! ```

use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::{debug, info};

use crate::components::enemy::Enemy;
use crate::events::currentenemy::CurrentEnemyChanged;
use crate::resources::currentenemy::CurrentEnemy;
use crate::resources::stats::ArenaStats;

/// Raised on an enemy when its health reaches zero.
#[derive(EntityEvent, Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnemyDied {
    /// The enemy that died.
    #[event_target]
    pub entity: Entity,
}

/// Death handler registered on the current enemy.
///
/// Counts the kill and clears the guard, which revokes this very
/// subscription. Deaths of entities the guard no longer tracks are ignored.
pub fn handle_enemy_death(
    trigger: On<EnemyDied>,
    mut current: ResMut<CurrentEnemy>,
    stats: Option<ResMut<ArenaStats>>,
    enemies: Query<&Enemy>,
    mut commands: Commands,
) {
    let dead = trigger.event().entity;
    if !current.clear_if_current(dead, &mut commands) {
        debug!("Ignoring death of {:?}: not the current enemy", dead);
        return;
    }
    if let Some(mut stats) = stats {
        stats.current_enemy_kills += 1;
    }
    let name = enemies
        .get(dead)
        .map(|e| e.name.as_str())
        .unwrap_or("<unnamed>");
    info!("Current enemy {} ({:?}) died", name, dead);
    commands.trigger(CurrentEnemyChanged {
        previous: Some(dead),
        current: None,
    });
}
