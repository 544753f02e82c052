//! Death detection.
//!
//! Turns "health reached zero" into a one-shot
//! [`EnemyDied`](crate::events::death::EnemyDied) notification. The enemy is
//! tagged [`Dead`] and given a [`Corpse`] timer in the same command batch,
//! so it is never reported twice.

use bevy_ecs::prelude::*;
use log::info;

use crate::components::corpse::Corpse;
use crate::components::enemy::Enemy;
use crate::components::health::{Dead, Health};
use crate::events::death::EnemyDied;
use crate::resources::gameconfig::GameConfig;
use crate::resources::stats::ArenaStats;

pub fn death_system(
    query: Query<(Entity, &Enemy, &Health), Without<Dead>>,
    config: Option<Res<GameConfig>>,
    mut stats: ResMut<ArenaStats>,
    mut commands: Commands,
) {
    let linger = config.map(|c| c.corpse_linger).unwrap_or(0.0);
    for (entity, enemy, health) in query.iter() {
        if !health.is_dead() {
            continue;
        }
        info!("{} ({:?}) was slain", enemy.name, entity);
        stats.kills += 1;
        commands.entity(entity).insert((Dead, Corpse::new(linger)));
        commands.trigger(EnemyDied { entity });
    }
}
