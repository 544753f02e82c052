//! Player attack system.
//!
//! Every step the player hits whatever the
//! [`CurrentEnemy`](crate::resources::currentenemy::CurrentEnemy) guard is
//! holding. Damage is rolled around [`Player::damage`] with the configured
//! spread and delivered as a [`DamageEvent`].

use bevy_ecs::prelude::*;

use crate::components::enemy::Player;
use crate::components::health::{Dead, Health};
use crate::events::damage::DamageEvent;
use crate::resources::currentenemy::CurrentEnemy;
use crate::resources::gameconfig::GameConfig;
use crate::resources::rng::ArenaRng;

pub fn attack_current_enemy_system(
    current: Res<CurrentEnemy>,
    players: Query<&Player>,
    targets: Query<(), (With<Health>, Without<Dead>)>,
    config: Option<Res<GameConfig>>,
    mut rng: ResMut<ArenaRng>,
    mut commands: Commands,
) {
    let Some(target) = current.get() else {
        return;
    };
    if !targets.contains(target) {
        return;
    }
    let spread = config.map(|c| c.damage_spread).unwrap_or(0.0);
    for player in players.iter() {
        let rolled = player.damage as f32 * rng.spread(spread);
        let amount = rolled.round().max(1.0) as u32;
        commands.trigger(DamageEvent {
            entity: target,
            amount,
        });
    }
}
