//! Notification that the current enemy changed.
//!
//! Triggered by targeting when a new enemy is acquired and by the death and
//! destruction handlers when the guard is cleared. Carries both ends of the
//! transition so observers do not need to read
//! [`CurrentEnemy`](crate::resources::currentenemy::CurrentEnemy).
use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::info;

#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurrentEnemyChanged {
    pub previous: Option<Entity>,
    pub current: Option<Entity>,
}

/// Observer that logs target changes.
pub fn observe_current_enemy_changed(trigger: On<CurrentEnemyChanged>) {
    let event = trigger.event();
    match (event.previous, event.current) {
        (_, Some(next)) => info!("Now targeting {:?}", next),
        (Some(prev), None) => info!("Lost target {:?}", prev),
        (None, None) => {}
    }
}
