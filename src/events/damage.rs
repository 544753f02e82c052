//! Damage requests.
//!
//! Systems raise a [`DamageEvent`] on a target instead of touching its
//! [`Health`] directly. The global [`apply_damage_observer`] applies it.
//! Targets that are already [`Dead`] or have no `Health` are ignored.

use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::debug;

use crate::components::health::{Dead, Health};

/// Request to remove `amount` hit points from `entity`.
#[derive(EntityEvent, Debug, Clone, Copy, PartialEq, Eq)]
pub struct DamageEvent {
    #[event_target]
    pub entity: Entity,
    pub amount: u32,
}

/// Global observer that applies [`DamageEvent`] to [`Health`].
pub fn apply_damage_observer(
    trigger: On<DamageEvent>,
    mut targets: Query<&mut Health, Without<Dead>>,
) {
    let event = trigger.event();
    let Ok(mut health) = targets.get_mut(event.entity) else {
        return;
    };
    let taken = health.apply_damage(event.amount);
    debug!(
        "{:?} took {} damage ({}/{})",
        event.entity, taken, health.current, health.max
    );
}
