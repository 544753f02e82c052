//! Combatant tags.
//!
//! [`Enemy`] marks entities the player can target; [`Player`] marks the one
//! doing the damage. Targeting uses the player's
//! [`MapPosition`](crate::components::mapposition::MapPosition) to pick the
//! nearest living enemy.

use bevy_ecs::prelude::Component;

/// An entity that can become the current enemy.
#[derive(Component, Clone, Debug, PartialEq, Eq)]
pub struct Enemy {
    /// Display name used in logs.
    pub name: String,
}

impl Enemy {
    pub fn new(name: impl Into<String>) -> Self {
        Enemy { name: name.into() }
    }
}

/// The attacking side. One per arena.
#[derive(Component, Clone, Copy, Debug)]
pub struct Player {
    /// Base damage dealt to the current enemy every tick.
    pub damage: u32,
}
