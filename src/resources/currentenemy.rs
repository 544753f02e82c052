//! Current enemy reference guard.
//!
//! The [`CurrentEnemy`] resource tracks which enemy the player is currently
//! engaged with. Whenever it holds an enemy it also holds exactly one death
//! subscription on that enemy: an entity-scoped observer running
//! [`handle_enemy_death`]. Clearing the reference always revokes that
//! subscription first, so no observer outlives the reference that created it.
//!
//! The subscribe/unsubscribe pair is abstracted behind [`DeathNotifications`]
//! so the guard can run against the [`World`] directly (exclusive systems,
//! tests), against [`Commands`] (regular systems and observers), or against
//! a recording double.
//!
//! # Example
//!
//! ```ignore
//! set_current_enemy(&mut world, goblin);
//! // ... goblin is destroyed ...
//! clear_current_enemy(&mut world); // unsubscribes, then forgets goblin
//! clear_current_enemy(&mut world); // no-op
//! ```
//!
//! # Related
//!
//! - [`crate::events::death`] – the death event and its handler
//! - [`crate::systems::targeting`] – picks the next enemy and reacts to despawns

use bevy_ecs::observer::Observer;
use bevy_ecs::prelude::*;
use log::debug;

use crate::events::death::handle_enemy_death;

/// Identity of one registered death handler.
///
/// `observer` is the entity carrying the handler; `enemy` is the entity it
/// watches. Unsubscribing despawns `observer`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DeathSubscription {
    pub enemy: Entity,
    pub observer: Entity,
}

/// Capability to register and revoke the death handler on an enemy.
///
/// `unsubscribe_death` must be a silent no-op when the subscription is
/// already gone (the enemy is mid-destruction, or bevy removed the observer
/// together with the watched entity).
pub trait DeathNotifications {
    fn subscribe_death(&mut self, enemy: Entity) -> DeathSubscription;
    fn unsubscribe_death(&mut self, subscription: DeathSubscription);
}

impl DeathNotifications for World {
    fn subscribe_death(&mut self, enemy: Entity) -> DeathSubscription {
        let observer = self
            .spawn(Observer::new(handle_enemy_death).with_entity(enemy))
            .id();
        // Register the observer before the caller can trigger anything.
        self.flush();
        DeathSubscription { enemy, observer }
    }

    fn unsubscribe_death(&mut self, subscription: DeathSubscription) {
        match self.get_entity_mut(subscription.observer) {
            Ok(observer) => observer.despawn(),
            Err(_) => debug!(
                "Death observer {:?} for {:?} already gone",
                subscription.observer, subscription.enemy
            ),
        }
    }
}

impl DeathNotifications for Commands<'_, '_> {
    fn subscribe_death(&mut self, enemy: Entity) -> DeathSubscription {
        let observer = self
            .spawn(Observer::new(handle_enemy_death).with_entity(enemy))
            .id();
        DeathSubscription { enemy, observer }
    }

    fn unsubscribe_death(&mut self, subscription: DeathSubscription) {
        // The observer may still vanish before the queue is applied.
        match self.get_entity(subscription.observer) {
            Ok(mut observer) => {
                observer.try_despawn();
            }
            Err(_) => debug!(
                "Death observer {:?} for {:?} already gone",
                subscription.observer, subscription.enemy
            ),
        }
    }
}

/// Reference to the enemy currently engaged, plus its death subscription.
///
/// The reference is non-owning: the guard never despawns the enemy, it only
/// reacts to its death or destruction.
#[derive(Resource, Debug, Default)]
pub struct CurrentEnemy {
    held: Option<DeathSubscription>,
}

impl CurrentEnemy {
    pub fn new() -> Self {
        Self::default()
    }

    /// The current enemy, if any.
    pub fn get(&self) -> Option<Entity> {
        self.held.map(|s| s.enemy)
    }

    /// The death subscription held for the current enemy, if any.
    pub fn subscription(&self) -> Option<DeathSubscription> {
        self.held
    }

    pub fn is_set(&self) -> bool {
        self.held.is_some()
    }

    /// Make `enemy` the current enemy.
    ///
    /// Revokes the previous subscription before registering a new one.
    /// Returns `false` without touching `notifier` when `enemy` is already
    /// current.
    pub fn set<N>(&mut self, enemy: Entity, notifier: &mut N) -> bool
    where
        N: DeathNotifications + ?Sized,
    {
        if self.get() == Some(enemy) {
            return false;
        }
        self.clear(notifier);
        let subscription = notifier.subscribe_death(enemy);
        debug!(
            "Current enemy set to {:?} (observer {:?})",
            enemy, subscription.observer
        );
        self.held = Some(subscription);
        true
    }

    /// Unsubscribe the death handler and forget the current enemy.
    ///
    /// Safe to call at any time. When nothing is held no call reaches
    /// `notifier`. Returns the enemy that was cleared.
    pub fn clear<N>(&mut self, notifier: &mut N) -> Option<Entity>
    where
        N: DeathNotifications + ?Sized,
    {
        let subscription = self.held.take()?;
        notifier.unsubscribe_death(subscription);
        debug!("Current enemy {:?} cleared", subscription.enemy);
        Some(subscription.enemy)
    }

    /// Clear only when `enemy` is the current enemy.
    pub fn clear_if_current<N>(&mut self, enemy: Entity, notifier: &mut N) -> bool
    where
        N: DeathNotifications + ?Sized,
    {
        if self.get() != Some(enemy) {
            return false;
        }
        self.clear(notifier).is_some()
    }
}

/// Clear the [`CurrentEnemy`] resource using the world as notifier.
///
/// Does nothing if the resource is missing.
pub fn clear_current_enemy(world: &mut World) -> Option<Entity> {
    if !world.contains_resource::<CurrentEnemy>() {
        return None;
    }
    world.resource_scope(|world, mut current: Mut<CurrentEnemy>| current.clear(world))
}

/// Set the [`CurrentEnemy`] resource using the world as notifier.
///
/// Inserts the resource if it is missing.
pub fn set_current_enemy(world: &mut World, enemy: Entity) -> bool {
    world.init_resource::<CurrentEnemy>();
    world.resource_scope(|world, mut current: Mut<CurrentEnemy>| current.set(enemy, world))
}
