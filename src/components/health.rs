//! Hit points and the death marker.
//!
//! [`Health`] is reduced by [`DamageEvent`](crate::events::damage::DamageEvent)
//! and never underflows. Once `current` reaches zero the
//! [`death_system`](crate::systems::death::death_system) inserts [`Dead`] and
//! raises [`EnemyDied`](crate::events::death::EnemyDied) exactly once.

use bevy_ecs::prelude::Component;

#[derive(Component, Clone, Copy, Debug, PartialEq, Eq)]
pub struct Health {
    pub current: u32,
    pub max: u32,
}

impl Health {
    /// Full health.
    pub fn new(max: u32) -> Self {
        Health { current: max, max }
    }

    /// Subtract `amount`, saturating at zero. Returns the damage actually taken.
    pub fn apply_damage(&mut self, amount: u32) -> u32 {
        let taken = amount.min(self.current);
        self.current -= taken;
        taken
    }

    pub fn is_dead(&self) -> bool {
        self.current == 0
    }

    /// Remaining health in `[0, 1]`.
    pub fn fraction(&self) -> f32 {
        if self.max == 0 {
            return 0.0;
        }
        self.current as f32 / self.max as f32
    }
}

/// Tag inserted once an entity's death has been handled.
#[derive(Component, Clone, Copy, Debug)]
pub struct Dead;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_health_new_is_full() {
        let h = Health::new(30);
        assert_eq!(h.current, 30);
        assert_eq!(h.max, 30);
        assert!(!h.is_dead());
    }

    #[test]
    fn test_apply_damage_reduces_health() {
        let mut h = Health::new(30);
        assert_eq!(h.apply_damage(12), 12);
        assert_eq!(h.current, 18);
    }

    #[test]
    fn test_apply_damage_saturates_at_zero() {
        let mut h = Health::new(10);
        assert_eq!(h.apply_damage(25), 10);
        assert_eq!(h.current, 0);
        assert!(h.is_dead());
        assert_eq!(h.apply_damage(5), 0);
        assert_eq!(h.current, 0);
    }

    #[test]
    fn test_fraction() {
        let mut h = Health::new(40);
        h.apply_damage(10);
        assert!((h.fraction() - 0.75).abs() < 1e-6);
        assert_eq!(Health::new(0).fraction(), 0.0);
    }
}
