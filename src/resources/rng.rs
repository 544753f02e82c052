//! Seeded random source shared by the arena systems.
//!
//! All randomness goes through this resource so a run is reproducible from
//! its seed.

use bevy_ecs::prelude::Resource;

#[derive(Resource, Debug, Clone)]
pub struct ArenaRng(pub fastrand::Rng);

impl ArenaRng {
    pub fn with_seed(seed: u64) -> Self {
        ArenaRng(fastrand::Rng::with_seed(seed))
    }

    /// Uniform factor in `[1 - spread, 1 + spread)`.
    pub fn spread(&mut self, spread: f32) -> f32 {
        1.0 - spread + 2.0 * spread * self.0.f32()
    }
}
