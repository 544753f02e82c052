//! Running counters for an arena session.

use bevy_ecs::prelude::Resource;

#[derive(Resource, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ArenaStats {
    /// Enemies whose death was detected.
    pub kills: u32,
    /// Deaths handled by the current-enemy death handler.
    pub current_enemy_kills: u32,
    /// Times a new current enemy was acquired.
    pub retargets: u32,
    /// Simulation steps run so far.
    pub ticks: u32,
}
