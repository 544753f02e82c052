//! Arena systems.
//!
//! Submodules overview
//! - [`attack`] – the player hits the current enemy
//! - [`corpse`] – despawn dead enemies once their corpse timer runs out
//! - [`death`] – detect zero health and raise the death notification
//! - [`targeting`] – acquire a new current enemy, clear it on destruction
//! - [`time`] – update simulation time and delta

pub mod attack;
pub mod corpse;
pub mod death;
pub mod targeting;
pub mod time;
