//! ECS components for arena entities.
//!
//! Submodules overview:
//! - [`corpse`] – countdown before a dead enemy is despawned
//! - [`enemy`] – enemy and player tags
//! - [`health`] – hit points and the death marker
//! - [`mapposition`] – world-space position used for targeting

pub mod corpse;
pub mod enemy;
pub mod health;
pub mod mapposition;
