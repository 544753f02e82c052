//! enemywatch library.
//!
//! Exposes the current-enemy guard together with the components, events,
//! resources and systems of the headless arena, for integration tests and
//! reuse.

pub mod arena;
pub mod components;
pub mod events;
pub mod resources;
pub mod systems;
