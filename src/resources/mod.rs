//! ECS resources made available to systems.
//!
//! Overview
//! - `currentenemy` – the current enemy guard and its death subscription
//! - `gameconfig` – arena tunables loaded from an INI file
//! - `rng` – seeded random source
//! - `stats` – kill and retarget counters
//! - `worldtime` – simulation time and delta
pub mod currentenemy;
pub mod gameconfig;
pub mod rng;
pub mod stats;
pub mod worldtime;
