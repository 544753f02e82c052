//! Event types and observers.
//!
//! Events decouple the systems that detect something (damage dealt, a death,
//! a new target) from the code that reacts to it.
//!
//! Submodules:
//! - [`currentenemy`] – the current enemy changed
//! - [`damage`] – damage requests and the observer applying them to health
//! - [`death`] – enemy death notification and the current-enemy death handler
pub mod currentenemy;
pub mod damage;
pub mod death;
