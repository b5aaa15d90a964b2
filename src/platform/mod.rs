//! Platform abstraction layer
//!
//! Glue a driver needs around the simulation:
//! - Key to input event mapping
//! - Fixed-step timing from measured frame deltas

pub mod input;
pub mod time;

pub use input::{Key, map_key};
pub use time::FixedStepClock;
