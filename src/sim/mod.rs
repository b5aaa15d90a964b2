//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Physics advances one fixed step per tick
//! - Seeded RNG only
//! - Stable iteration order (pipes in spawn order)
//! - No rendering or platform dependencies

pub mod autopilot;
pub mod bird;
pub mod collision;
pub mod pipe;
pub mod snapshot;
pub mod state;
pub mod tick;

pub use bird::Bird;
pub use collision::Rect;
pub use pipe::{FieldStep, Pipe, PipeField};
pub use snapshot::{BirdPose, PipeView, Playfield, Snapshot};
pub use state::{CrashCause, GameEvent, GamePhase, GameState, run_seed};
pub use tick::{InputEvent, TickInput, tick};
