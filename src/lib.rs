//! Skyhop - a side-scrolling gap-threading arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (bird physics, pipes, collisions, run state)
//! - `config`: Startup configuration with validation
//! - `platform`: Input mapping and fixed-step timing for drivers
//! - `renderer`: Presentation of simulation snapshots

pub mod config;
pub mod platform;
pub mod renderer;
pub mod sim;

pub use config::{ConfigError, GameConfig};

/// Game configuration defaults
pub mod consts {
    /// Simulation rate (ticks per second)
    pub const TICK_RATE: f32 = 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;
    /// Largest frame delta accepted by the fixed-step clock (seconds)
    pub const MAX_FRAME_DT: f32 = 0.1;

    /// Playfield dimensions
    pub const FIELD_WIDTH: f32 = 400.0;
    pub const FIELD_HEIGHT: f32 = 600.0;

    /// Bird physics (per tick, positive = downward)
    pub const GRAVITY: f32 = 0.25;
    pub const JUMP_IMPULSE: f32 = -5.0;
    pub const BIRD_SIZE: f32 = 30.0;

    /// Pipe defaults
    pub const PIPE_SPEED: f32 = 3.0;
    pub const PIPE_WIDTH: f32 = 50.0;
    pub const PIPE_GAP: f32 = 150.0;
    /// Clearance between a gap edge and the top/bottom of the field
    pub const GAP_MARGIN: f32 = 125.0;
    /// Seconds between pipe spawns
    pub const SPAWN_PERIOD: f32 = 1.5;

    /// Pre-run countdown (seconds)
    pub const COUNTDOWN_SECS: f32 = 3.0;

    /// Default session seed
    pub const DEFAULT_SEED: u64 = 0x5eed_f1a9;
}
