//! The player-controlled bird

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::Rect;
use crate::config::GameConfig;

/// A falling, jumping square
///
/// `pos` is the top-left corner of the hitbox. `pos.x` never changes after
/// creation; velocity only changes through gravity and jumps.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bird {
    pub pos: Vec2,
    /// Vertical speed per tick (positive = downward)
    pub velocity_y: f32,
    pub size: f32,
    gravity: f32,
    jump_impulse: f32,
}

impl Bird {
    /// Spawn at the configured anchor with zero velocity
    pub fn new(config: &GameConfig) -> Self {
        Self {
            pos: config.bird_spawn(),
            velocity_y: 0.0,
            size: config.bird_size,
            gravity: config.gravity,
            jump_impulse: config.jump_impulse,
        }
    }

    /// Reset upward speed to the jump impulse (replaces, never adds)
    pub fn jump(&mut self) {
        self.velocity_y = self.jump_impulse;
    }

    /// One fixed physics step: accelerate, then integrate
    pub fn step(&mut self) {
        self.velocity_y += self.gravity;
        self.pos.y += self.velocity_y;
    }

    pub fn hitbox(&self) -> Rect {
        Rect::new(self.pos.x, self.pos.y, self.size, self.size)
    }

    /// Nose-up/nose-down tilt for presentation (degrees, counter-clockwise)
    pub fn tilt_degrees(&self) -> f32 {
        -self.velocity_y * 2.0
    }
}
