//! Pipes and the scrolling field that owns them
//!
//! A pipe is a pair of barriers with an opening between them. The field
//! spawns pipes at the right edge on a time cadence, scrolls them left one
//! step per tick, scores them as the bird passes, and drops them once they
//! have fully left the screen.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::bird::Bird;
use super::collision::Rect;
use crate::config::GameConfig;

/// A single pipe pair
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pipe {
    /// Left edge
    pub x: f32,
    pub width: f32,
    /// Fixed at spawn
    pub gap_center_y: f32,
    pub gap_half_height: f32,
    /// Set once, the first tick the pipe's left edge is behind the bird
    pub scored: bool,
}

impl Pipe {
    pub fn new(x: f32, gap_center_y: f32, config: &GameConfig) -> Self {
        Self {
            x,
            width: config.pipe_width,
            gap_center_y,
            gap_half_height: config.gap_half_height(),
            scored: false,
        }
    }

    #[inline]
    pub fn gap_top(&self) -> f32 {
        self.gap_center_y - self.gap_half_height
    }

    #[inline]
    pub fn gap_bottom(&self) -> f32 {
        self.gap_center_y + self.gap_half_height
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn step(&mut self, speed: f32) {
        self.x -= speed;
    }

    /// Upper and lower barriers; the only collidable surfaces of a pipe
    pub fn barriers(&self, field_height: f32) -> [Rect; 2] {
        [
            Rect::from_span(self.x, self.width, 0.0, self.gap_top()),
            Rect::from_span(self.x, self.width, self.gap_bottom(), field_height),
        ]
    }

    pub fn collides_with(&self, bird: &Bird, field_height: f32) -> bool {
        let hitbox = bird.hitbox();
        self.barriers(field_height)
            .iter()
            .any(|barrier| barrier.intersects(&hitbox))
    }

    /// Right edge at or left of the field's left boundary
    pub fn is_off_screen(&self) -> bool {
        self.right() <= 0.0
    }

    /// Returns 1 the first time the pipe is behind `bird_x`, 0 otherwise
    pub fn try_score(&mut self, bird_x: f32) -> u32 {
        if !self.scored && self.x < bird_x {
            self.scored = true;
            1
        } else {
            0
        }
    }
}

/// Outcome of one field step
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FieldStep {
    /// Pipes scored this tick (normally 0 or 1, never assumed)
    pub score_delta: u32,
    pub spawned: bool,
}

/// Ordered collection of live pipes (creation order = left to right)
#[derive(Debug, Clone)]
pub struct PipeField {
    pipes: Vec<Pipe>,
    since_spawn: f32,
    spawn_period: f32,
    spawn_x: f32,
    speed: f32,
    field_height: f32,
    gap_range: (f32, f32),
    pipe_width: f32,
    gap_half_height: f32,
    rng: Pcg32,
}

impl PipeField {
    /// Empty field. The spawn timer starts full, so the first playing tick
    /// spawns a pipe at the right edge.
    pub fn new(config: &GameConfig, seed: u64) -> Self {
        Self {
            pipes: Vec::new(),
            since_spawn: config.spawn_period,
            spawn_period: config.spawn_period,
            spawn_x: config.field_width,
            speed: config.pipe_speed,
            field_height: config.field_height,
            gap_range: config.gap_center_range(),
            pipe_width: config.pipe_width,
            gap_half_height: config.gap_half_height(),
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    pub fn pipes(&self) -> &[Pipe] {
        &self.pipes
    }

    pub fn len(&self) -> usize {
        self.pipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pipes.is_empty()
    }

    /// Append a pipe at the right of every live pipe
    pub fn push(&mut self, pipe: Pipe) {
        self.pipes.push(pipe);
    }

    /// Spawn a pipe at the right edge with a random gap inside the safe range
    pub fn spawn(&mut self) {
        let (lo, hi) = self.gap_range;
        let gap_center_y = self.rng.random_range(lo..=hi);
        log::debug!("Pipe spawned, gap centre {gap_center_y:.1}");
        self.pipes.push(Pipe {
            x: self.spawn_x,
            width: self.pipe_width,
            gap_center_y,
            gap_half_height: self.gap_half_height,
            scored: false,
        });
    }

    /// Advance one tick: spawn, scroll, score, prune (in that order)
    pub fn step(&mut self, dt: f32, bird_x: f32) -> FieldStep {
        let mut result = FieldStep::default();

        self.since_spawn += dt;
        if self.since_spawn > self.spawn_period {
            self.spawn();
            self.since_spawn = 0.0;
            result.spawned = true;
        }

        for pipe in &mut self.pipes {
            pipe.step(self.speed);
        }

        for pipe in &mut self.pipes {
            result.score_delta += pipe.try_score(bird_x);
        }

        self.pipes.retain(|p| !p.is_off_screen());

        result
    }

    pub fn any_collision(&self, bird: &Bird) -> bool {
        self.pipes
            .iter()
            .any(|p| p.collides_with(bird, self.field_height))
    }
}
