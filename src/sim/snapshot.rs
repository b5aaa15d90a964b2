//! Immutable scene description taken after each tick
//!
//! Renderers draw from a snapshot only; they never see the live state.

use serde::{Deserialize, Serialize};

use super::pipe::Pipe;
use super::state::{GamePhase, GameState};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BirdPose {
    pub x: f32,
    pub y: f32,
    pub size: f32,
    pub velocity_y: f32,
    /// Presentation rotation in degrees (nose up = positive)
    pub tilt_degrees: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PipeView {
    pub x: f32,
    pub width: f32,
    pub gap_center_y: f32,
    pub gap_half_height: f32,
    pub scored: bool,
}

impl From<&Pipe> for PipeView {
    fn from(pipe: &Pipe) -> Self {
        Self {
            x: pipe.x,
            width: pipe.width,
            gap_center_y: pipe.gap_center_y,
            gap_half_height: pipe.gap_half_height,
            scored: pipe.scored,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Playfield {
    pub width: f32,
    pub height: f32,
}

/// Everything a renderer needs for one frame
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub phase: GamePhase,
    pub score: u32,
    pub run_index: u32,
    /// Seconds left, only during the countdown
    pub countdown_remaining: Option<f32>,
    pub bird: BirdPose,
    /// Left to right
    pub pipes: Vec<PipeView>,
    pub playfield: Playfield,
}

impl Snapshot {
    pub fn capture(state: &GameState) -> Self {
        let bird = &state.bird;
        Self {
            phase: state.phase,
            score: state.score,
            run_index: state.run_index,
            countdown_remaining: (state.phase == GamePhase::Countdown)
                .then(|| state.countdown_remaining()),
            bird: BirdPose {
                x: bird.pos.x,
                y: bird.pos.y,
                size: bird.size,
                velocity_y: bird.velocity_y,
                tilt_degrees: bird.tilt_degrees(),
            },
            pipes: state.field.pipes().iter().map(PipeView::from).collect(),
            playfield: Playfield {
                width: state.config.field_width,
                height: state.config.field_height,
            },
        }
    }

    /// Whole number to show during the countdown (3, 2, 1); none once it has run out
    pub fn countdown_display(&self) -> Option<u32> {
        self.countdown_remaining
            .filter(|t| *t > 0.0)
            .map(|t| t.ceil() as u32)
    }
}

impl GameState {
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::capture(self)
    }
}
