//! Idle/demo mode - AI plays the game
//!
//! Reads the live state and produces the input a player would have sent.
//! Used by the headless driver and as a soak test for the simulation.

use super::state::{GamePhase, GameState};
use super::tick::TickInput;

/// How far below the target the bird may sag before flapping
const TARGET_SLACK: f32 = 15.0;
/// Beyond this distance below the target, flap again while still rising
const CLIMB_DISTANCE: f32 = 40.0;
const CLIMB_VELOCITY: f32 = -3.0;

/// Vertical centre the bird should aim for right now
///
/// The gap of the first pipe whose right edge is still ahead of the bird,
/// or the middle of the field when no such pipe exists.
pub fn target_y(state: &GameState) -> f32 {
    let bird_x = state.bird.pos.x;
    state
        .field
        .pipes()
        .iter()
        .find(|p| p.right() > bird_x)
        .map(|p| p.gap_center_y)
        .unwrap_or(state.config.field_height / 2.0)
}

/// Input for the next tick
///
/// Flaps while playing, restarts after a crash.
pub fn decide(state: &GameState) -> TickInput {
    match state.phase {
        GamePhase::Countdown => TickInput::default(),
        GamePhase::Playing => {
            let bird = &state.bird;
            let center = bird.pos.y + bird.size / 2.0;
            let below = center - target_y(state);
            let min_velocity = if below > CLIMB_DISTANCE {
                CLIMB_VELOCITY
            } else {
                0.0
            };
            TickInput {
                jump: below > TARGET_SLACK && bird.velocity_y >= min_velocity,
                ..Default::default()
            }
        }
        GamePhase::GameOver => TickInput::restart(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::sim::pipe::Pipe;
    use crate::sim::state::GameEvent;
    use crate::sim::tick::tick;

    fn playing_state() -> GameState {
        let mut state = GameState::new(GameConfig::default()).unwrap();
        state.phase = GamePhase::Playing;
        state
    }

    #[test]
    fn test_targets_field_middle_without_pipes() {
        let state = playing_state();
        assert_eq!(target_y(&state), 300.0);
    }

    #[test]
    fn test_targets_next_pipe_ahead() {
        let mut state = playing_state();
        let config = state.config.clone();
        // Already behind the bird
        state.field.push(Pipe::new(40.0, 250.0, &config));
        state.field.push(Pipe::new(300.0, 380.0, &config));
        assert_eq!(target_y(&state), 380.0);
    }

    #[test]
    fn test_flaps_only_when_low_and_falling() {
        let mut state = playing_state();
        state.bird.pos.y = 350.0;
        state.bird.velocity_y = 1.0;
        assert!(decide(&state).jump);

        // Far below the gap: flap again while still rising slowly
        state.bird.velocity_y = -2.0;
        assert!(decide(&state).jump);
        state.bird.velocity_y = -4.0;
        assert!(!decide(&state).jump);

        // Just below: wait for the fall
        state.bird.pos.y = 305.0;
        state.bird.velocity_y = -0.5;
        assert!(!decide(&state).jump);
        state.bird.velocity_y = 0.5;
        assert!(decide(&state).jump);

        state.bird.pos.y = 200.0;
        state.bird.velocity_y = 4.0;
        assert!(!decide(&state).jump);
    }

    #[test]
    fn test_restarts_after_crash() {
        let mut state = playing_state();
        state.phase = GamePhase::GameOver;
        assert!(decide(&state).restart);
    }

    #[test]
    fn test_autopilot_scores() {
        let mut state = GameState::new(GameConfig::with_seed(2024)).unwrap();
        let dt = state.config.tick_dt();
        let mut best = 0;
        for _ in 0..10_000 {
            let input = decide(&state);
            for event in tick(&mut state, &input, dt) {
                if let GameEvent::Scored { score } = event {
                    best = best.max(score);
                }
            }
        }
        assert!(best >= 2, "best score {best}");
    }
}
