//! Fixed timestep simulation tick
//!
//! Core game loop that advances a session by one step. Inputs collected
//! between ticks are applied at the start of the tick they arrive in.

use serde::{Deserialize, Serialize};

use super::state::{GameEvent, GamePhase, GameState};

/// A discrete input delivered by the driver
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InputEvent {
    Jump,
    Restart,
    Quit,
}

/// Input commands for a single tick (deterministic)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TickInput {
    /// Flap (only while playing)
    pub jump: bool,
    /// Start a new run (only after game over)
    pub restart: bool,
    /// End the session
    pub quit: bool,
}

impl TickInput {
    /// Fold the events queued since the last tick
    pub fn from_events(events: impl IntoIterator<Item = InputEvent>) -> Self {
        let mut input = Self::default();
        for event in events {
            input.push(event);
        }
        input
    }

    pub fn push(&mut self, event: InputEvent) {
        match event {
            InputEvent::Jump => self.jump = true,
            InputEvent::Restart => self.restart = true,
            InputEvent::Quit => self.quit = true,
        }
    }

    pub fn jump() -> Self {
        Self {
            jump: true,
            ..Default::default()
        }
    }

    pub fn restart() -> Self {
        Self {
            restart: true,
            ..Default::default()
        }
    }
}

/// Advance the game state by one tick
///
/// `dt` is the wall time the tick represents; it drives the countdown and
/// the pipe spawn cadence. Bird and pipe motion is per tick.
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) -> Vec<GameEvent> {
    let mut events = Vec::new();

    if state.exit_requested {
        return events;
    }
    if input.quit {
        state.exit_requested = true;
        log::info!("Quit requested (run {}, score {})", state.run_index, state.score);
        events.push(GameEvent::QuitRequested);
        return events;
    }

    match state.phase {
        GamePhase::Countdown => {
            state.time_ticks += 1;

            // Accumulated dt drifts; less than half a tick left counts as done
            let snap = dt * 0.5;
            let before = state.countdown_remaining() - snap;
            state.countdown_elapsed += dt;
            let after = state.countdown_remaining() - snap;

            if after <= 0.0 {
                state.phase = GamePhase::Playing;
                log::info!("Run {} started", state.run_index);
                events.push(GameEvent::RunStarted);
            } else if after.ceil() < before.ceil() {
                events.push(GameEvent::CountdownStep {
                    remaining: after.ceil() as u32,
                });
            }
        }

        GamePhase::Playing => {
            state.time_ticks += 1;

            if input.jump {
                state.bird.jump();
                events.push(GameEvent::Jumped);
            }

            state.bird.step();

            let step = state.field.step(dt, state.bird.pos.x);
            if step.spawned {
                events.push(GameEvent::PipeSpawned);
            }
            if step.score_delta > 0 {
                state.score += step.score_delta;
                log::debug!("Score {}", state.score);
                events.push(GameEvent::Scored { score: state.score });
            }

            if let Some(cause) = state.crash_cause() {
                state.phase = GamePhase::GameOver;
                log::info!(
                    "Run {} over: {:?} at tick {}, score {}",
                    state.run_index,
                    cause,
                    state.time_ticks,
                    state.score
                );
                events.push(GameEvent::Crashed { cause });
            }
        }

        GamePhase::GameOver => {
            if input.restart {
                state.restart();
                events.push(GameEvent::Restarted);
            }
        }
    }

    events
}
