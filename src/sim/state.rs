//! Game state and core simulation types
//!
//! One `GameState` is one session: it owns the current run's bird and pipe
//! field and replaces both wholesale on restart.

use serde::{Deserialize, Serialize};

use super::bird::Bird;
use super::pipe::PipeField;
use crate::config::{ConfigError, GameConfig};

/// Current phase of a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Pre-run countdown; bird and pipes are frozen
    Countdown,
    /// Active gameplay
    Playing,
    /// Run ended, waiting for restart or quit
    GameOver,
}

/// What ended a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CrashCause {
    Pipe,
    /// Left the top of the field
    Ceiling,
    /// Left the bottom of the field
    Floor,
}

/// Notable things that happened during a tick (for audio/HUD hooks)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Countdown crossed a whole second; `remaining` is the number to show
    CountdownStep { remaining: u32 },
    RunStarted,
    Jumped,
    PipeSpawned,
    Scored { score: u32 },
    Crashed { cause: CrashCause },
    Restarted,
    QuitRequested,
}

/// Complete session state (deterministic for a given config and input stream)
#[derive(Debug, Clone)]
pub struct GameState {
    pub config: GameConfig,
    pub phase: GamePhase,
    pub score: u32,
    pub bird: Bird,
    pub field: PipeField,
    /// Seconds spent in the current countdown
    pub countdown_elapsed: f32,
    /// 0 for the first run, +1 per restart
    pub run_index: u32,
    /// Simulation tick counter (whole session)
    pub time_ticks: u64,
    /// Set by a quit; every later tick is a no-op
    pub exit_requested: bool,
}

impl GameState {
    /// Validate the config and set up the first run's countdown
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let bird = Bird::new(&config);
        let field = PipeField::new(&config, run_seed(config.seed, 0));
        log::info!("Session created with seed {}", config.seed);

        Ok(Self {
            config,
            phase: GamePhase::Countdown,
            score: 0,
            bird,
            field,
            countdown_elapsed: 0.0,
            run_index: 0,
            time_ticks: 0,
            exit_requested: false,
        })
    }

    /// Throw away the current run and start a fresh countdown
    pub fn restart(&mut self) {
        self.run_index += 1;
        self.phase = GamePhase::Countdown;
        self.score = 0;
        self.countdown_elapsed = 0.0;
        self.bird = Bird::new(&self.config);
        self.field = PipeField::new(&self.config, run_seed(self.config.seed, self.run_index));
        log::info!("Run {} starting", self.run_index);
    }

    /// Seconds left in the countdown (0 outside of it)
    pub fn countdown_remaining(&self) -> f32 {
        match self.phase {
            GamePhase::Countdown => (self.config.countdown_secs - self.countdown_elapsed).max(0.0),
            _ => 0.0,
        }
    }

    /// Terminal condition for the current position, if any
    ///
    /// Pipes are checked before the field bounds.
    pub fn crash_cause(&self) -> Option<CrashCause> {
        if self.field.any_collision(&self.bird) {
            Some(CrashCause::Pipe)
        } else if self.bird.pos.y < 0.0 {
            Some(CrashCause::Ceiling)
        } else if self.bird.pos.y > self.config.field_height {
            Some(CrashCause::Floor)
        } else {
            None
        }
    }

    pub fn is_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }
}

/// Per-run pipe seed: same session seed, different stream per run
pub fn run_seed(seed: u64, run_index: u32) -> u64 {
    (run_index as u64).wrapping_mul(2654435761).wrapping_add(seed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_is_counting_down() {
        let state = GameState::new(GameConfig::default()).unwrap();
        assert_eq!(state.phase, GamePhase::Countdown);
        assert_eq!(state.score, 0);
        assert!(state.field.is_empty());
        assert_eq!(state.countdown_remaining(), 3.0);
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let config = GameConfig {
            field_height: -1.0,
            ..GameConfig::default()
        };
        assert!(GameState::new(config).is_err());
    }

    #[test]
    fn test_crash_causes() {
        let mut state = GameState::new(GameConfig::default()).unwrap();
        assert_eq!(state.crash_cause(), None);

        state.bird.pos.y = -0.5;
        assert_eq!(state.crash_cause(), Some(CrashCause::Ceiling));

        state.bird.pos.y = 600.5;
        assert_eq!(state.crash_cause(), Some(CrashCause::Floor));

        // Exactly on the bounds is still inside
        state.bird.pos.y = 0.0;
        assert_eq!(state.crash_cause(), None);
        state.bird.pos.y = 600.0;
        assert_eq!(state.crash_cause(), None);
    }

    #[test]
    fn test_restart_replaces_run() {
        let mut state = GameState::new(GameConfig::default()).unwrap();
        state.phase = GamePhase::GameOver;
        state.score = 12;
        state.bird.pos.y = 900.0;
        state.field.spawn();

        state.restart();
        assert_eq!(state.phase, GamePhase::Countdown);
        assert_eq!(state.score, 0);
        assert_eq!(state.run_index, 1);
        assert_eq!(state.bird.pos.y, 300.0);
        assert!(state.field.is_empty());
    }

    #[test]
    fn test_run_seeds_differ() {
        assert_ne!(run_seed(42, 0), run_seed(42, 1));
        assert_eq!(run_seed(42, 0), 42);
    }
}
