//! Game configuration
//!
//! Fixed at startup. A config is validated once before a run can start;
//! nothing here changes mid-run.

use std::path::Path;

use glam::Vec2;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;

/// Rejected configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid configuration: {field} {reason}")]
    Invalid {
        field: &'static str,
        reason: &'static str,
    },
    #[error("could not read configuration file")]
    Io(#[from] std::io::Error),
    #[error("could not parse configuration")]
    Parse(#[from] serde_json::Error),
}

impl ConfigError {
    fn invalid(field: &'static str, reason: &'static str) -> Self {
        Self::Invalid { field, reason }
    }
}

/// Tunable constants for a session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    // === Playfield ===
    pub field_width: f32,
    pub field_height: f32,

    // === Bird ===
    /// Added to vertical velocity every tick
    pub gravity: f32,
    /// Vertical velocity set by a jump (negative = upward)
    pub jump_impulse: f32,
    /// Side length of the bird's square hitbox
    pub bird_size: f32,

    // === Pipes ===
    /// Horizontal distance a pipe travels per tick
    pub pipe_speed: f32,
    pub pipe_width: f32,
    /// Full height of the opening
    pub gap_size: f32,
    /// Clearance kept between the opening and the field's top/bottom
    pub gap_margin: f32,
    /// Seconds between spawns
    pub spawn_period: f32,

    // === Timing ===
    pub countdown_secs: f32,
    /// Ticks per second
    pub tick_rate: f32,

    /// Session seed for pipe placement
    pub seed: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            field_width: FIELD_WIDTH,
            field_height: FIELD_HEIGHT,

            gravity: GRAVITY,
            jump_impulse: JUMP_IMPULSE,
            bird_size: BIRD_SIZE,

            pipe_speed: PIPE_SPEED,
            pipe_width: PIPE_WIDTH,
            gap_size: PIPE_GAP,
            gap_margin: GAP_MARGIN,
            spawn_period: SPAWN_PERIOD,

            countdown_secs: COUNTDOWN_SECS,
            tick_rate: TICK_RATE,

            seed: DEFAULT_SEED,
        }
    }
}

impl GameConfig {
    /// Default config with a different seed
    pub fn with_seed(seed: u64) -> Self {
        Self {
            seed,
            ..Self::default()
        }
    }

    /// Parse a JSON config (missing fields take defaults) and validate it
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a JSON config file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json_str(&json)?;
        log::info!("Loaded config (seed {})", config.seed);
        Ok(config)
    }

    /// Check every startup invariant
    pub fn validate(&self) -> Result<(), ConfigError> {
        positive("field_width", self.field_width)?;
        positive("field_height", self.field_height)?;
        positive("bird_size", self.bird_size)?;
        positive("pipe_speed", self.pipe_speed)?;
        positive("pipe_width", self.pipe_width)?;
        positive("gap_size", self.gap_size)?;
        positive("spawn_period", self.spawn_period)?;
        positive("tick_rate", self.tick_rate)?;

        if !self.gravity.is_finite() || self.gravity < 0.0 {
            return Err(ConfigError::invalid("gravity", "must be finite and non-negative"));
        }
        if !self.jump_impulse.is_finite() || self.jump_impulse >= 0.0 {
            return Err(ConfigError::invalid("jump_impulse", "must be finite and negative"));
        }
        if !self.gap_margin.is_finite() || self.gap_margin < 0.0 {
            return Err(ConfigError::invalid("gap_margin", "must be finite and non-negative"));
        }
        if !self.countdown_secs.is_finite() || self.countdown_secs < 0.0 {
            return Err(ConfigError::invalid("countdown_secs", "must be finite and non-negative"));
        }
        if self.gap_size + 2.0 * self.gap_margin > self.field_height {
            return Err(ConfigError::invalid(
                "gap_size",
                "plus both margins must fit inside the field height",
            ));
        }
        if self.bird_size > self.gap_size {
            return Err(ConfigError::invalid("bird_size", "must fit through the gap"));
        }
        let spawn = self.bird_spawn();
        if spawn.x + self.bird_size > self.field_width {
            return Err(ConfigError::invalid("bird_size", "must fit inside the field"));
        }

        Ok(())
    }

    /// Seconds represented by one tick
    #[inline]
    pub fn tick_dt(&self) -> f32 {
        1.0 / self.tick_rate
    }

    #[inline]
    pub fn gap_half_height(&self) -> f32 {
        self.gap_size / 2.0
    }

    /// Bird spawn point: a third of the way across, vertically centred
    pub fn bird_spawn(&self) -> Vec2 {
        Vec2::new((self.field_width / 3.0).floor(), self.field_height / 2.0)
    }

    /// Inclusive range of legal gap centres
    pub fn gap_center_range(&self) -> (f32, f32) {
        let half = self.gap_half_height();
        (
            self.gap_margin + half,
            self.field_height - self.gap_margin - half,
        )
    }
}

fn positive(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::invalid(field, "must be finite and positive"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = GameConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.gap_center_range(), (200.0, 400.0));
        assert_eq!(config.bird_spawn(), Vec2::new(133.0, 300.0));
    }

    #[test]
    fn test_rejects_gap_that_does_not_fit() {
        let config = GameConfig {
            gap_size: 400.0,
            ..GameConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Invalid { field: "gap_size", .. })
        ));
    }

    #[test]
    fn test_rejects_non_positive_dimensions() {
        let config = GameConfig {
            field_width: 0.0,
            ..GameConfig::default()
        };
        assert!(config.validate().is_err());

        let config = GameConfig {
            tick_rate: f32::NAN,
            ..GameConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_upward_gravity_and_downward_jump() {
        let config = GameConfig {
            gravity: -0.1,
            ..GameConfig::default()
        };
        assert!(config.validate().is_err());

        let config = GameConfig {
            jump_impulse: 5.0,
            ..GameConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_json_partial_override() {
        let config = GameConfig::from_json_str(r#"{ "seed": 7, "pipe_speed": 4.0 }"#).unwrap();
        assert_eq!(config.seed, 7);
        assert_eq!(config.pipe_speed, 4.0);
        assert_eq!(config.gravity, GRAVITY);
    }

    #[test]
    fn test_json_rejects_invalid_values() {
        let err = GameConfig::from_json_str(r#"{ "spawn_period": -1.0 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { field: "spawn_period", .. }));

        let err = GameConfig::from_json_str("not json").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_load_missing_file() {
        let err = GameConfig::load("/definitely/not/here.json").unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
