//! Session settings
//!
//! Gathered by the host before the first serve (CLI flags, a JSON file,
//! or a dialog) and validated once into a `SessionConfig`. Nothing here is
//! consulted again after the session starts.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::ConfigError;
use crate::sim::Arena;
pub use crate::sim::config::{Opponent, SessionConfig};

/// Raw, unvalidated session settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Arena size, normally the viewport size
    pub arena_width: f64,
    pub arena_height: f64,
    /// Ball displacement per frame
    pub ball_speed: f64,
    pub opponent: Opponent,
    /// Computer plays both sides
    pub attract_mode: bool,
    /// Serve RNG seed
    pub seed: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            arena_width: DEFAULT_ARENA_WIDTH,
            arena_height: DEFAULT_ARENA_HEIGHT,
            ball_speed: DEFAULT_BALL_SPEED,
            opponent: Opponent::default(),
            attract_mode: false,
            seed: 0x5eed,
        }
    }
}

/// Check a configured ball speed: must be a whole number in
/// 1..=`MAX_BALL_SPEED`
pub fn check_ball_speed(speed: f64) -> Result<f64, ConfigError> {
    if speed.is_finite() && speed.fract() == 0.0 && speed > 0.0 && speed <= MAX_BALL_SPEED {
        Ok(speed)
    } else {
        Err(ConfigError::InvalidBallSpeed {
            speed,
            max: MAX_BALL_SPEED,
        })
    }
}

/// Parse a ball speed typed in by the operator
pub fn parse_ball_speed(input: &str) -> Result<f64, ConfigError> {
    let speed: f64 = input
        .trim()
        .parse()
        .map_err(|_| ConfigError::BallSpeedNotNumeric {
            value: input.to_string(),
        })?;
    check_ball_speed(speed)
}

impl Settings {
    /// Strict validation: any bad value is an error
    pub fn validate(&self) -> Result<SessionConfig, ConfigError> {
        let arena = Arena::new(self.arena_width, self.arena_height)?;
        let ball_speed = check_ball_speed(self.ball_speed)?;
        Ok(SessionConfig {
            arena,
            ball_speed,
            opponent: self.opponent,
            attract_mode: self.attract_mode,
            seed: self.seed,
        })
    }

    /// Lenient validation: a bad ball speed falls back to the default.
    /// Bad geometry is still fatal.
    pub fn resolve(&self) -> Result<SessionConfig, ConfigError> {
        if let Err(e) = check_ball_speed(self.ball_speed) {
            log::warn!("{e}; using default ball speed {DEFAULT_BALL_SPEED}");
            let fixed = Settings {
                ball_speed: DEFAULT_BALL_SPEED,
                ..self.clone()
            };
            return fixed.validate();
        }
        self.validate()
    }

    /// Apply an operator-typed ball speed, keeping the current one when the
    /// text is not acceptable
    pub fn apply_ball_speed_text(&mut self, input: &str) {
        match parse_ball_speed(input) {
            Ok(speed) => self.ball_speed = speed,
            Err(e) => log::warn!("{e}; keeping ball speed {}", self.ball_speed),
        }
    }

    /// Parse settings from JSON; missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Load settings from a JSON file
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        use anyhow::Context;

        let json = std::fs::read_to_string(path)
            .with_context(|| format!("read settings {}", path.display()))?;
        let settings =
            Self::from_json(&json).with_context(|| format!("parse settings {}", path.display()))?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
