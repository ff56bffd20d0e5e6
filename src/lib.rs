//! Duel Pong - a classic two-paddle arena game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (paddles, ball, collisions, scoring)
//! - `platform`: Host-side input mapping and tick scheduling
//! - `audio`: Sound cue identifiers and sinks
//! - `settings`: Session configuration and validation

pub mod audio;
pub mod error;
pub mod platform;
pub mod settings;
pub mod sim;

pub use error::ConfigError;
pub use settings::{Opponent, SessionConfig, Settings};

use glam::DVec2;

/// Game configuration constants
pub mod consts {
    /// Fallback arena size when the host has no viewport to measure
    pub const DEFAULT_ARENA_WIDTH: f64 = 800.0;
    pub const DEFAULT_ARENA_HEIGHT: f64 = 600.0;

    /// Paddle defaults
    pub const PADDLE_WIDTH: f64 = 20.0;
    pub const PADDLE_HEIGHT: f64 = 100.0;
    /// Vertical distance a key-driven paddle moves per frame
    pub const PADDLE_STEP: f64 = 15.0;

    /// Ball defaults
    pub const BALL_SIDE: f64 = 20.0;
    pub const DEFAULT_BALL_SPEED: f64 = 15.0;
    /// Upper bound accepted for a configured ball speed
    pub const MAX_BALL_SPEED: f64 = 50.0;

    /// Autopilot closes 1/9 of the gap to its target each frame
    pub const AUTOPILOT_DAMPING: f64 = 9.0;

    /// Largest deflection off a paddle (radians, either direction)
    pub const MAX_DEFLECTION: f64 = std::f64::consts::FRAC_PI_4;
    /// Deflections beyond this angle are smashes
    pub const SMASH_THRESHOLD: f64 = 0.2 * std::f64::consts::PI;
    /// Velocity multiplier applied on a smash
    pub const SMASH_FACTOR: f64 = 1.5;

    /// Host tick rate (one simulation step per display refresh)
    pub const TICK_DT: f64 = 1.0 / 60.0;
    /// Maximum steps per host frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;
}

/// Velocity of magnitude `speed` at angle `phi` from the horizontal,
/// with the horizontal component pointing along `dir_x` (±1).
#[inline]
pub fn heading(speed: f64, phi: f64, dir_x: f64) -> DVec2 {
    DVec2::new(dir_x * speed * phi.cos(), speed * phi.sin())
}
