//! Session setup errors
//!
//! The simulation itself never fails; everything that can go wrong is
//! caught here, before the first serve.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("ball speed {value:?} is not a number")]
    BallSpeedNotNumeric { value: String },
    #[error("ball speed {speed} must be a whole number from 1 to {max}")]
    InvalidBallSpeed { speed: f64, max: f64 },
    #[error("{what} must be a positive finite number, got {value}")]
    InvalidGeometry { what: &'static str, value: f64 },
    #[error("{what} ({size}) does not fit in the arena ({limit})")]
    DoesNotFit {
        what: &'static str,
        size: f64,
        limit: f64,
    },
}
