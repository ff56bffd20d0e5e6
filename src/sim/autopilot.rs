//! Computer-controlled paddle policy

use serde::{Deserialize, Serialize};

use super::arena::Arena;
use super::state::BallSnapshot;
use crate::consts::AUTOPILOT_DAMPING;

/// Tracks the ball's vertical centre. The paddle only closes a fraction of
/// the gap each frame, so a fast enough ball still gets past it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AutopilotPolicy {
    /// Divisor applied to the remaining distance each frame
    pub damping: f64,
}

impl Default for AutopilotPolicy {
    fn default() -> Self {
        Self {
            damping: AUTOPILOT_DAMPING,
        }
    }
}

impl AutopilotPolicy {
    /// Paddle top edge that lines the paddle's centre up with the ball's
    pub fn target(&self, ball: &BallSnapshot, arena: &Arena) -> f64 {
        ball.pos.y - (arena.paddle_height - ball.side) / 2.0
    }
}
