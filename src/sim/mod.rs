//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One call to `step` is one frame, no timing inside
//! - Seeded RNG only
//! - Fixed update order (paddle A, paddle B, ball)
//! - No rendering, audio, logging or platform dependencies

pub mod arena;
pub mod autopilot;
pub mod collision;
pub mod config;
pub mod state;
pub mod tick;

pub use arena::{Aabb, Arena};
pub use autopilot::AutopilotPolicy;
pub use collision::{PaddleHit, WallHit, ball_paddle_overlap, ball_wall_collision, paddle_hit};
pub use config::{Opponent, SessionConfig};
pub use state::{
    Ball, BallSnapshot, BallState, GameEvent, GameState, MatchState, NET_SEGMENTS, NET_WIDTH,
    Paddle, PaddleControls, Side, Snapshot,
};
pub use tick::{ControlInput, step, update_ball};
