//! Per-session configuration consumed by the simulation
//!
//! Produced once by validating host settings; the simulation only ever
//! reads it.

use serde::{Deserialize, Serialize};

use super::arena::Arena;

/// Who controls the right-hand paddle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Opponent {
    /// Second player on the arrow keys
    Human,
    #[default]
    Computer,
}

impl Opponent {
    pub fn as_str(&self) -> &'static str {
        match self {
            Opponent::Human => "human",
            Opponent::Computer => "computer",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "human" | "player" | "versus" => Some(Opponent::Human),
            "computer" | "cpu" | "ai" => Some(Opponent::Computer),
            _ => None,
        }
    }
}

/// Validated settings, fixed for the whole session
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SessionConfig {
    pub arena: Arena,
    pub ball_speed: f64,
    pub opponent: Opponent,
    pub attract_mode: bool,
    pub seed: u64,
}
