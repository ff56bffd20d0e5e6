//! Arena geometry and axis-aligned boxes
//!
//! The arena is a rectangle with its origin in the top-left corner and y
//! growing downward. Its dimensions never change once a session starts.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::ConfigError;

/// Session geometry shared by every collision test
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Arena {
    pub width: f64,
    pub height: f64,
    pub paddle_width: f64,
    pub paddle_height: f64,
    pub ball_side: f64,
}

impl Arena {
    /// Build an arena with the standard paddle and ball sizes
    pub fn new(width: f64, height: f64) -> Result<Self, ConfigError> {
        Self::with_sizes(width, height, PADDLE_WIDTH, PADDLE_HEIGHT, BALL_SIDE)
    }

    /// Build an arena, rejecting any dimension that would break the
    /// collision math
    pub fn with_sizes(
        width: f64,
        height: f64,
        paddle_width: f64,
        paddle_height: f64,
        ball_side: f64,
    ) -> Result<Self, ConfigError> {
        for (what, value) in [
            ("arena width", width),
            ("arena height", height),
            ("paddle width", paddle_width),
            ("paddle height", paddle_height),
            ("ball side", ball_side),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::InvalidGeometry { what, value });
            }
        }

        if paddle_height > height {
            return Err(ConfigError::DoesNotFit {
                what: "paddle height",
                size: paddle_height,
                limit: height,
            });
        }
        if 2.0 * paddle_width > width {
            return Err(ConfigError::DoesNotFit {
                what: "two paddles",
                size: 2.0 * paddle_width,
                limit: width,
            });
        }
        if ball_side > height {
            return Err(ConfigError::DoesNotFit {
                what: "ball side",
                size: ball_side,
                limit: height,
            });
        }

        Ok(Self {
            width,
            height,
            paddle_width,
            paddle_height,
            ball_side,
        })
    }

    /// Lowest allowed paddle top edge (highest is 0)
    #[inline]
    pub fn paddle_max_y(&self) -> f64 {
        self.height - self.paddle_height
    }

    /// Lowest allowed ball top edge
    #[inline]
    pub fn ball_max_y(&self) -> f64 {
        self.height - self.ball_side
    }

    /// Paddle top edge that centres it vertically
    #[inline]
    pub fn centered_paddle_y(&self) -> f64 {
        (self.height - self.paddle_height) / 2.0
    }

    pub fn paddle_box(&self, x: f64, y: f64) -> Aabb {
        Aabb::new(DVec2::new(x, y), DVec2::new(self.paddle_width, self.paddle_height))
    }

    pub fn ball_box(&self, pos: DVec2) -> Aabb {
        Aabb::new(pos, DVec2::splat(self.ball_side))
    }
}

/// Axis-aligned bounding box (top-left corner + size)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: DVec2,
    pub size: DVec2,
}

impl Aabb {
    pub fn new(min: DVec2, size: DVec2) -> Self {
        Self { min, size }
    }

    #[inline]
    pub fn max(&self) -> DVec2 {
        self.min + self.size
    }

    /// Strict overlap on both axes; boxes that only share an edge do not
    /// overlap.
    pub fn overlaps(&self, other: &Aabb) -> bool {
        let a_max = self.max();
        let b_max = other.max();
        other.min.x < a_max.x && other.min.y < a_max.y && self.min.x < b_max.x && self.min.y < b_max.y
    }
}
