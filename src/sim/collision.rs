//! Collision detection and response for the rectangular arena
//!
//! Everything here is a discrete test against the current frame's
//! positions. A ball fast enough to cross a paddle in a single step
//! passes straight through it.

use glam::DVec2;

use super::arena::Arena;
use super::state::Side;
use crate::consts::*;
use crate::heading;

/// Result of a top/bottom wall check
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WallHit {
    /// Ball top edge moved back inside the arena
    pub corrected_y: f64,
}

/// Check the ball's top edge against the top and bottom walls.
///
/// Returns the clamped position when the ball has left the playfield.
pub fn ball_wall_collision(y: f64, arena: &Arena) -> Option<WallHit> {
    if y < 0.0 || y + arena.ball_side > arena.height {
        Some(WallHit {
            corrected_y: y.clamp(0.0, arena.ball_max_y()),
        })
    } else {
        None
    }
}

/// Check the ball against a paddle's box
pub fn ball_paddle_overlap(ball_pos: DVec2, paddle_x: f64, paddle_y: f64, arena: &Arena) -> bool {
    arena
        .paddle_box(paddle_x, paddle_y)
        .overlaps(&arena.ball_box(ball_pos))
}

/// Where the ball struck a paddle and how it leaves
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PaddleHit {
    /// 0 = ball bottom at paddle top, 1 = ball top at paddle bottom
    pub offset: f64,
    /// Outgoing angle from the horizontal, in [-π/4, π/4]
    pub phi: f64,
    /// Speed multiplier (1.0 or `SMASH_FACTOR`)
    pub smash: f64,
}

impl PaddleHit {
    pub fn is_smash(&self) -> bool {
        self.smash > 1.0
    }

    /// Outgoing velocity off the paddle on `side`
    pub fn velocity(&self, side: Side, speed: f64) -> DVec2 {
        heading(self.smash * speed, self.phi, side.away_dir())
    }
}

/// Compute the reflection for a ball overlapping a paddle.
///
/// A hit dead centre returns the ball straight back; hits toward either
/// end angle it up to 45 degrees, and beyond `SMASH_THRESHOLD` the ball
/// also speeds up.
pub fn paddle_hit(ball_y: f64, paddle_y: f64, arena: &Arena) -> PaddleHit {
    let offset = (ball_y + arena.ball_side - paddle_y) / (arena.paddle_height + arena.ball_side);
    let phi = MAX_DEFLECTION * (2.0 * offset - 1.0);
    let smash = if phi.abs() > SMASH_THRESHOLD {
        SMASH_FACTOR
    } else {
        1.0
    };
    PaddleHit { offset, phi, smash }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    fn arena() -> Arena {
        Arena::new(800.0, 600.0).unwrap()
    }

    #[test]
    fn test_wall_inside_is_miss() {
        let arena = arena();
        assert_eq!(ball_wall_collision(0.0, &arena), None);
        assert_eq!(ball_wall_collision(580.0, &arena), None);
        assert_eq!(ball_wall_collision(300.0, &arena), None);
    }

    #[test]
    fn test_wall_clamps_into_bounds() {
        let arena = arena();
        assert_eq!(
            ball_wall_collision(-5.0, &arena),
            Some(WallHit { corrected_y: 0.0 })
        );
        assert_eq!(
            ball_wall_collision(590.0, &arena),
            Some(WallHit { corrected_y: 580.0 })
        );
    }

    #[test]
    fn test_center_hit_goes_straight_back() {
        let arena = arena();
        // Ball centre level with paddle centre
        let hit = paddle_hit(290.0, 250.0, &arena);
        assert!((hit.offset - 0.5).abs() < 1e-12);
        assert!(hit.phi.abs() < 1e-12);
        assert!(!hit.is_smash());

        let vel = hit.velocity(Side::A, 15.0);
        assert!((vel.x - 15.0).abs() < 1e-12);
        assert!(vel.y.abs() < 1e-12);

        let vel = hit.velocity(Side::B, 15.0);
        assert!((vel.x + 15.0).abs() < 1e-12);
    }

    #[test]
    fn test_edge_hit_is_smash() {
        let arena = arena();
        // Ball just clipping the top of the paddle
        let hit = paddle_hit(232.0, 250.0, &arena);
        assert!(hit.phi < -0.2 * PI);
        assert!(hit.is_smash());
        let vel = hit.velocity(Side::A, 10.0);
        assert!((vel.length() - 15.0).abs() < 1e-9);
        assert!(vel.x > 0.0);
        assert!(vel.y < 0.0);
    }

    #[test]
    fn test_deflection_is_bounded() {
        let arena = arena();
        let top = paddle_hit(230.0, 250.0, &arena);
        let bottom = paddle_hit(350.0, 250.0, &arena);
        assert!((top.phi + PI / 4.0).abs() < 1e-12);
        assert!((bottom.phi - PI / 4.0).abs() < 1e-12);
    }

    #[test]
    fn test_paddle_overlap_boundary() {
        let arena = arena();
        assert!(ball_paddle_overlap(DVec2::new(5.0, 290.0), 0.0, 250.0, &arena));
        assert!(!ball_paddle_overlap(DVec2::new(20.0, 290.0), 0.0, 250.0, &arena));
    }
}
