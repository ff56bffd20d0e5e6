//! Frame step
//!
//! Advances the simulation by exactly one frame. The step has no notion of
//! elapsed time: the ball moves by its velocity once per call, so the host's
//! tick rate sets the game speed.

use super::collision::{ball_paddle_overlap, ball_wall_collision, paddle_hit};
use super::state::{BallState, GameEvent, GameState, PaddleControls, Side};

/// Held movement keys for both paddles, sampled once per step
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ControlInput {
    pub move_up_a: bool,
    pub move_down_a: bool,
    pub move_up_b: bool,
    pub move_down_b: bool,
}

impl ControlInput {
    pub fn for_side(&self, side: Side) -> PaddleControls {
        match side {
            Side::A => PaddleControls {
                up: self.move_up_a,
                down: self.move_down_a,
            },
            Side::B => PaddleControls {
                up: self.move_up_b,
                down: self.move_down_b,
            },
        }
    }
}

/// Advance the game by one frame.
///
/// Does nothing while paused. Otherwise paddle A moves, then paddle B, then
/// the ball resolves collisions against the paddles' new positions.
pub fn step(state: &mut GameState, input: &ControlInput) {
    if state.match_state.paused {
        return;
    }

    state.frame += 1;

    for side in [Side::A, Side::B] {
        update_paddle(state, side, input.for_side(side));
    }

    update_ball(state);
}

fn update_paddle(state: &mut GameState, side: Side, controls: PaddleControls) {
    let ball = state.ball.snapshot();
    let arena = state.arena;
    let paddle = state.paddle_mut(side);
    let target = paddle.autopilot.map(|policy| policy.target(&ball, &arena));
    paddle.update(controls, target, &arena);
}

/// One physics step for the ball: move, bounce off the top/bottom walls,
/// bounce off the paddle it is heading for, and score if it left the arena.
pub fn update_ball(state: &mut GameState) {
    let arena = state.arena;
    let ball = &mut state.ball;

    ball.state = BallState::InFlight;
    ball.pos += ball.vel;

    // --- WALLS ---
    if let Some(hit) = ball_wall_collision(ball.pos.y, &arena) {
        ball.vel.y = -ball.vel.y;
        ball.pos.y = hit.corrected_y;
        state.events.push(GameEvent::WallBounce);
    }

    // --- PADDLE ---
    // The paddle in the direction of travel is also the one that serves
    // if this step ends the point.
    let target = ball.heading_toward();
    let paddle = match target {
        Side::A => &state.paddle_a,
        Side::B => &state.paddle_b,
    };
    if ball_paddle_overlap(ball.pos, paddle.x, paddle.y, &arena) {
        let hit = paddle_hit(ball.pos.y, paddle.y, &arena);
        ball.vel = hit.velocity(target, ball.speed);
        state.events.push(GameEvent::PaddleHit {
            side: target,
            smash: hit.is_smash(),
        });
    }

    // --- SCORING ---
    if ball.pos.x + ball.side < 0.0 || ball.pos.x > arena.width {
        let scorer = if ball.pos.x > arena.width { Side::A } else { Side::B };
        state.match_state.award_point(scorer);
        state.events.push(GameEvent::Scored {
            scorer,
            score: state.match_state.score,
        });
        state.serve(target);
    }
}
