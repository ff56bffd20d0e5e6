//! Game state and core simulation types
//!
//! Everything a frame step reads or writes lives in `GameState`; there is
//! no ambient state anywhere else in the simulation.

use glam::DVec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::arena::{Aabb, Arena};
use super::autopilot::AutopilotPolicy;
use super::config::{Opponent, SessionConfig};
use crate::audio::SoundEffect;
use crate::consts::*;
use crate::heading;

/// Which end of the arena a paddle defends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    /// Left paddle
    A,
    /// Right paddle
    B,
}

impl Side {
    pub fn index(self) -> usize {
        match self {
            Side::A => 0,
            Side::B => 1,
        }
    }

    pub fn opponent(self) -> Side {
        match self {
            Side::A => Side::B,
            Side::B => Side::A,
        }
    }

    /// Horizontal direction of a ball bouncing off this side's paddle
    pub fn away_dir(self) -> f64 {
        match self {
            Side::A => 1.0,
            Side::B => -1.0,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Side::A => "A",
            Side::B => "B",
        }
    }
}

/// Held movement keys for one paddle
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PaddleControls {
    pub up: bool,
    pub down: bool,
}

/// A paddle. Both sides share this type; the computer opponent is just a
/// paddle carrying an autopilot policy.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paddle {
    pub side: Side,
    /// Left edge (fixed for the session)
    pub x: f64,
    /// Top edge
    pub y: f64,
    pub autopilot: Option<AutopilotPolicy>,
}

impl Paddle {
    /// Create a paddle at its home edge, vertically centred
    pub fn new(side: Side, arena: &Arena) -> Self {
        let x = match side {
            Side::A => 0.0,
            Side::B => arena.width - arena.paddle_width,
        };
        Self {
            side,
            x,
            y: arena.centered_paddle_y(),
            autopilot: None,
        }
    }

    pub fn with_autopilot(mut self, policy: AutopilotPolicy) -> Self {
        self.autopilot = Some(policy);
        self
    }

    pub fn is_autopilot(&self) -> bool {
        self.autopilot.is_some()
    }

    /// Move the paddle for one frame and keep it inside the arena.
    ///
    /// With an autopilot and a target the paddle eases toward the target;
    /// otherwise held keys move it by `PADDLE_STEP`. Holding both keys
    /// cancels out.
    pub fn update(&mut self, controls: PaddleControls, autopilot_target: Option<f64>, arena: &Arena) {
        match (self.autopilot, autopilot_target) {
            (Some(policy), Some(target)) => {
                self.y += (target - self.y) / policy.damping;
            }
            _ => {
                if controls.up {
                    self.y -= PADDLE_STEP;
                }
                if controls.down {
                    self.y += PADDLE_STEP;
                }
            }
        }

        self.y = self.y.min(arena.paddle_max_y()).max(0.0);
    }

    pub fn aabb(&self, arena: &Arena) -> Aabb {
        arena.paddle_box(self.x, self.y)
    }
}

/// Ball lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum BallState {
    /// Just (re)served from this side's paddle; becomes `InFlight` on the
    /// next update
    Serving { from: Side },
    InFlight,
}

/// The ball
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ball {
    /// Top-left corner
    pub pos: DVec2,
    /// Displacement per frame
    pub vel: DVec2,
    pub side: f64,
    /// Base speed after serves and ordinary bounces
    pub speed: f64,
    pub state: BallState,
}

/// Read-only view of the ball handed to the autopilot
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BallSnapshot {
    pub pos: DVec2,
    pub side: f64,
}

impl Ball {
    pub fn new(speed: f64, arena: &Arena) -> Self {
        Self {
            pos: DVec2::new(
                (arena.width - arena.ball_side) / 2.0,
                arena.ball_max_y() / 2.0,
            ),
            vel: DVec2::ZERO,
            side: arena.ball_side,
            speed,
            state: BallState::InFlight,
        }
    }

    pub fn snapshot(&self) -> BallSnapshot {
        BallSnapshot {
            pos: self.pos,
            side: self.side,
        }
    }

    pub fn aabb(&self) -> Aabb {
        Aabb::new(self.pos, DVec2::splat(self.side))
    }

    /// Serve from `paddle` at a random angle in (-π/2, π/2]
    pub fn serve(&mut self, paddle: &Paddle, arena: &Arena, rng: &mut Pcg32) {
        let r: f64 = rng.random();
        let phi = std::f64::consts::FRAC_PI_2 * (1.0 - 2.0 * r);
        self.serve_at_angle(paddle, phi, arena);
    }

    /// Place the ball against `paddle`, centred on it, and launch it at
    /// angle `phi` from the horizontal.
    ///
    /// A serve from A starts moving left (into A's own paddle) and a serve
    /// from B moves right; the first update bounces it off the server's
    /// paddle toward the opponent.
    pub fn serve_at_angle(&mut self, paddle: &Paddle, phi: f64, arena: &Arena) {
        let y = paddle.y + arena.paddle_height / 2.0 - self.side / 2.0;
        let x = match paddle.side {
            Side::A => paddle.x + arena.paddle_width,
            Side::B => paddle.x - self.side,
        };
        self.pos = DVec2::new(x, y);
        self.vel = heading(self.speed, phi, -paddle.side.away_dir());
        self.state = BallState::Serving { from: paddle.side };
    }

    /// Paddle side the ball is currently travelling toward
    pub fn heading_toward(&self) -> Side {
        if self.vel.x < 0.0 { Side::A } else { Side::B }
    }
}

/// Score pair and pause flag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchState {
    /// (A, B)
    pub score: (u32, u32),
    pub paused: bool,
}

impl Default for MatchState {
    fn default() -> Self {
        Self {
            score: (0, 0),
            paused: true,
        }
    }
}

impl MatchState {
    pub fn toggle_pause(&mut self) {
        self.paused = !self.paused;
    }

    pub fn award_point(&mut self, scorer: Side) {
        match scorer {
            Side::A => self.score.0 += 1,
            Side::B => self.score.1 += 1,
        }
    }

    pub fn score_of(&self, side: Side) -> u32 {
        match side {
            Side::A => self.score.0,
            Side::B => self.score.1,
        }
    }
}

/// Things that happened during a step, for the host's audio and logs
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    WallBounce,
    PaddleHit { side: Side, smash: bool },
    Scored { scorer: Side, score: (u32, u32) },
    Served { from: Side },
}

impl GameEvent {
    /// Cue for this event. Paddle hits reuse the wall sound.
    pub fn sound(&self) -> Option<SoundEffect> {
        match self {
            GameEvent::WallBounce | GameEvent::PaddleHit { .. } => Some(SoundEffect::Bounce),
            GameEvent::Scored { .. } => Some(SoundEffect::Score),
            GameEvent::Served { .. } => None,
        }
    }
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    pub arena: Arena,
    pub paddle_a: Paddle,
    pub paddle_b: Paddle,
    pub ball: Ball,
    pub match_state: MatchState,
    /// Session seed for reproducibility
    pub seed: u64,
    /// Unpaused steps taken
    pub frame: u64,
    pub(crate) rng: Pcg32,
    pub(crate) events: Vec<GameEvent>,
}

impl GameState {
    /// Set up a session: paddles centred, match paused, and an opening
    /// serve from a randomly chosen side.
    pub fn new(config: &SessionConfig) -> Self {
        let mut state = Self::unserved(config);
        let from = if state.rng.random_bool(0.5) { Side::B } else { Side::A };
        state.serve(from);
        state
    }

    /// Same as `new` but with no serve taken yet; the ball sits in the
    /// middle of the arena at rest.
    pub fn unserved(config: &SessionConfig) -> Self {
        let arena = config.arena;
        let mut paddle_a = Paddle::new(Side::A, &arena);
        let mut paddle_b = Paddle::new(Side::B, &arena);
        if config.attract_mode {
            paddle_a = paddle_a.with_autopilot(AutopilotPolicy::default());
        }
        if config.attract_mode || config.opponent == Opponent::Computer {
            paddle_b = paddle_b.with_autopilot(AutopilotPolicy::default());
        }

        Self {
            arena,
            paddle_a,
            paddle_b,
            ball: Ball::new(config.ball_speed, &arena),
            match_state: MatchState::default(),
            seed: config.seed,
            frame: 0,
            rng: Pcg32::seed_from_u64(config.seed),
            events: Vec::new(),
        }
    }

    pub fn paddle(&self, side: Side) -> &Paddle {
        match side {
            Side::A => &self.paddle_a,
            Side::B => &self.paddle_b,
        }
    }

    pub fn paddle_mut(&mut self, side: Side) -> &mut Paddle {
        match side {
            Side::A => &mut self.paddle_a,
            Side::B => &mut self.paddle_b,
        }
    }

    /// (Re)serve the ball from `from`'s paddle
    pub fn serve(&mut self, from: Side) {
        let paddle = match from {
            Side::A => &self.paddle_a,
            Side::B => &self.paddle_b,
        };
        self.ball.serve(paddle, &self.arena, &mut self.rng);
        self.events.push(GameEvent::Served { from });
    }

    pub fn toggle_pause(&mut self) {
        self.match_state.toggle_pause();
    }

    pub fn is_paused(&self) -> bool {
        self.match_state.paused
    }

    pub fn score(&self) -> (u32, u32) {
        self.match_state.score
    }

    /// Take the events queued since the last drain
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            arena_size: DVec2::new(self.arena.width, self.arena.height),
            paddle_a: DVec2::new(self.paddle_a.x, self.paddle_a.y),
            paddle_b: DVec2::new(self.paddle_b.x, self.paddle_b.y),
            paddle_size: DVec2::new(self.arena.paddle_width, self.arena.paddle_height),
            ball: self.ball.pos,
            ball_side: self.ball.side,
            score: self.match_state.score,
            paused: self.match_state.paused,
        }
    }
}

/// Number of dashes in the centre net
pub const NET_SEGMENTS: usize = 20;
/// Width of a net dash
pub const NET_WIDTH: f64 = 5.0;

/// Everything a renderer needs for one frame
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub arena_size: DVec2,
    /// Top-left corners
    pub paddle_a: DVec2,
    pub paddle_b: DVec2,
    pub paddle_size: DVec2,
    pub ball: DVec2,
    pub ball_side: f64,
    pub score: (u32, u32),
    pub paused: bool,
}

impl Snapshot {
    /// Dashes of the centre net, top to bottom
    pub fn net_segments(&self) -> Vec<Aabb> {
        let step = self.arena_size.y / NET_SEGMENTS as f64;
        let x = (self.arena_size.x - NET_WIDTH) / 2.0;
        (0..NET_SEGMENTS)
            .map(|i| {
                Aabb::new(
                    DVec2::new(x, i as f64 * step + step * 0.25),
                    DVec2::new(NET_WIDTH, step / 2.0),
                )
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::Settings;

    fn config(opponent: Opponent) -> SessionConfig {
        Settings {
            opponent,
            ..Settings::default()
        }
        .validate()
        .unwrap()
    }

    #[test]
    fn test_new_session() {
        let state = GameState::new(&config(Opponent::Computer));
        assert!(state.is_paused());
        assert_eq!(state.score(), (0, 0));
        assert_eq!(state.paddle_a.x, 0.0);
        assert_eq!(state.paddle_b.x, 780.0);
        assert_eq!(state.paddle_a.y, 250.0);
        assert_eq!(state.paddle_b.y, 250.0);
        assert!(!state.paddle_a.is_autopilot());
        assert!(state.paddle_b.is_autopilot());
        assert!(matches!(state.ball.state, BallState::Serving { .. }));
        assert!((state.ball.vel.length() - DEFAULT_BALL_SPEED).abs() < 1e-9);
    }

    #[test]
    fn test_human_opponent_has_no_autopilot() {
        let state = GameState::new(&config(Opponent::Human));
        assert!(!state.paddle_a.is_autopilot());
        assert!(!state.paddle_b.is_autopilot());
    }

    #[test]
    fn test_attract_mode_drives_both_paddles() {
        let mut cfg = config(Opponent::Human);
        cfg.attract_mode = true;
        let state = GameState::new(&cfg);
        assert!(state.paddle_a.is_autopilot());
        assert!(state.paddle_b.is_autopilot());
    }

    #[test]
    fn test_opening_serve_is_seeded() {
        let cfg = config(Opponent::Computer);
        let a = GameState::new(&cfg);
        let b = GameState::new(&cfg);
        assert_eq!(a.ball.pos, b.ball.pos);
        assert_eq!(a.ball.vel, b.ball.vel);
    }

    #[test]
    fn test_serve_from_a() {
        let mut state = GameState::unserved(&config(Opponent::Human));
        for _ in 0..50 {
            state.serve(Side::A);
            assert_eq!(state.ball.pos.x, state.paddle_a.x + state.arena.paddle_width);
            assert_eq!(state.ball.pos.y, state.paddle_a.y + 40.0);
            assert!(state.ball.vel.x <= 0.0);
            assert!((state.ball.vel.length() - 15.0).abs() < 1e-9);
            assert_eq!(state.ball.state, BallState::Serving { from: Side::A });
        }
    }

    #[test]
    fn test_serve_from_b() {
        let mut state = GameState::unserved(&config(Opponent::Human));
        for _ in 0..50 {
            state.serve(Side::B);
            assert_eq!(state.ball.pos.x, state.paddle_b.x - state.ball.side);
            assert!(state.ball.vel.x >= 0.0);
            assert!((state.ball.vel.length() - 15.0).abs() < 1e-9);
        }
    }

    #[test]
    fn test_serve_angle_covers_both_halves() {
        let mut state = GameState::unserved(&config(Opponent::Human));
        let (mut up, mut down) = (0, 0);
        for _ in 0..200 {
            state.serve(Side::B);
            if state.ball.vel.y < 0.0 {
                up += 1;
            } else {
                down += 1;
            }
        }
        assert!(up > 50 && down > 50, "up={up} down={down}");
    }

    #[test]
    fn test_paddle_keys() {
        let arena = Arena::new(800.0, 600.0).unwrap();
        let mut paddle = Paddle::new(Side::A, &arena);

        paddle.update(PaddleControls { up: true, down: false }, None, &arena);
        assert_eq!(paddle.y, 235.0);
        paddle.update(PaddleControls { up: false, down: true }, None, &arena);
        assert_eq!(paddle.y, 250.0);
        paddle.update(PaddleControls { up: true, down: true }, None, &arena);
        assert_eq!(paddle.y, 250.0);
    }

    #[test]
    fn test_paddle_clamped() {
        let arena = Arena::new(800.0, 600.0).unwrap();
        let mut paddle = Paddle::new(Side::B, &arena);
        let up = PaddleControls { up: true, down: false };
        for _ in 0..100 {
            paddle.update(up, None, &arena);
        }
        assert_eq!(paddle.y, 0.0);

        let down = PaddleControls { up: false, down: true };
        for _ in 0..100 {
            paddle.update(down, None, &arena);
        }
        assert_eq!(paddle.y, 500.0);
    }

    #[test]
    fn test_autopilot_damping() {
        let arena = Arena::new(800.0, 600.0).unwrap();
        let mut paddle = Paddle::new(Side::B, &arena).with_autopilot(AutopilotPolicy::default());
        // Keys are ignored when a target is supplied
        let keys = PaddleControls { up: true, down: false };
        paddle.update(keys, Some(340.0), &arena);
        assert!((paddle.y - 260.0).abs() < 1e-12);
        // Without a target the keys drive it
        paddle.update(keys, None, &arena);
        assert!((paddle.y - 245.0).abs() < 1e-12);
    }

    #[test]
    fn test_target_ignored_without_autopilot() {
        let arena = Arena::new(800.0, 600.0).unwrap();
        let mut paddle = Paddle::new(Side::A, &arena);
        paddle.update(PaddleControls::default(), Some(0.0), &arena);
        assert_eq!(paddle.y, 250.0);
    }

    #[test]
    fn test_match_state() {
        let mut m = MatchState::default();
        assert!(m.paused);
        m.toggle_pause();
        assert!(!m.paused);
        m.award_point(Side::B);
        m.award_point(Side::B);
        m.award_point(Side::A);
        assert_eq!(m.score, (1, 2));
        assert_eq!(m.score_of(Side::B), 2);
    }

    #[test]
    fn test_event_sounds() {
        assert_eq!(GameEvent::WallBounce.sound(), Some(SoundEffect::Bounce));
        assert_eq!(
            GameEvent::PaddleHit { side: Side::A, smash: true }.sound(),
            Some(SoundEffect::Bounce)
        );
        assert_eq!(
            GameEvent::Scored { scorer: Side::A, score: (1, 0) }.sound(),
            Some(SoundEffect::Score)
        );
        assert_eq!(GameEvent::Served { from: Side::B }.sound(), None);
    }

    #[test]
    fn test_net_segments() {
        let state = GameState::unserved(&config(Opponent::Human));
        let net = state.snapshot().net_segments();
        assert_eq!(net.len(), NET_SEGMENTS);
        assert_eq!(net[0].min, DVec2::new(397.5, 7.5));
        assert_eq!(net[0].size, DVec2::new(5.0, 15.0));
        assert_eq!(net[19].min.y, 577.5);
    }
}
