use duel_pong::platform::{Action, InputState, Key};
use duel_pong::sim::*;
use duel_pong::{Opponent, SessionConfig, Settings};
use glam::DVec2;

fn session(opponent: Opponent, attract_mode: bool, seed: u64) -> SessionConfig {
    Settings {
        opponent,
        attract_mode,
        seed,
        ..Settings::default()
    }
    .validate()
    .unwrap()
}

fn unpause(state: &mut GameState, input: &mut InputState) {
    input.key_down(Key::Escape);
    if input.key_up(Key::Escape) == Some(Action::TogglePause) {
        state.toggle_pause();
    }
}

#[test]
fn test_session_starts_paused() {
    let mut state = GameState::new(&session(Opponent::Computer, false, 1));
    let before = state.snapshot();
    for _ in 0..60 {
        step(&mut state, &ControlInput::default());
    }
    assert!(before.paused);
    assert_eq!(state.snapshot(), before);

    let mut input = InputState::default();
    unpause(&mut state, &mut input);
    step(&mut state, &input.controls());
    assert!(!state.is_paused());
    assert_eq!(state.frame, 1);
    assert_ne!(state.snapshot().ball, before.ball);
}

#[test]
fn test_missed_ball_scores_for_opponent() {
    let mut state = GameState::unserved(&session(Opponent::Human, false, 2));
    let mut input = InputState::default();
    unpause(&mut state, &mut input);

    // B runs for the top corner while the ball slides along the bottom
    state.ball.pos = DVec2::new(400.0, 500.0);
    state.ball.vel = DVec2::new(15.0, 0.0);
    input.key_down(Key::ArrowUp);

    for _ in 0..26 {
        step(&mut state, &input.controls());
    }
    assert_eq!(state.score(), (0, 0));
    assert_eq!(state.paddle_b.y, 0.0);

    step(&mut state, &input.controls());
    assert_eq!(state.score(), (1, 0));
    assert_eq!(state.ball.state, BallState::Serving { from: Side::B });
    // Served off B's paddle, which is now at the top
    assert_eq!(state.ball.pos, DVec2::new(760.0, 40.0));

    let events = state.drain_events();
    assert!(events.contains(&GameEvent::Scored {
        scorer: Side::A,
        score: (1, 0)
    }));
    assert_eq!(events.last(), Some(&GameEvent::Served { from: Side::B }));
}

#[test]
fn test_long_rally_invariants() {
    for seed in [3, 17, 256] {
        let mut state = GameState::new(&session(Opponent::Computer, true, seed));
        state.toggle_pause();
        let speed = state.ball.speed;
        let mut points = 0;

        for _ in 0..20_000 {
            step(&mut state, &ControlInput::default());

            let v = state.ball.vel.length();
            assert!(
                (v - speed).abs() < 1e-9 || (v - speed * 1.5).abs() < 1e-9,
                "ball speed {v} drifted (seed {seed})"
            );
            for side in [Side::A, Side::B] {
                let y = state.paddle(side).y;
                assert!(y >= 0.0 && y <= state.arena.paddle_max_y());
            }
            assert!(state.ball.pos.y >= 0.0 && state.ball.pos.y <= state.arena.ball_max_y());

            let events = state.drain_events();
            for (i, event) in events.iter().enumerate() {
                if let GameEvent::Scored { scorer, .. } = event {
                    points += 1;
                    assert_eq!(
                        events.get(i + 1),
                        Some(&GameEvent::Served {
                            from: scorer.opponent()
                        })
                    );
                }
            }
        }

        let (a, b) = state.score();
        assert_eq!(a + b, points);
        assert_eq!(state.frame, 20_000);
    }
}

#[test]
fn test_pause_mid_game_freezes_everything() {
    let mut state = GameState::new(&session(Opponent::Computer, false, 4));
    let mut input = InputState::default();
    unpause(&mut state, &mut input);
    input.key_down(Key::A);
    for _ in 0..30 {
        step(&mut state, &input.controls());
    }
    state.drain_events();

    unpause(&mut state, &mut input);
    assert!(state.is_paused());
    let frozen = state.snapshot();
    let vel = state.ball.vel;
    for _ in 0..500 {
        step(&mut state, &input.controls());
    }
    assert_eq!(state.snapshot(), frozen);
    assert_eq!(state.ball.vel, vel);
    assert!(state.drain_events().is_empty());
}

#[test]
fn test_snapshot_json() {
    let state = GameState::new(&session(Opponent::Computer, false, 5));
    let json = serde_json::to_value(state.snapshot()).unwrap();
    assert_eq!(json["score"], serde_json::json!([0, 0]));
    assert_eq!(json["paused"], serde_json::json!(true));
    assert_eq!(json["ball_side"], serde_json::json!(20.0));
}
