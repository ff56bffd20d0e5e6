//! Duel Pong headless runner
//!
//! Sets up a session from a settings file and CLI flags, then drives the
//! simulation for a number of frames, logging cues and scores.
//!
//! Example:
//!   RUST_LOG=info cargo run -- --attract --frames 7200 --json

use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::Parser;

use duel_pong::audio::{AudioManager, LogSink};
use duel_pong::platform::{Action, FixedTicker, InputState, Key};
use duel_pong::sim::{GameEvent, GameState, step};
use duel_pong::{Opponent, Settings};

#[derive(Parser, Debug)]
#[command(author, version, about = "Run a headless Duel Pong session", long_about = None)]
struct Args {
    /// JSON settings file; flags below override it
    #[arg(long)]
    config: Option<PathBuf>,
    #[arg(long)]
    width: Option<f64>,
    #[arg(long)]
    height: Option<f64>,
    /// Ball speed, a whole number from 1 to 50; invalid values fall back to
    /// the default
    #[arg(long)]
    speed: Option<String>,
    /// "human" or "computer"
    #[arg(long, value_parser = parse_opponent)]
    opponent: Option<Opponent>,
    /// Computer plays both paddles
    #[arg(long)]
    attract: bool,
    #[arg(long)]
    seed: Option<u64>,
    /// Number of steps to run
    #[arg(long, default_value_t = 3600)]
    frames: u64,
    /// Pace steps at the host tick rate instead of running flat out
    #[arg(long)]
    realtime: bool,
    /// Print the final snapshot as JSON
    #[arg(long)]
    json: bool,
}

fn parse_opponent(s: &str) -> Result<Opponent, String> {
    Opponent::from_str(s).ok_or_else(|| format!("unknown opponent {s:?} (expected human or computer)"))
}

/// Steps to run this pass: whatever the ticker owes, without going past the
/// frame limit
fn steps_due(due: u32, done: u64, limit: u64) -> u64 {
    u64::from(due).min(limit.saturating_sub(done))
}

fn settings_from(args: &Args) -> Result<Settings> {
    let mut settings = match &args.config {
        Some(path) => Settings::load_from(path)?,
        None => Settings::default(),
    };
    if let Some(width) = args.width {
        settings.arena_width = width;
    }
    if let Some(height) = args.height {
        settings.arena_height = height;
    }
    if let Some(speed) = &args.speed {
        settings.apply_ball_speed_text(speed);
    }
    if let Some(opponent) = args.opponent {
        settings.opponent = opponent;
    }
    if let Some(seed) = args.seed {
        settings.seed = seed;
    }
    settings.attract_mode |= args.attract;
    Ok(settings)
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let settings = settings_from(&args)?;
    let config = settings.resolve().context("invalid session settings")?;
    log::info!(
        "Duel Pong starting: {}x{} arena, ball speed {}, opponent {}, seed {}",
        config.arena.width,
        config.arena.height,
        config.ball_speed,
        config.opponent.as_str(),
        config.seed
    );

    let mut game = GameState::new(&config);
    let mut input = InputState::default();
    let mut audio = AudioManager::new(LogSink);

    // Matches start paused; tap the pause key to begin
    input.key_down(Key::Escape);
    if input.key_up(Key::Escape) == Some(Action::TogglePause) {
        game.toggle_pause();
    }

    let mut ticker = FixedTicker::default();
    let mut last = Instant::now();
    let mut frames = 0;
    while frames < args.frames {
        let due = if args.realtime {
            std::thread::sleep(Duration::from_secs_f64(ticker.tick_dt()));
            let now = Instant::now();
            let elapsed = now.duration_since(last).as_secs_f64();
            last = now;
            ticker.advance(elapsed)
        } else {
            1
        };

        for _ in 0..steps_due(due, frames, args.frames) {
            step(&mut game, &input.controls());
            frames += 1;

            let events = game.drain_events();
            audio.play_events(&events);
            for event in &events {
                if let GameEvent::Scored { scorer, score } = event {
                    log::info!(
                        "Point to {} at frame {} - score {}:{}",
                        scorer.as_str(),
                        game.frame,
                        score.0,
                        score.1
                    );
                }
            }
        }
    }

    let (a, b) = game.score();
    log::info!("Finished after {} frames - score {a}:{b}", game.frame);

    if args.json {
        let snapshot = serde_json::to_string_pretty(&game.snapshot()).context("serialize snapshot")?;
        println!("{snapshot}");
    } else {
        println!("{a}:{b}");
    }
    Ok(())
}
