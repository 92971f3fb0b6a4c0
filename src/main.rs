//! Skyline Sortie headless host
//!
//! Drives a session from a simulated frame clock with the autopilot at the
//! controls, restarting after each game over, and prints a JSON summary.

use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;

use skyline_sortie::{GameConfig, GameEvent, GamePhase, Session, autopilot, logging};

/// Run the arcade shooter simulation without a renderer
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// RNG seed (defaults to the current time)
    #[arg(short, long)]
    seed: Option<u64>,

    /// Number of frames to simulate
    #[arg(short, long, default_value_t = 3600)]
    frames: u32,

    /// Simulated frames per second
    #[arg(long, default_value_t = 60.0)]
    fps: f64,

    /// JSON config file; missing keys fall back to defaults
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print the effective config as JSON and exit
    #[arg(long)]
    print_config: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Debug, Default, Serialize)]
struct Summary {
    seed: u64,
    frames: u32,
    games_started: u32,
    games_finished: u32,
    best_score: u32,
    last_score: u32,
    last_level: u32,
    adversaries_destroyed: u32,
    pickups_collected: u32,
}

fn load_config(path: Option<&PathBuf>) -> Result<GameConfig> {
    let Some(path) = path else {
        return Ok(GameConfig::default());
    };
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    let config = GameConfig::from_json(&json)
        .with_context(|| format!("loading config {}", path.display()))?;
    log::info!("Loaded config from {}", path.display());
    Ok(config)
}

fn main() -> Result<()> {
    let args = Args::parse();
    logging::init(args.verbose);

    let config = load_config(args.config.as_ref())?;
    if args.print_config {
        println!("{}", config.to_json()?);
        return Ok(());
    }
    anyhow::ensure!(args.fps > 0.0, "--fps must be positive");

    let seed = args.seed.unwrap_or_else(|| {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0)
    });

    log::info!("Skyline Sortie (headless) starting...");
    let mut session = Session::new(config, seed)?;
    let mut summary = Summary {
        seed,
        frames: args.frames,
        ..Default::default()
    };

    let frame_ms = 1000.0 / args.fps;
    for frame in 0..args.frames {
        if matches!(session.phase(), GamePhase::Idle | GamePhase::Over) {
            session.start_or_restart();
        }

        let intents = autopilot::steer(&session.snapshot());
        session.frame(frame as f64 * frame_ms, &intents);

        for event in session.drain_events() {
            match event {
                GameEvent::AdversaryDestroyed { .. } => summary.adversaries_destroyed += 1,
                GameEvent::PickupCollected { .. } => summary.pickups_collected += 1,
                GameEvent::GameOver { final_score } => {
                    summary.games_finished += 1;
                    summary.best_score = summary.best_score.max(final_score);
                }
                GameEvent::PlayerHit { .. } | GameEvent::LevelUp { .. } => {}
            }
            log::debug!("frame {}: {:?}", frame, event);
        }
    }

    let snap = session.snapshot();
    summary.games_started = session.games_started();
    summary.last_score = snap.score;
    summary.last_level = snap.level;
    summary.best_score = summary.best_score.max(snap.score);

    println!("{}", serde_json::to_string_pretty(&summary)?);
    Ok(())
}
