//! Synthwave Pong entry point
//!
//! Headless native runner: plays a demo match with both paddles on autopilot,
//! building a draw list every frame as a windowed frontend would.

use std::time::{SystemTime, UNIX_EPOCH};

use synthwave_pong::sim::{GameEvent, seeded};
use synthwave_pong::{Session, Settings};

/// Render rate of the headless loop
const FRAME_DT: f32 = 1.0 / 60.0;

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or_default()
}

fn main() {
    env_logger::init();
    log::info!("Synthwave Pong (headless) starting...");

    let settings = Settings::load();
    let seed = settings.seed.unwrap_or_else(clock_seed);
    log::info!(
        "Seed {}, quality {}, demo length {:.1}s",
        seed,
        settings.quality.as_str(),
        settings.demo_seconds
    );

    let frames = (settings.demo_seconds.max(0.0) / FRAME_DT).round() as u64;
    let mut session = Session::new(seeded(seed), settings);
    session.set_demo(true);

    let mut goals = 0;
    let mut draw_calls = 0;
    for _ in 0..frames {
        goals += session
            .update(FRAME_DT)
            .iter()
            .filter(|e| matches!(e, GameEvent::Goal { .. }))
            .count();
        draw_calls += session.draw().len();
    }

    let frame = session.frame();
    log::info!(
        "Finished after {} ticks, {} goals, {} draw calls",
        frame.phase,
        goals,
        draw_calls
    );
    println!("P1: {}  P2: {}", frame.score.left, frame.score.right);

    match serde_json::to_string(&frame) {
        Ok(json) => log::debug!("Final frame: {}", json),
        Err(e) => log::warn!("Could not serialize final frame: {}", e),
    }
}
