//! Synthwave Pong - a two-player Pong core with neon particle effects
//!
//! Core modules:
//! - `sim`: Deterministic simulation (ball, paddles, scores, particles)
//! - `renderer`: Frame snapshots and draw lists for a rendering backend
//! - `input`: Key mapping and the demo-mode autopilot
//! - `driver`: Fixed-timestep session loop
//! - `settings`: Player preferences

pub mod driver;
pub mod input;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use driver::Session;
pub use settings::{QualityPreset, Settings};

use glam::Vec2;

/// Game configuration constants
///
/// Distances are in playfield pixels, speeds in pixels per tick.
pub mod consts {
    /// Fixed simulation timestep (~60 Hz)
    pub const SIM_DT: f32 = 0.016;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 4;
    /// Longest frame the driver will account for (seconds)
    pub const MAX_FRAME_DT: f32 = 0.1;

    /// Playfield dimensions
    pub const FIELD_WIDTH: f32 = 800.0;
    pub const FIELD_HEIGHT: f32 = 600.0;

    /// Ball defaults
    pub const BALL_SIZE: f32 = 10.0;
    pub const BALL_RADIUS: f32 = BALL_SIZE / 2.0;
    pub const BALL_START_DX: f32 = 6.0;
    pub const BALL_START_DY: f32 = 6.0;
    /// Serve velocity candidates after a goal
    pub const SERVE_DX: [f32; 2] = [6.0, -6.0];
    pub const SERVE_DY: [f32; 6] = [4.0, -4.0, 5.0, -5.0, 6.0, -6.0];
    /// Horizontal speed multiplier on paddle hit
    pub const PADDLE_BOOST: f32 = 1.05;

    /// Paddle defaults
    pub const PADDLE_WIDTH: f32 = 15.0;
    pub const PADDLE_HEIGHT: f32 = 100.0;
    pub const PADDLE_SPEED: f32 = 10.0;
    pub const PADDLE_START_Y: f32 = 250.0;
    /// Highest allowed paddle y (top edge)
    pub const PADDLE_MAX_Y: f32 = FIELD_HEIGHT - PADDLE_HEIGHT;
    /// Paddle x positions (left edge)
    pub const LEFT_PADDLE_X: f32 = 50.0;
    pub const RIGHT_PADDLE_X: f32 = 740.0;
    /// Ball x at or beyond which a paddle can return it
    pub const LEFT_HIT_X: f32 = LEFT_PADDLE_X + PADDLE_WIDTH;
    pub const RIGHT_HIT_X: f32 = RIGHT_PADDLE_X - PADDLE_WIDTH;

    /// Number of ball centers kept for the trail
    pub const TRAIL_LENGTH: usize = 10;

    /// Particle physics
    pub const PARTICLE_GRAVITY: f32 = 0.1;
    pub const PARTICLE_MAX_SPEED: f32 = 2.0;
    pub const PARTICLE_MIN_SIZE: f32 = 2.0;
    pub const PARTICLE_MAX_SIZE: f32 = 6.0;

    /// Event bursts: (count, lifetime in ticks)
    pub const WALL_BURST: (usize, i32) = (10, 30);
    pub const PADDLE_BURST: (usize, i32) = (15, 40);
    pub const GOAL_BURST: (usize, i32) = (30, 50);
    /// Ball exhaust: spawn chance threshold and lifetime
    pub const AMBIENT_THRESHOLD: f32 = 0.5;
    pub const AMBIENT_LIFETIME: i32 = 20;
}

/// Center of the playfield
#[inline]
pub fn field_center() -> Vec2 {
    Vec2::new(consts::FIELD_WIDTH / 2.0, consts::FIELD_HEIGHT / 2.0)
}
