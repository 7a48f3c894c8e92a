//! Game state and core simulation types
//!
//! Everything a tick reads or writes lives in [`GameState`]; the render layer
//! only ever borrows it immutably.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::particles::ParticleSystem;
use crate::consts::*;
use crate::field_center;

/// Which player a paddle, score or event belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub fn as_str(&self) -> &'static str {
        match self {
            Side::Left => "P1",
            Side::Right => "P2",
        }
    }
}

/// The ball, tracked by its top-left corner
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    /// Trail history for rendering (newest first)
    pub trail: Vec<Vec2>,
}

impl Default for Ball {
    fn default() -> Self {
        Self {
            pos: field_center(),
            vel: Vec2::new(BALL_START_DX, BALL_START_DY),
            trail: Vec::with_capacity(TRAIL_LENGTH + 1),
        }
    }
}

impl Ball {
    pub fn new(pos: Vec2, vel: Vec2) -> Self {
        Self {
            pos,
            vel,
            ..Default::default()
        }
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        self.pos + Vec2::splat(BALL_RADIUS)
    }

    /// Record current center to trail (newest first)
    pub fn record_trail(&mut self) {
        self.trail.insert(0, self.center());
        self.trail.truncate(TRAIL_LENGTH);
    }

    /// Clear trail (on serve)
    pub fn clear_trail(&mut self) {
        self.trail.clear();
    }

    /// Put the ball back in the middle with a fresh serve velocity
    pub fn serve(&mut self, vel: Vec2) {
        self.pos = field_center();
        self.vel = vel;
        self.clear_trail();
    }
}

/// A player's paddle; only its vertical position changes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paddle {
    pub side: Side,
    /// Top edge
    pub y: f32,
}

impl Paddle {
    pub fn new(side: Side) -> Self {
        Self {
            side,
            y: PADDLE_START_Y,
        }
    }

    /// Left edge of the paddle
    pub fn x(&self) -> f32 {
        match self.side {
            Side::Left => LEFT_PADDLE_X,
            Side::Right => RIGHT_PADDLE_X,
        }
    }

    /// Whether `y` lies in the paddle band `[y, y + height]`
    #[inline]
    pub fn covers(&self, y: f32) -> bool {
        self.y <= y && y <= self.y + PADDLE_HEIGHT
    }

    /// Apply one tick of movement
    ///
    /// Up is checked and applied before down, so holding both keys cancels
    /// out except at the edges.
    pub fn step(&mut self, up: bool, down: bool) {
        if up && self.y > 0.0 {
            self.y -= PADDLE_SPEED;
        }
        if down && self.y < PADDLE_MAX_Y {
            self.y += PADDLE_SPEED;
        }
        self.y = self.y.clamp(0.0, PADDLE_MAX_Y);
    }
}

/// Goal counters for both players
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scoreboard {
    pub left: u32,
    pub right: u32,
}

impl Scoreboard {
    pub fn award(&mut self, side: Side) {
        match side {
            Side::Left => self.left = self.left.saturating_add(1),
            Side::Right => self.right = self.right.saturating_add(1),
        }
    }

    pub fn get(&self, side: Side) -> u32 {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }
}

/// Something that happened during a tick
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Ball bounced off the top or bottom edge
    WallBounce { pos: Vec2 },
    /// Ball was returned by a paddle
    PaddleBounce { side: Side, speed: f32 },
    /// Ball left the field; `scorer` gets the point
    Goal { scorer: Side },
}

/// Spacing between mountain skyline samples
pub const SKYLINE_STEP: usize = 10;

/// Mountain skyline behind the playfield
pub fn skyline() -> Vec<Vec2> {
    (0..FIELD_WIDTH as usize)
        .step_by(SKYLINE_STEP)
        .map(|x| {
            let x = x as f32;
            let y = 400.0 + (x / 50.0).sin() * 30.0 + (x / 25.0).cos() * 15.0;
            Vec2::new(x, y)
        })
        .collect()
}

/// Complete game state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub ball: Ball,
    pub left: Paddle,
    pub right: Paddle,
    pub score: Scoreboard,
    /// Visual particles (not gameplay-affecting)
    pub particles: ParticleSystem,
    /// Mountain points, computed once
    pub skyline: Vec<Vec2>,
    /// Simulation tick counter (drives visual pulses)
    pub time_ticks: u64,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    /// Fresh game: ball in the middle heading down-right, paddles centered
    pub fn new() -> Self {
        Self::with_particles(ParticleSystem::new())
    }

    pub fn with_particle_limit(limit: usize) -> Self {
        Self::with_particles(ParticleSystem::with_limit(limit))
    }

    fn with_particles(particles: ParticleSystem) -> Self {
        Self {
            ball: Ball::default(),
            left: Paddle::new(Side::Left),
            right: Paddle::new(Side::Right),
            score: Scoreboard::default(),
            particles,
            skyline: skyline(),
            time_ticks: 0,
        }
    }

    pub fn paddle(&self, side: Side) -> &Paddle {
        match side {
            Side::Left => &self.left,
            Side::Right => &self.right,
        }
    }

    pub fn paddle_mut(&mut self, side: Side) -> &mut Paddle {
        match side {
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        }
    }
}
