//! Immutable per-frame snapshot of the game

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::sim::{GameState, ParticleSprite, Scoreboard};

/// Everything a renderer or scoreboard needs for one frame
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Frame {
    /// Ball top-left corner
    pub ball: Vec2,
    /// Paddle top edges
    pub left_paddle: f32,
    pub right_paddle: f32,
    pub score: Scoreboard,
    /// Recent ball centers, newest first
    pub trail: Vec<Vec2>,
    pub particles: Vec<ParticleSprite>,
    pub skyline: Vec<Vec2>,
    pub phase: u64,
}

impl Frame {
    pub fn capture(state: &GameState) -> Self {
        Self {
            ball: state.ball.pos,
            left_paddle: state.left.y,
            right_paddle: state.right.y,
            score: state.score,
            trail: state.ball.trail.clone(),
            particles: state.particles.sprites(),
            skyline: state.skyline.clone(),
            phase: state.time_ticks,
        }
    }
}
