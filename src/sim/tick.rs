//! Fixed timestep simulation tick
//!
//! Core game loop that advances simulation deterministically.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::{goal_scorer, hits_wall, paddle_contact, paddle_return, wall_bounce};
use super::color::{EXHAUST, LEFT_PLAYER, RIGHT_PLAYER, SPARK};
use super::rng::RandomSource;
use super::state::{GameEvent, GameState, Side};
use crate::consts::*;
use crate::field_center;

/// Movement keys held for one paddle
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaddleInput {
    pub up: bool,
    pub down: bool,
}

/// Input commands for a single tick (deterministic)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickInput {
    pub left: PaddleInput,
    pub right: PaddleInput,
}

impl TickInput {
    pub fn paddle(&self, side: Side) -> PaddleInput {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }
}

/// Advance the game state by one fixed timestep
///
/// Returns the gameplay events of this tick in the order they happened.
pub fn tick<R: RandomSource + ?Sized>(
    state: &mut GameState,
    input: &TickInput,
    rng: &mut R,
) -> Vec<GameEvent> {
    let mut events = Vec::new();

    state.ball.pos += state.ball.vel;

    if hits_wall(state.ball.pos.y) {
        state.ball.vel = wall_bounce(state.ball.vel);
        let (count, lifetime) = WALL_BURST;
        state
            .particles
            .burst(count, state.ball.pos, SPARK, lifetime, rng);
        events.push(GameEvent::WallBounce {
            pos: state.ball.pos,
        });
    }

    if let Some(side) = paddle_contact(state.ball.pos, &state.left, &state.right) {
        state.ball.vel = paddle_return(state.ball.vel);
        let color = match side {
            Side::Left => LEFT_PLAYER,
            Side::Right => RIGHT_PLAYER,
        };
        let (count, lifetime) = PADDLE_BURST;
        state
            .particles
            .burst(count, state.ball.pos, color, lifetime, rng);
        events.push(GameEvent::PaddleBounce {
            side,
            speed: state.ball.vel.x.abs(),
        });
    }

    let scorer = goal_scorer(state.ball.pos.x);
    if let Some(scorer) = scorer {
        state.score.award(scorer);
        serve(state, rng);
        events.push(GameEvent::Goal { scorer });
    }

    for side in [Side::Left, Side::Right] {
        let keys = input.paddle(side);
        state.paddle_mut(side).step(keys.up, keys.down);
    }

    // A freshly served ball has no history yet
    if scorer.is_none() {
        state.ball.record_trail();
    }

    if rng.next_unit() > AMBIENT_THRESHOLD {
        let color = EXHAUST[rng.index(EXHAUST.len())];
        state
            .particles
            .add(state.ball.center(), color, AMBIENT_LIFETIME, rng);
    }

    state.particles.advance();
    state.time_ticks += 1;

    events
}

/// Re-center the ball with a random serve and mark the restart with sparks
fn serve<R: RandomSource + ?Sized>(state: &mut GameState, rng: &mut R) {
    let dx = SERVE_DX[rng.index(SERVE_DX.len())];
    let dy = SERVE_DY[rng.index(SERVE_DY.len())];
    state.ball.serve(Vec2::new(dx, dy));

    let (count, lifetime) = GOAL_BURST;
    state
        .particles
        .burst(count, field_center(), SPARK, lifetime, rng);
}
