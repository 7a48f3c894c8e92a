//! Collision tests against walls, paddles and goal lines
//!
//! Tests are point-in-band checks on the ball's top-left corner at the end of
//! the move. There is no swept test, so a ball moving faster than a paddle
//! band is wide can pass straight through it.

use glam::Vec2;

use super::state::{Paddle, Side};
use crate::consts::*;

/// Ball is touching the top or bottom edge
#[inline]
pub fn hits_wall(ball_y: f32) -> bool {
    ball_y <= 0.0 || ball_y >= FIELD_HEIGHT - BALL_SIZE
}

/// Which paddle, if any, the ball is in contact with
///
/// The left paddle is checked first.
pub fn paddle_contact(ball_pos: Vec2, left: &Paddle, right: &Paddle) -> Option<Side> {
    if ball_pos.x <= LEFT_HIT_X && left.covers(ball_pos.y) {
        Some(Side::Left)
    } else if ball_pos.x >= RIGHT_HIT_X && right.covers(ball_pos.y) {
        Some(Side::Right)
    } else {
        None
    }
}

/// Player who scores if the ball has crossed a goal line
pub fn goal_scorer(ball_x: f32) -> Option<Side> {
    if ball_x <= 0.0 {
        Some(Side::Right)
    } else if ball_x >= FIELD_WIDTH - BALL_SIZE {
        Some(Side::Left)
    } else {
        None
    }
}

/// Velocity after a paddle return: horizontal direction flips and speeds up
#[inline]
pub fn paddle_return(vel: Vec2) -> Vec2 {
    Vec2::new(vel.x * -PADDLE_BOOST, vel.y)
}

/// Velocity after a wall bounce
#[inline]
pub fn wall_bounce(vel: Vec2) -> Vec2 {
    Vec2::new(vel.x, -vel.y)
}
