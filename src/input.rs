//! Keyboard mapping and demo-mode autopilot
//!
//! W/S drive the left paddle, the arrow keys drive the right one.

use serde::{Deserialize, Serialize};

use crate::consts::PADDLE_HEIGHT;
use crate::sim::{GameState, Paddle, PaddleInput, TickInput};

/// Keys the game reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    W,
    S,
    ArrowUp,
    ArrowDown,
    Other,
}

impl Key {
    /// Map a DOM/winit style key name
    pub fn from_name(name: &str) -> Self {
        match name {
            "w" | "W" | "KeyW" => Key::W,
            "s" | "S" | "KeyS" => Key::S,
            "ArrowUp" | "Up" => Key::ArrowUp,
            "ArrowDown" | "Down" => Key::ArrowDown,
            _ => Key::Other,
        }
    }
}

/// Held-key state, sampled once per tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Controls {
    held: TickInput,
}

impl Controls {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn key_down(&mut self, key: Key) {
        self.set(key, true);
    }

    pub fn key_up(&mut self, key: Key) {
        self.set(key, false);
    }

    fn set(&mut self, key: Key, pressed: bool) {
        match key {
            Key::W => self.held.left.up = pressed,
            Key::S => self.held.left.down = pressed,
            Key::ArrowUp => self.held.right.up = pressed,
            Key::ArrowDown => self.held.right.down = pressed,
            Key::Other => {}
        }
    }

    /// Release everything (e.g. on focus loss)
    pub fn release_all(&mut self) {
        self.held = TickInput::default();
    }

    pub fn tick_input(&self) -> TickInput {
        self.held
    }
}

/// Ball offset from paddle center the autopilot tolerates before moving
pub const AUTOPILOT_DEAD_ZONE: f32 = 20.0;

/// Steer one paddle toward the ball's height
fn track(paddle: &Paddle, ball_y: f32) -> PaddleInput {
    let offset = ball_y - (paddle.y + PADDLE_HEIGHT / 2.0);
    PaddleInput {
        up: offset < -AUTOPILOT_DEAD_ZONE,
        down: offset > AUTOPILOT_DEAD_ZONE,
    }
}

/// Idle/demo mode - both paddles follow the ball
pub fn autopilot(state: &GameState) -> TickInput {
    let ball_y = state.ball.center().y;
    TickInput {
        left: track(&state.left, ball_y),
        right: track(&state.right, ball_y),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{Ball, Side};
    use glam::Vec2;

    #[test]
    fn test_keys_set_and_clear_flags() {
        let mut controls = Controls::new();
        controls.key_down(Key::W);
        controls.key_down(Key::ArrowDown);
        let input = controls.tick_input();
        assert!(input.left.up && !input.left.down);
        assert!(!input.right.up && input.right.down);

        controls.key_up(Key::W);
        controls.key_down(Key::Other);
        let input = controls.tick_input();
        assert!(!input.left.up);
        assert!(input.right.down);

        controls.release_all();
        assert_eq!(controls.tick_input(), TickInput::default());
    }

    #[test]
    fn test_key_names() {
        assert_eq!(Key::from_name("KeyW"), Key::W);
        assert_eq!(Key::from_name("s"), Key::S);
        assert_eq!(Key::from_name("ArrowUp"), Key::ArrowUp);
        assert_eq!(Key::from_name("Enter"), Key::Other);
    }

    #[test]
    fn test_autopilot_tracks_ball() {
        let mut state = GameState::new();
        state.ball = Ball::new(Vec2::new(400.0, 50.0), Vec2::ZERO);
        state.right.y = 0.0;
        let input = autopilot(&state);
        assert_eq!(
            input.paddle(Side::Left),
            PaddleInput {
                up: true,
                down: false
            }
        );
        // Ball center 55 vs paddle center 50: inside the dead zone
        assert_eq!(input.paddle(Side::Right), PaddleInput::default());

        state.ball.pos.y = 500.0;
        let input = autopilot(&state);
        assert!(input.left.down && input.right.down);
    }
}
