//! Scene composition: game state to draw calls
//!
//! Everything here is a pure function of the state and the phase counter, so
//! the same state always yields the same draw list.

use glam::Vec2;

use super::sink::{DrawList, RenderSink};
use crate::consts::*;
use crate::settings::Settings;
use crate::sim::color::{self, Color, Rgba};
use crate::sim::{GameState, Paddle, Scoreboard, Side};

/// Number of vertical grid lines across the field
pub const GRID_LINES: usize = 32;
pub const GRID_SPACING: f32 = 25.0;
/// Grid line alpha when pulsing is disabled
const GRID_STILL_ALPHA: u8 = 60;
/// Ticks for a grid line to go dim -> bright -> dim
const GRID_PULSE_PERIOD: u64 = 200;

const GLOW_LAYERS: u32 = 3;
const PADDLE_CORNER: f32 = 5.0;
const TRAIL_MAX_ALPHA: f32 = 200.0;
const TRAIL_MAX_SIZE: f32 = 12.0;

/// Alpha of grid line `index` at `phase`, in [50, 150)
pub fn grid_alpha(phase: u64, index: usize) -> u8 {
    let half = GRID_PULSE_PERIOD / 2;
    let t = (phase + index as u64 * 7) % GRID_PULSE_PERIOD;
    let tri = if t < half { t } else { GRID_PULSE_PERIOD - 1 - t };
    (50 + tri) as u8
}

/// Night-sky backdrop
pub fn backdrop<S: RenderSink + ?Sized>(sink: &mut S) {
    sink.vertical_gradient(
        Vec2::ZERO,
        Vec2::new(FIELD_WIDTH, FIELD_HEIGHT),
        &[
            (0.0, Rgba::new(10, 0, 30, 255)),
            (0.3, Rgba::new(30, 0, 50, 255)),
            (0.6, Rgba::new(50, 0, 70, 255)),
            (1.0, Rgba::new(0, 0, 0, 255)),
        ],
    );
}

/// Pulsing neon grid rising from the horizon
pub fn grid<S: RenderSink + ?Sized>(phase: u64, still: bool, sink: &mut S) {
    for i in 0..GRID_LINES {
        let alpha = if still {
            GRID_STILL_ALPHA
        } else {
            grid_alpha(phase, i)
        };
        let x = i as f32 * GRID_SPACING;
        sink.line(
            Vec2::new(x, FIELD_HEIGHT),
            Vec2::new(x, 200.0),
            2.0,
            color::CYAN.with_alpha(alpha),
        );
    }
}

/// Mountain silhouette closed along the bottom edge
pub fn mountains<S: RenderSink + ?Sized>(skyline: &[Vec2], sink: &mut S) {
    let mut points = Vec::with_capacity(skyline.len() + 2);
    points.push(Vec2::new(0.0, FIELD_HEIGHT));
    points.extend_from_slice(skyline);
    points.push(Vec2::new(FIELD_WIDTH, FIELD_HEIGHT));
    sink.polygon(&points, color::MAGENTA.with_alpha(100));
}

/// Half-set sun glow below the horizon
pub fn sun<S: RenderSink + ?Sized>(sink: &mut S) {
    sink.ellipse(
        Vec2::new(0.0, 400.0),
        Vec2::new(FIELD_WIDTH, 800.0),
        color::MAGENTA.with_alpha(80),
    );
}

/// Ball trail; sample `i` of `n` (0 = newest) has alpha and size scaled by i/n
pub fn ball_trail<S: RenderSink + ?Sized>(trail: &[Vec2], sink: &mut S) {
    let n = trail.len() as f32;
    for (i, center) in trail.iter().enumerate() {
        let t = i as f32 / n;
        let size = TRAIL_MAX_SIZE * t;
        sink.ellipse(
            *center - Vec2::splat(size / 2.0),
            Vec2::splat(size),
            color::CYAN.with_alpha((TRAIL_MAX_ALPHA * t) as u8),
        );
    }
}

fn player_color(side: Side) -> Color {
    match side {
        Side::Left => color::LEFT_PLAYER,
        Side::Right => color::RIGHT_PLAYER,
    }
}

fn glow_alpha(layer: u32) -> u8 {
    (100 - layer * 30) as u8
}

/// Paddle with three glow layers behind the body
pub fn paddle<S: RenderSink + ?Sized>(paddle: &Paddle, sink: &mut S) {
    let color = player_color(paddle.side);
    let top_left = Vec2::new(paddle.x(), paddle.y);
    let size = Vec2::new(PADDLE_WIDTH, PADDLE_HEIGHT);

    for i in (1..=GLOW_LAYERS).rev() {
        let grow = i as f32;
        sink.rounded_rect(
            top_left - Vec2::splat(grow),
            size + Vec2::splat(grow * 2.0),
            PADDLE_CORNER,
            color.with_alpha(glow_alpha(i)),
        );
    }
    sink.rounded_rect(top_left, size, PADDLE_CORNER, color.opaque());
}

/// Ball with a white glow
pub fn ball<S: RenderSink + ?Sized>(pos: Vec2, sink: &mut S) {
    for i in (1..=GLOW_LAYERS).rev() {
        let grow = i as f32;
        sink.ellipse(
            pos - Vec2::splat(grow),
            Vec2::splat(BALL_SIZE + grow * 2.0),
            color::WHITE.with_alpha(glow_alpha(i)),
        );
    }
    sink.ellipse(pos, Vec2::splat(BALL_SIZE), color::WHITE.opaque());
}

/// Score labels with a drop shadow
pub fn scores<S: RenderSink + ?Sized>(score: &Scoreboard, sink: &mut S) {
    let shadow = color::BLACK.with_alpha(150);
    let labels = [
        (Side::Left, Vec2::new(200.0, 50.0)),
        (Side::Right, Vec2::new(550.0, 50.0)),
    ];
    for (side, pos) in labels {
        let text = format!("{}: {}", side.as_str(), score.get(side));
        sink.text(pos - Vec2::new(5.0, 3.0), &text, shadow);
        sink.text(pos, &text, player_color(side).opaque());
    }
}

/// Draw the whole frame back to front
pub fn draw_scene<S: RenderSink + ?Sized>(state: &GameState, settings: &Settings, sink: &mut S) {
    backdrop(sink);
    grid(state.time_ticks, settings.reduced_motion, sink);
    mountains(&state.skyline, sink);
    sun(sink);
    if settings.trails {
        ball_trail(&state.ball.trail, sink);
    }
    paddle(&state.left, sink);
    paddle(&state.right, sink);
    ball(state.ball.pos, sink);
    if settings.show_scores {
        scores(&state.score, sink);
    }
    if settings.particles {
        state.particles.render(sink);
    }
}

/// Record the frame into a fresh draw list
pub fn compose(state: &GameState, settings: &Settings) -> DrawList {
    let mut list = DrawList::new();
    draw_scene(state, settings, &mut list);
    list
}
