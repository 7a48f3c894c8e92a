//! Draw primitives handed to a rendering backend

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::sim::color::Rgba;

/// Receiver of 2D draw calls, in painter's order
///
/// Coordinates are playfield pixels with the origin at the top-left.
pub trait RenderSink {
    /// Filled ellipse inscribed in the box at `top_left` with extent `size`
    fn ellipse(&mut self, top_left: Vec2, size: Vec2, color: Rgba);
    fn rounded_rect(&mut self, top_left: Vec2, size: Vec2, radius: f32, color: Rgba);
    /// Filled closed polygon
    fn polygon(&mut self, points: &[Vec2], color: Rgba);
    fn line(&mut self, from: Vec2, to: Vec2, width: f32, color: Rgba);
    /// Text with its baseline starting at `pos`
    fn text(&mut self, pos: Vec2, text: &str, color: Rgba);
    /// Rectangle filled with a top-to-bottom gradient; stop offsets in [0, 1]
    fn vertical_gradient(&mut self, top_left: Vec2, size: Vec2, stops: &[(f32, Rgba)]);
}

/// One recorded draw call
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DrawCmd {
    Ellipse {
        top_left: Vec2,
        size: Vec2,
        color: Rgba,
    },
    RoundedRect {
        top_left: Vec2,
        size: Vec2,
        radius: f32,
        color: Rgba,
    },
    Polygon {
        points: Vec<Vec2>,
        color: Rgba,
    },
    Line {
        from: Vec2,
        to: Vec2,
        width: f32,
        color: Rgba,
    },
    Text {
        pos: Vec2,
        text: String,
        color: Rgba,
    },
    VerticalGradient {
        top_left: Vec2,
        size: Vec2,
        stops: Vec<(f32, Rgba)>,
    },
}

/// Sink that records every call in order
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DrawList {
    commands: Vec<DrawCmd>,
}

impl DrawList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[DrawCmd] {
        &self.commands
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

impl RenderSink for DrawList {
    fn ellipse(&mut self, top_left: Vec2, size: Vec2, color: Rgba) {
        self.commands.push(DrawCmd::Ellipse {
            top_left,
            size,
            color,
        });
    }

    fn rounded_rect(&mut self, top_left: Vec2, size: Vec2, radius: f32, color: Rgba) {
        self.commands.push(DrawCmd::RoundedRect {
            top_left,
            size,
            radius,
            color,
        });
    }

    fn polygon(&mut self, points: &[Vec2], color: Rgba) {
        self.commands.push(DrawCmd::Polygon {
            points: points.to_vec(),
            color,
        });
    }

    fn line(&mut self, from: Vec2, to: Vec2, width: f32, color: Rgba) {
        self.commands.push(DrawCmd::Line {
            from,
            to,
            width,
            color,
        });
    }

    fn text(&mut self, pos: Vec2, text: &str, color: Rgba) {
        self.commands.push(DrawCmd::Text {
            pos,
            text: text.to_owned(),
            color,
        });
    }

    fn vertical_gradient(&mut self, top_left: Vec2, size: Vec2, stops: &[(f32, Rgba)]) {
        self.commands.push(DrawCmd::VerticalGradient {
            top_left,
            size,
            stops: stops.to_vec(),
        });
    }
}
