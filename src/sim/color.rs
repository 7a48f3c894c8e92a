//! Neon palette shared by the simulation and the renderer

use serde::{Deserialize, Serialize};

/// Opaque RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Attach an alpha channel
    pub const fn with_alpha(self, a: u8) -> Rgba {
        Rgba {
            r: self.r,
            g: self.g,
            b: self.b,
            a,
        }
    }

    pub const fn opaque(self) -> Rgba {
        self.with_alpha(255)
    }
}

/// RGB color with alpha, as handed to a render sink
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }
}

pub const MAGENTA: Color = Color::rgb(255, 0, 255);
pub const CYAN: Color = Color::rgb(0, 255, 255);
pub const YELLOW: Color = Color::rgb(255, 255, 0);
pub const WHITE: Color = Color::rgb(255, 255, 255);
pub const BLACK: Color = Color::rgb(0, 0, 0);

/// Colors used for the ball exhaust
pub const EXHAUST: [Color; 2] = [MAGENTA, CYAN];

/// Left player color (paddle, score, paddle-hit sparks)
pub const LEFT_PLAYER: Color = MAGENTA;
/// Right player color
pub const RIGHT_PLAYER: Color = CYAN;
/// Wall sparks and serve burst
pub const SPARK: Color = YELLOW;
