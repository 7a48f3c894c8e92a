//! Rendering module
//!
//! Backend-neutral: the game describes each frame as draw calls on a
//! [`RenderSink`], and a windowing layer turns them into pixels.

pub mod frame;
pub mod shapes;
pub mod sink;

pub use frame::Frame;
pub use shapes::{compose, draw_scene};
pub use sink::{DrawCmd, DrawList, RenderSink};
