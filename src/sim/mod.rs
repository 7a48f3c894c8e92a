//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Injected RNG only
//! - Stable particle order (spawn order)
//! - No rendering or platform dependencies beyond the draw sink trait

pub mod collision;
pub mod color;
pub mod particles;
pub mod rng;
pub mod state;
pub mod tick;

pub use collision::{goal_scorer, hits_wall, paddle_contact};
pub use color::{Color, Rgba};
pub use particles::{MAX_PARTICLES, Particle, ParticleSprite, ParticleSystem};
pub use rng::{RandomSource, ScriptedRandom, seeded};
pub use state::{Ball, GameEvent, GameState, Paddle, Scoreboard, Side, skyline};
pub use tick::{PaddleInput, TickInput, tick};
