//! Short-lived visual particles
//!
//! Particles never affect gameplay. They are spawned by game events, pulled
//! down by a constant gravity and removed once their lifetime runs out.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::color::{Color, Rgba};
use super::rng::RandomSource;
use crate::consts::*;
use crate::renderer::RenderSink;

/// Default live-particle limit
pub const MAX_PARTICLES: usize = 500;

/// A particle for visual effects
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    pub color: Color,
    /// Ticks left before removal
    pub lifetime: i32,
    /// Lifetime at spawn, for fading
    pub max_lifetime: i32,
    pub size: f32,
}

impl Particle {
    /// Remaining life as a fraction of the spawn lifetime
    pub fn life_ratio(&self) -> f32 {
        if self.max_lifetime <= 0 {
            return 0.0;
        }
        (self.lifetime as f32 / self.max_lifetime as f32).clamp(0.0, 1.0)
    }

    /// Faded size and color for drawing
    pub fn sprite(&self) -> ParticleSprite {
        let ratio = self.life_ratio();
        ParticleSprite {
            pos: self.pos,
            size: self.size * ratio,
            color: self.color.with_alpha((255.0 * ratio) as u8),
        }
    }
}

/// What a renderer needs to draw one particle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ParticleSprite {
    /// Top-left corner of the bounding box
    pub pos: Vec2,
    pub size: f32,
    pub color: Rgba,
}

/// Owns every live particle, in spawn order
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParticleSystem {
    particles: Vec<Particle>,
    limit: usize,
}

impl Default for ParticleSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl ParticleSystem {
    pub fn new() -> Self {
        Self::with_limit(MAX_PARTICLES)
    }

    /// A limit of zero disables spawning entirely
    pub fn with_limit(limit: usize) -> Self {
        Self {
            particles: Vec::with_capacity(limit.min(MAX_PARTICLES)),
            limit,
        }
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    /// Change the limit, dropping the oldest particles if over it
    pub fn set_limit(&mut self, limit: usize) {
        self.limit = limit;
        if self.particles.len() > limit {
            let excess = self.particles.len() - limit;
            self.particles.drain(..excess);
        }
    }

    /// Spawn one particle with random velocity and size
    ///
    /// Lifetimes below one tick are raised to one, so the particle is drawn
    /// for a single frame and expires on the next advance.
    pub fn add<R: RandomSource + ?Sized>(
        &mut self,
        pos: Vec2,
        color: Color,
        lifetime: i32,
        rng: &mut R,
    ) {
        if self.limit == 0 {
            return;
        }
        if self.particles.len() >= self.limit {
            // Remove oldest particles to make room
            self.particles.remove(0);
        }

        let lifetime = lifetime.max(1);
        let vel = Vec2::new(
            rng.range(-PARTICLE_MAX_SPEED, PARTICLE_MAX_SPEED),
            rng.range(-PARTICLE_MAX_SPEED, PARTICLE_MAX_SPEED),
        );
        let size = rng.range(PARTICLE_MIN_SIZE, PARTICLE_MAX_SIZE);

        self.particles.push(Particle {
            pos,
            vel,
            color,
            lifetime,
            max_lifetime: lifetime,
            size,
        });
    }

    /// Spawn `count` particles at the same point
    pub fn burst<R: RandomSource + ?Sized>(
        &mut self,
        count: usize,
        pos: Vec2,
        color: Color,
        lifetime: i32,
        rng: &mut R,
    ) {
        for _ in 0..count {
            self.add(pos, color, lifetime, rng);
        }
    }

    /// Step every particle one tick and drop the expired ones
    pub fn advance(&mut self) {
        self.particles.retain_mut(|p| {
            p.pos += p.vel;
            p.vel.y += PARTICLE_GRAVITY;
            p.lifetime -= 1;
            p.lifetime > 0
        });
        debug_assert!(self.particles.iter().all(|p| p.lifetime > 0));
    }

    /// Emit one ellipse per live particle
    pub fn render<S: RenderSink + ?Sized>(&self, sink: &mut S) {
        for particle in &self.particles {
            let sprite = particle.sprite();
            sink.ellipse(sprite.pos, Vec2::splat(sprite.size), sprite.color);
        }
    }

    /// Snapshot of every live particle as drawn this frame
    pub fn sprites(&self) -> Vec<ParticleSprite> {
        self.particles.iter().map(Particle::sprite).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Particle> {
        self.particles.iter()
    }

    pub fn as_slice(&self) -> &[Particle] {
        &self.particles
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }
}
