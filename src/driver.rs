//! Fixed-timestep session driver
//!
//! Owns one game, its random source and its controls. Frames of any length
//! are converted into whole simulation ticks; rendering reads the state
//! between ticks and never mutates it.

use crate::consts::*;
use crate::input::{Controls, Key, autopilot};
use crate::renderer::{DrawList, Frame, compose};
use crate::settings::Settings;
use crate::sim::{GameEvent, GameState, RandomSource, tick};

/// A running game instance
pub struct Session<R: RandomSource> {
    state: GameState,
    rng: R,
    settings: Settings,
    controls: Controls,
    accumulator: f32,
    /// Both paddles are driven by the autopilot
    demo: bool,
}

impl<R: RandomSource> Session<R> {
    pub fn new(rng: R, settings: Settings) -> Self {
        Self {
            state: GameState::with_particle_limit(settings.max_particles()),
            rng,
            settings,
            controls: Controls::new(),
            accumulator: 0.0,
            demo: false,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn set_demo(&mut self, demo: bool) {
        self.demo = demo;
        self.controls.release_all();
    }

    pub fn key_down(&mut self, key: Key) {
        self.controls.key_down(key);
    }

    pub fn key_up(&mut self, key: Key) {
        self.controls.key_up(key);
    }

    /// Run one simulation tick immediately
    pub fn step(&mut self) -> Vec<GameEvent> {
        let input = if self.demo {
            autopilot(&self.state)
        } else {
            self.controls.tick_input()
        };
        let events = tick(&mut self.state, &input, &mut self.rng);
        for event in &events {
            match event {
                GameEvent::Goal { scorer } => log::info!(
                    "Goal for {} - score {}:{}",
                    scorer.as_str(),
                    self.state.score.left,
                    self.state.score.right
                ),
                GameEvent::PaddleBounce { side, speed } => {
                    log::debug!("{} return, ball speed {:.2}", side.as_str(), speed)
                }
                GameEvent::WallBounce { pos } => {
                    log::trace!("Wall bounce at ({:.1}, {:.1})", pos.x, pos.y)
                }
            }
        }
        events
    }

    /// Advance by `dt` seconds of wall-clock time
    ///
    /// Runs as many fixed ticks as fit, at most `MAX_SUBSTEPS`; the remainder
    /// carries over to the next call.
    pub fn update(&mut self, dt: f32) -> Vec<GameEvent> {
        if !dt.is_finite() {
            log::warn!("Ignoring non-finite frame time {}", dt);
            return Vec::new();
        }
        let dt = dt.clamp(0.0, MAX_FRAME_DT);
        self.accumulator += dt;

        let mut events = Vec::new();
        let mut substeps = 0;
        while self.accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
            events.extend(self.step());
            self.accumulator -= SIM_DT;
            substeps += 1;
        }
        if substeps == MAX_SUBSTEPS && self.accumulator >= SIM_DT {
            log::warn!("Simulation falling behind, dropping {:.3}s", self.accumulator);
            self.accumulator = 0.0;
        }
        events
    }

    /// Snapshot for a renderer or scoreboard
    pub fn frame(&self) -> Frame {
        Frame::capture(&self.state)
    }

    /// Draw calls for the current state
    pub fn draw(&self) -> DrawList {
        compose(&self.state, &self.settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{ScriptedRandom, seeded};

    fn quiet_session() -> Session<ScriptedRandom> {
        Session::new(ScriptedRandom::constant(0.25), Settings::default())
    }

    #[test]
    fn test_update_runs_whole_ticks() {
        let mut session = quiet_session();
        session.update(0.01);
        assert_eq!(session.state().time_ticks, 0);
        session.update(0.01);
        assert_eq!(session.state().time_ticks, 1);
        session.update(0.05);
        assert_eq!(session.state().time_ticks, 4);
    }

    #[test]
    fn test_update_caps_substeps() {
        let mut session = quiet_session();
        session.update(MAX_FRAME_DT);
        assert_eq!(session.state().time_ticks, MAX_SUBSTEPS as u64);

        // The backlog past the cap is dropped, not replayed
        session.update(0.0);
        assert_eq!(session.state().time_ticks, MAX_SUBSTEPS as u64);

        // Oversized frames are clamped first, then capped the same way
        session.update(1000.0);
        assert_eq!(session.state().time_ticks, 2 * MAX_SUBSTEPS as u64);
    }

    #[test]
    fn test_non_finite_dt_is_ignored() {
        let mut session = quiet_session();
        session.update(f32::NAN);
        session.update(f32::INFINITY);
        assert_eq!(session.state().time_ticks, 0);

        // Still ticking normally afterwards
        session.update(0.02);
        assert_eq!(session.state().time_ticks, 1);
    }

    #[test]
    fn test_keys_move_paddles() {
        let mut session = quiet_session();
        session.key_down(Key::S);
        session.key_down(Key::ArrowUp);
        session.step();
        session.step();
        assert_eq!(session.state().left.y, 270.0);
        assert_eq!(session.state().right.y, 230.0);

        session.key_up(Key::S);
        session.step();
        assert_eq!(session.state().left.y, 270.0);
    }

    #[test]
    fn test_particle_limit_from_settings() {
        let settings = Settings {
            particles: false,
            ..Settings::default()
        };
        let mut session = Session::new(ScriptedRandom::constant(0.9), settings);
        for _ in 0..10 {
            session.step();
        }
        assert!(session.state().particles.is_empty());
    }

    #[test]
    fn test_demo_keeps_rallying() {
        let mut session = Session::new(seeded(7), Settings::default());
        session.set_demo(true);
        let mut returns = 0;
        for _ in 0..600 {
            returns += session
                .step()
                .iter()
                .filter(|e| matches!(e, GameEvent::PaddleBounce { .. }))
                .count();
        }
        assert!(returns > 0);
        assert!(!session.draw().is_empty());
        assert_eq!(session.frame().phase, 600);
    }
}
