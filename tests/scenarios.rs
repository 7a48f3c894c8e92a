use glam::Vec2;
use synthwave_pong::consts::*;
use synthwave_pong::sim::{
    Ball, GameEvent, GameState, ParticleSystem, ScriptedRandom, Side, TickInput, color, seeded,
    tick,
};
use synthwave_pong::{Session, Settings};

#[test]
fn free_flight_moves_by_velocity() {
    let mut state = GameState::new();
    let mut rng = seeded(1);
    let events = tick(&mut state, &TickInput::default(), &mut rng);

    assert!(events.is_empty());
    assert_eq!(state.ball.pos, Vec2::new(406.0, 306.0));
    assert_eq!(state.score.left, 0);
    assert_eq!(state.score.right, 0);
}

#[test]
fn ball_past_left_edge_scores_for_right() {
    let mut state = GameState::new();
    state.ball = Ball::new(Vec2::new(2.0, 300.0), Vec2::new(-6.0, 0.0));
    let mut rng = seeded(2);
    let events = tick(&mut state, &TickInput::default(), &mut rng);

    assert_eq!(state.score.right, 1);
    assert_eq!(state.score.left, 0);
    assert_eq!(state.ball.pos, Vec2::new(400.0, 300.0));
    assert!([6.0, -6.0].contains(&state.ball.vel.x));
    assert!([4.0, -4.0, 5.0, -5.0, 6.0, -6.0].contains(&state.ball.vel.y));
    assert!(state.ball.trail.is_empty());
    assert!(events.contains(&GameEvent::Goal {
        scorer: Side::Right
    }));
}

#[test]
fn particle_with_lifetime_one_lives_one_advance() {
    let mut particles = ParticleSystem::new();
    let mut rng = seeded(3);
    particles.add(Vec2::new(50.0, 50.0), color::YELLOW, 1, &mut rng);
    assert_eq!(particles.len(), 1);
    particles.advance();
    assert!(particles.is_empty());
}

#[test]
fn wall_bounce_keeps_speed() {
    let mut state = GameState::new();
    state.ball = Ball::new(Vec2::new(300.0, 586.0), Vec2::new(-5.0, 6.0));
    let mut rng = ScriptedRandom::constant(0.1);
    tick(&mut state, &TickInput::default(), &mut rng);

    assert_eq!(state.ball.vel, Vec2::new(-5.0, -6.0));
}

#[test]
fn goal_burst_appears_at_center() {
    let mut state = GameState::new();
    state.left.y = 0.0;
    state.ball = Ball::new(Vec2::new(1.0, 300.0), Vec2::new(-6.0, 0.0));
    // Zero jitter keeps every spark on the spawn point until advanced
    let mut rng = ScriptedRandom::constant(0.5);
    tick(&mut state, &TickInput::default(), &mut rng);

    let sparks: Vec<_> = state
        .particles
        .iter()
        .filter(|p| p.max_lifetime == GOAL_BURST.1)
        .collect();
    assert_eq!(sparks.len(), GOAL_BURST.0);
    assert!(sparks.iter().all(|p| p.pos == Vec2::new(400.0, 300.0)));
}

#[test]
fn rally_speeds_up_every_return() {
    let mut state = GameState::new();
    let mut rng = seeded(11);
    let mut last_speed = state.ball.vel.x.abs();
    let mut returns = 0;

    for _ in 0..2000 {
        // Keep both paddles under the ball so every crossing is a return
        state.left.y = (state.ball.pos.y - 50.0).clamp(0.0, PADDLE_MAX_Y);
        state.right.y = state.left.y;
        let before = state.ball.vel.x.abs();
        for event in tick(&mut state, &TickInput::default(), &mut rng) {
            match event {
                GameEvent::PaddleBounce { speed, .. } => {
                    assert_eq!(speed, before * PADDLE_BOOST);
                    assert!(speed > last_speed);
                    last_speed = speed;
                    returns += 1;
                }
                // A miss at the corner restarts the rally
                GameEvent::Goal { .. } => last_speed = 0.0,
                GameEvent::WallBounce { .. } => {}
            }
        }
        if returns >= 5 {
            break;
        }
    }
    assert!(returns >= 5);
}

#[test]
fn seeded_sessions_are_identical() {
    let mut a = Session::new(seeded(2024), Settings::default());
    let mut b = Session::new(seeded(2024), Settings::default());
    a.set_demo(true);
    b.set_demo(true);

    for _ in 0..300 {
        a.update(1.0 / 60.0);
        b.update(1.0 / 60.0);
    }
    assert_eq!(a.frame(), b.frame());
    assert_eq!(a.draw(), b.draw());
}
