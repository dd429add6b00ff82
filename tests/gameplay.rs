//! Gameplay properties driven through the public API

use glam::Vec2;
use proptest::prelude::*;

use neon_gravity::persistence::{MemoryStore, Progress};
use neon_gravity::sim::{self, GamePhase, GameState, OverReason};
use neon_gravity::{Game, LevelDefinition, Rect, Tuning, levels};

const BOUNDS: Vec2 = Vec2::new(800.0, 600.0);

fn open_field() -> Vec<LevelDefinition> {
    vec![LevelDefinition {
        name: "Open".to_string(),
        start: Vec2::new(400.0, 300.0),
        goal: Vec2::new(400.0, 50.0),
        obstacles: Vec::new(),
        energy: 100.0,
    }]
}

fn playing(levels: &[LevelDefinition], seed: u64) -> GameState {
    let mut state = GameState::new(Tuning::default(), 0, BOUNDS, seed);
    sim::start_game(&mut state, levels);
    state
}

#[test]
fn orb_on_goal_wins_first_time_with_zero_pulses() {
    let mut game = Game::new(
        levels::builtin(),
        Tuning::default(),
        Progress::new(MemoryStore::new()),
        BOUNDS,
        1,
    );
    game.start_game();
    assert_eq!(game.state().orb.pos, Vec2::new(100.0, 300.0));
    assert_eq!(game.state().goal.pos, Vec2::new(700.0, 300.0));
    assert!(game.state().obstacles.is_empty());
    assert_eq!(game.state().energy, 100.0);

    let goal = game.state().goal.pos;
    game.state_mut().orb.pos = goal;
    game.update();
    assert_eq!(game.phase(), GamePhase::Win);
    assert_eq!(game.state().pulse_count, 0);
    assert_eq!(game.progress().best(0), Some(0));
}

#[test]
fn single_pulse_win_is_recorded_as_best() {
    let mut game = Game::new(
        open_field(),
        Tuning::default(),
        Progress::new(MemoryStore::new()),
        BOUNDS,
        9,
    );
    game.start_game();
    // A well just inside the capture circle pulls the orb straight up into it
    game.handle_pointer(400.0, 70.0);
    let mut frames = 0;
    while game.phase() == GamePhase::Playing && frames < 2000 {
        game.update();
        frames += 1;
    }
    assert_eq!(game.phase(), GamePhase::Win);
    assert_eq!(game.progress().best(0), Some(1));
}

#[test]
fn start_game_is_idempotent() {
    let levels = levels::builtin();
    let mut state = playing(&levels, 5);
    sim::pulse(&mut state, Vec2::new(150.0, 280.0));
    for _ in 0..10 {
        sim::tick(&mut state);
    }

    sim::start_game(&mut state, &levels);
    let first = (
        state.energy,
        state.pulse_count,
        state.wells.len(),
        state.particles.len(),
        state.orb.clone(),
    );
    sim::start_game(&mut state, &levels);
    let second = (
        state.energy,
        state.pulse_count,
        state.wells.len(),
        state.particles.len(),
        state.orb.clone(),
    );
    assert_eq!(first, second);
    assert_eq!(first.0, 100.0);
    assert_eq!(first.1, 0);
}

#[test]
fn well_exactly_at_reach_applies_no_force() {
    let levels = open_field();
    let mut state = playing(&levels, 2);
    let reach = state.tuning.well_reach();
    sim::pulse(&mut state, Vec2::new(400.0 + reach, 300.0));
    sim::tick(&mut state);
    assert_eq!(state.orb.vel, Vec2::ZERO);
}

#[test]
fn touching_obstacle_edge_is_not_a_collision() {
    let mut levels = open_field();
    levels[0].obstacles.push(Rect::new(408.0, 250.0, 40.0, 100.0));
    let mut state = playing(&levels, 2);
    sim::tick(&mut state);
    assert_eq!(state.phase, GamePhase::Playing);
}

proptest! {
    #[test]
    fn faded_entities_never_survive_a_tick(
        pulses in prop::collection::vec((0.0f32..800.0, 0.0f32..600.0, 0u32..40), 0..8),
        seed in any::<u64>(),
    ) {
        let levels = open_field();
        let mut state = playing(&levels, seed);
        for (x, y, wait) in pulses {
            sim::pulse(&mut state, Vec2::new(x, y));
            for _ in 0..wait {
                if !state.is_playing() {
                    break;
                }
                sim::tick(&mut state);
                prop_assert!(state.wells.iter().all(|w| w.life > 0.0));
                prop_assert!(state.particles.iter().all(|p| p.life > 0.0));
            }
        }
    }

    #[test]
    fn energy_only_drops_by_pulse_cost(
        pulses in prop::collection::vec((0.0f32..800.0, 0.0f32..600.0), 1..15),
        seed in any::<u64>(),
    ) {
        let levels = open_field();
        let mut state = playing(&levels, seed);
        for (x, y) in pulses {
            let before = state.energy;
            let launched = sim::pulse(&mut state, Vec2::new(x, y));
            if launched {
                prop_assert_eq!(state.energy, before - 10.0);
            } else {
                prop_assert_eq!(state.energy, before);
            }
            let before_tick = state.energy;
            sim::tick(&mut state);
            prop_assert_eq!(state.energy, before_tick);
        }
    }

    #[test]
    fn depleted_energy_at_rest_ends_the_attempt(
        x in 100.0f32..700.0,
        y in 150.0f32..550.0,
        energy in -20.0f32..=0.0,
        vx in -0.05f32..0.05,
        vy in -0.05f32..0.05,
    ) {
        let levels = open_field();
        let mut state = playing(&levels, 3);
        state.orb.pos = Vec2::new(x, y);
        state.orb.vel = Vec2::new(vx, vy);
        state.goal.pos = Vec2::new(-500.0, -500.0);
        state.energy = energy;
        sim::tick(&mut state);
        prop_assert_eq!(state.phase, GamePhase::Over(OverReason::EnergyDepleted));
    }

    #[test]
    fn leaving_the_field_loses(
        along in 100.0f32..500.0,
        depth in 0.0f32..5.0,
        speed in 10.0f32..40.0,
        side in 0usize..4,
    ) {
        let levels = open_field();
        let mut state = playing(&levels, 4);
        state.goal.pos = Vec2::new(400.0, 300.0);
        let (pos, vel) = match side {
            0 => (Vec2::new(depth, along), Vec2::new(-speed, 0.0)),
            1 => (Vec2::new(800.0 - depth, along), Vec2::new(speed, 0.0)),
            2 => (Vec2::new(along, depth), Vec2::new(0.0, -speed)),
            _ => (Vec2::new(along, 600.0 - depth), Vec2::new(0.0, speed)),
        };
        state.orb.pos = pos;
        state.orb.vel = vel;
        sim::tick(&mut state);
        prop_assert_eq!(state.phase, GamePhase::Over(OverReason::OutOfBounds));
    }

    #[test]
    fn reaching_the_goal_wins(
        angle in 0.0f32..std::f32::consts::TAU,
        dist in 0.0f32..27.0,
    ) {
        let mut game = Game::new(
            open_field(),
            Tuning::default(),
            Progress::new(MemoryStore::new()),
            BOUNDS,
            6,
        );
        game.start_game();
        let goal = game.state().goal.pos;
        let mut state = game.state().clone();
        state.orb.pos = goal + Vec2::from_angle(angle) * dist;
        sim::tick(&mut state);
        prop_assert_eq!(state.phase, GamePhase::Win);
    }
}
