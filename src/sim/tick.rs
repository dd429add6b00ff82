//! Per-frame simulation tick and player actions
//!
//! Time advances one unit per animation frame; velocities are in pixels per
//! frame.

use glam::Vec2;

use super::collision::{circle_box_overlaps_rect, circles_touch, out_of_bounds};
use super::decay::advance_all;
use super::particle::{Particle, ParticleColor};
use super::state::{GameEvent, GamePhase, GameState, Orb, OverReason};
use super::well::GravityWell;
use crate::levels::LevelDefinition;

/// Reset the session to the start of the current level and begin playing
///
/// An out-of-range level index wraps to 0. Does nothing with an empty catalog.
pub fn start_game(state: &mut GameState, levels: &[LevelDefinition]) {
    if state.level_index >= levels.len() {
        state.level_index = 0;
    }
    let Some(level) = levels.get(state.level_index) else {
        log::warn!("Cannot start: level catalog is empty");
        return;
    };

    state.level_name = level.name.clone();
    state.orb = Orb::new(level.start, state.tuning.orb_radius);
    state.goal.pos = level.goal;
    state.goal.radius = state.tuning.goal_radius;
    state.obstacles = level.obstacles.clone();
    state.energy = level.energy;
    state.pulse_count = 0;
    state.wells.clear();
    state.particles.clear();
    state.events.clear();
    state.time_ticks = 0;
    state.phase = GamePhase::Playing;
}

/// Advance to the following level (wrapping to the first) and start it
pub fn next_level(state: &mut GameState, levels: &[LevelDefinition]) {
    state.level_index += 1;
    if state.level_index >= levels.len() {
        state.level_index = 0;
    }
    start_game(state, levels);
}

/// Launch a gravity well at `pos`
///
/// Returns false (and changes nothing) unless playing with energy left.
pub fn pulse(state: &mut GameState, pos: Vec2) -> bool {
    if !state.is_playing() || state.energy <= 0.0 {
        return false;
    }

    state.wells.push(GravityWell::new(pos, &state.tuning));
    state.energy -= state.tuning.pulse_cost;
    state.pulse_count += 1;

    for _ in 0..state.tuning.flash_particles {
        let particle = Particle::spawn(pos, ParticleColor::Flash, &mut state.rng);
        state.particles.push(particle);
    }
    state.events.push(GameEvent::Pulse { pos });
    true
}

/// Advance the game state by one frame
///
/// The outcome checks all run every frame in a fixed order (bounds, goal,
/// obstacles, energy); a later one overwrites the phase set by an earlier one.
pub fn tick(state: &mut GameState) {
    if !state.is_playing() {
        return;
    }
    state.time_ticks += 1;

    // Well pull
    let falloff = state.tuning.well_falloff;
    for well in &state.wells {
        state.orb.vel += well.pull_on(state.orb.pos, falloff);
    }
    advance_all(&mut state.wells);

    // Drag, then integrate
    state.orb.vel *= state.tuning.damping;
    state.orb.pos += state.orb.vel;

    if out_of_bounds(state.orb.pos, state.bounds) {
        state.phase = GamePhase::Over(OverReason::OutOfBounds);
    }

    if circles_touch(
        state.orb.pos,
        state.orb.radius,
        state.goal.pos,
        state.goal.radius,
    ) {
        state.phase = GamePhase::Win;
        // Reported now: a later check may still overwrite the phase this frame
        state.events.push(GameEvent::Won {
            level_index: state.level_index,
            pulses: state.pulse_count,
        });
    }

    if state
        .obstacles
        .iter()
        .any(|obs| circle_box_overlaps_rect(state.orb.pos, state.orb.radius, obs))
    {
        state.phase = GamePhase::Over(OverReason::Collision);
    }

    // Trail
    if state.orb.vel.x.abs() + state.orb.vel.y.abs() > state.tuning.trail_threshold {
        let particle = Particle::spawn(state.orb.pos, ParticleColor::Trail, &mut state.rng);
        state.particles.push(particle);
    }
    advance_all(&mut state.particles);

    if state.energy <= 0.0 && state.orb.at_rest(state.tuning.rest_threshold) {
        state.phase = GamePhase::Over(OverReason::EnergyDepleted);
    }

    if let GamePhase::Over(reason) = state.phase {
        state.events.push(GameEvent::Lost {
            level_index: state.level_index,
            reason,
        });
    }
}
