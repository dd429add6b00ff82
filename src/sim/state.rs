//! Game state and core simulation types
//!
//! One `GameState` per play session. Every field the tick touches lives here;
//! the catalog and tuning are passed in by reference.

use std::fmt;

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::particle::Particle;
use super::well::GravityWell;
use crate::levels::Rect;
use crate::tuning::Tuning;

/// Why an attempt ended in failure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverReason {
    OutOfBounds,
    Collision,
    EnergyDepleted,
}

impl OverReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            OverReason::OutOfBounds => "Out of bounds",
            OverReason::Collision => "Collision Detected",
            OverReason::EnergyDepleted => "Energy Depleted",
        }
    }
}

impl fmt::Display for OverReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Title screen, nothing simulated yet
    Start,
    /// Active gameplay
    Playing,
    /// Orb reached the goal
    Win,
    /// Attempt failed
    Over(OverReason),
}

/// Things the controller must react to (persistence, logging, audio cues)
#[derive(Debug, Clone, PartialEq)]
pub enum GameEvent {
    Pulse { pos: Vec2 },
    /// Orb touched the goal (reported even if a later check overwrote `Win`)
    Won { level_index: usize, pulses: u32 },
    Lost { level_index: usize, reason: OverReason },
}

/// The player-steered point mass
#[derive(Debug, Clone, PartialEq)]
pub struct Orb {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
}

impl Orb {
    pub fn new(pos: Vec2, radius: f32) -> Self {
        Self {
            pos,
            vel: Vec2::ZERO,
            radius,
        }
    }

    /// Both velocity components below `threshold` in magnitude
    pub fn at_rest(&self, threshold: f32) -> bool {
        self.vel.x.abs() < threshold && self.vel.y.abs() < threshold
    }
}

/// Capture circle
#[derive(Debug, Clone, PartialEq)]
pub struct Goal {
    pub pos: Vec2,
    pub radius: f32,
}

/// Complete session state
#[derive(Debug, Clone)]
pub struct GameState {
    pub tuning: Tuning,
    /// Index into the level catalog
    pub level_index: usize,
    pub level_name: String,
    /// Remaining energy; may dip below zero, display clamps
    pub energy: f32,
    /// Wells launched this attempt (the score, lower is better)
    pub pulse_count: u32,
    pub phase: GamePhase,
    pub orb: Orb,
    pub goal: Goal,
    pub obstacles: Vec<Rect>,
    /// Active wells, oldest first
    pub wells: Vec<GravityWell>,
    /// Visual particles (not gameplay-affecting)
    pub particles: Vec<Particle>,
    /// Playfield size; leaving `[0, w] x [0, h]` loses the attempt
    pub bounds: Vec2,
    /// Frames simulated this attempt
    pub time_ticks: u64,
    /// Undrained events, oldest first
    pub events: Vec<GameEvent>,
    pub(crate) rng: Pcg32,
}

impl GameState {
    /// Create a session on the title screen at `level_index`
    pub fn new(tuning: Tuning, level_index: usize, bounds: Vec2, seed: u64) -> Self {
        let orb_radius = tuning.orb_radius;
        let goal_radius = tuning.goal_radius;
        Self {
            tuning,
            level_index,
            level_name: String::new(),
            energy: 0.0,
            pulse_count: 0,
            phase: GamePhase::Start,
            orb: Orb::new(Vec2::ZERO, orb_radius),
            goal: Goal {
                pos: Vec2::ZERO,
                radius: goal_radius,
            },
            obstacles: Vec::new(),
            wells: Vec::new(),
            particles: Vec::new(),
            bounds,
            time_ticks: 0,
            events: Vec::new(),
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Energy as shown to the player
    pub fn energy_display(&self) -> u32 {
        self.energy.max(0.0).floor() as u32
    }

    pub fn is_playing(&self) -> bool {
        self.phase == GamePhase::Playing
    }

    /// Take all pending events
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}
