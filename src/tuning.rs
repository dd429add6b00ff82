//! Data-driven game balance
//!
//! Every gameplay constant the tick reads lives here so a level pack can ship
//! its own balance as JSON. Missing fields fall back to the defaults in
//! [`crate::consts`].

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::GameError;

/// Gameplay constants
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    pub well_radius: f32,
    pub well_strength: f32,
    pub well_decay: f32,
    /// Distance scale of the well force falloff
    pub well_falloff: f32,
    pub orb_radius: f32,
    /// Velocity multiplier applied once per frame
    pub damping: f32,
    pub goal_radius: f32,
    pub pulse_cost: f32,
    pub flash_particles: usize,
    pub trail_threshold: f32,
    pub rest_threshold: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            well_radius: WELL_RADIUS,
            well_strength: WELL_STRENGTH,
            well_decay: WELL_DECAY,
            well_falloff: WELL_FALLOFF,
            orb_radius: ORB_RADIUS,
            damping: ORB_DAMPING,
            goal_radius: GOAL_RADIUS,
            pulse_cost: PULSE_COST,
            flash_particles: FLASH_PARTICLES,
            trail_threshold: TRAIL_THRESHOLD,
            rest_threshold: REST_THRESHOLD,
        }
    }
}

impl Tuning {
    /// Parse tuning from JSON; absent fields keep their defaults
    pub fn from_json(json: &str) -> Result<Self, GameError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        Ok(tuning)
    }

    /// Reach of a well's force field (exclusive)
    pub fn well_reach(&self) -> f32 {
        self.well_radius * 2.0
    }
}
