//! Neon Gravity - steer a drifting orb into the goal with gravity wells
//!
//! Core modules:
//! - `sim`: Deterministic simulation (wells, orb integration, win/lose checks)
//! - `levels`: Read-only level catalog
//! - `game`: Controller tying the simulation to the progress store
//! - `persistence`: Progress store (LocalStorage on web, in-memory elsewhere)
//! - `renderer`: WebGPU rendering pipeline
//! - `tuning`: Data-driven game balance

pub mod error;
pub mod game;
pub mod levels;
pub mod persistence;
pub mod renderer;
pub mod settings;
pub mod sim;
pub mod tuning;

pub use error::GameError;
pub use game::{Game, Hud, Screen};
pub use levels::{LevelDefinition, Rect};
pub use settings::{QualityPreset, Settings};
pub use tuning::Tuning;

/// Game configuration constants (defaults for [`Tuning`])
pub mod consts {
    /// Gravity well influence radius (force reaches out to twice this)
    pub const WELL_RADIUS: f32 = 120.0;
    /// Peak well strength at full life
    pub const WELL_STRENGTH: f32 = 1.2;
    /// Life lost by a well every frame
    pub const WELL_DECAY: f32 = 0.02;
    /// Distance scale of the force falloff: force / (d / FALLOFF + 1)
    pub const WELL_FALLOFF: f32 = 50.0;

    /// Orb collision radius
    pub const ORB_RADIUS: f32 = 8.0;
    /// Per-frame velocity multiplier
    pub const ORB_DAMPING: f32 = 0.985;

    /// Goal capture radius
    pub const GOAL_RADIUS: f32 = 20.0;

    /// Energy spent per pulse
    pub const PULSE_COST: f32 = 10.0;
    /// Flash particles spawned per pulse
    pub const FLASH_PARTICLES: usize = 10;
    /// Orb speed (|vx| + |vy|) above which a trail particle is emitted
    pub const TRAIL_THRESHOLD: f32 = 0.5;
    /// Per-axis speed below which the orb counts as at rest
    pub const REST_THRESHOLD: f32 = 0.1;
    /// Energy below which the HUD shows the danger color
    pub const LOW_ENERGY: f32 = 30.0;
}
