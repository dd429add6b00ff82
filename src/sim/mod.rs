//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One unit time step per frame
//! - Seeded RNG only (and only for cosmetic particles)
//! - No rendering, storage or platform dependencies

pub mod collision;
pub mod decay;
pub mod particle;
pub mod state;
pub mod tick;
pub mod well;

pub use collision::{circle_box_overlaps_rect, circles_touch, out_of_bounds};
pub use decay::{Decay, advance_all};
pub use particle::{Particle, ParticleColor};
pub use state::{GameEvent, GamePhase, GameState, Goal, Orb, OverReason};
pub use tick::{next_level, pulse, start_game, tick};
pub use well::GravityWell;
