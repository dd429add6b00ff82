//! Cosmetic particles (never read by gameplay logic)

use glam::Vec2;
use rand::Rng;

use super::decay::Decay;

/// Which effect spawned the particle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParticleColor {
    /// Burst at a pulse point (#00f2ff)
    Flash,
    /// Orb wake (#ff00e5)
    Trail,
}

impl ParticleColor {
    pub fn rgb(&self) -> [f32; 3] {
        match self {
            ParticleColor::Flash => [0.0, 0.949, 1.0],
            ParticleColor::Trail => [1.0, 0.0, 0.898],
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    pub pos: Vec2,
    pub vel: Vec2,
    pub color: ParticleColor,
    /// Radius in pixels, [1, 4)
    pub size: f32,
    /// 0-1, decreases over time
    pub life: f32,
    pub decay: f32,
}

impl Particle {
    pub fn spawn<R: Rng>(pos: Vec2, color: ParticleColor, rng: &mut R) -> Self {
        Self {
            pos,
            vel: Vec2::new(rng.random_range(-1.0..1.0), rng.random_range(-1.0..1.0)),
            color,
            size: rng.random_range(1.0..4.0),
            life: 1.0,
            decay: rng.random_range(0.01..0.03),
        }
    }
}

impl Decay for Particle {
    fn advance(&mut self) {
        self.pos += self.vel;
        self.life -= self.decay;
    }

    fn life(&self) -> f32 {
        self.life
    }
}
