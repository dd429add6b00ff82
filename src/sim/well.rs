//! Gravity wells
//!
//! A well is a passive force-field descriptor: the tick computes the pull,
//! the well only fades.

use glam::Vec2;

use super::decay::Decay;
use crate::tuning::Tuning;

/// A short-lived attractor placed by the player
#[derive(Debug, Clone, PartialEq)]
pub struct GravityWell {
    pub pos: Vec2,
    pub radius: f32,
    pub strength: f32,
    /// 1.0 when placed, removed once <= 0
    pub life: f32,
    pub decay: f32,
}

impl GravityWell {
    pub fn new(pos: Vec2, tuning: &Tuning) -> Self {
        Self {
            pos,
            radius: tuning.well_radius,
            strength: tuning.well_strength,
            life: 1.0,
            decay: tuning.well_decay,
        }
    }

    /// Velocity change this well imparts on a body at `target`
    ///
    /// Zero outside the reach (`2 * radius`, exclusive) and when the body sits
    /// exactly on the well center.
    pub fn pull_on(&self, target: Vec2, falloff: f32) -> Vec2 {
        let delta = self.pos - target;
        let dist = delta.length();
        if dist >= self.radius * 2.0 || dist == 0.0 {
            return Vec2::ZERO;
        }
        let force = (self.strength * self.life) / (dist / falloff + 1.0);
        delta / dist * force
    }
}

impl Decay for GravityWell {
    fn advance(&mut self) {
        self.life -= self.decay;
    }

    fn life(&self) -> f32 {
        self.life
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::WELL_FALLOFF;

    #[test]
    fn test_defaults() {
        let well = GravityWell::new(Vec2::new(5.0, 6.0), &Tuning::default());
        assert_eq!(well.radius, 120.0);
        assert_eq!(well.strength, 1.2);
        assert_eq!(well.life, 1.0);
        assert_eq!(well.decay, 0.02);
    }

    #[test]
    fn test_pull_points_at_well() {
        let well = GravityWell::new(Vec2::new(100.0, 0.0), &Tuning::default());
        let pull = well.pull_on(Vec2::ZERO, WELL_FALLOFF);
        assert!(pull.x > 0.0);
        assert!(pull.y.abs() < 1e-6);
        // 1.2 / (100 / 50 + 1)
        assert!((pull.length() - 0.4).abs() < 1e-5);
    }

    #[test]
    fn test_no_pull_at_reach_boundary() {
        let well = GravityWell::new(Vec2::new(240.0, 0.0), &Tuning::default());
        assert_eq!(well.pull_on(Vec2::ZERO, WELL_FALLOFF), Vec2::ZERO);
    }

    #[test]
    fn test_no_pull_at_center() {
        let well = GravityWell::new(Vec2::new(10.0, 10.0), &Tuning::default());
        let pull = well.pull_on(Vec2::new(10.0, 10.0), WELL_FALLOFF);
        assert_eq!(pull, Vec2::ZERO);
        assert!(pull.is_finite());
    }

    #[test]
    fn test_fades_out_in_fifty_frames() {
        let mut well = GravityWell::new(Vec2::ZERO, &Tuning::default());
        let mut frames = 0;
        while well.is_alive() {
            well.advance();
            frames += 1;
        }
        // Floating-point accumulation may leave a sliver after the 50th step
        assert!((50..=51).contains(&frames));
    }
}
