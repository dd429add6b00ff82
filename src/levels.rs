//! Level catalog
//!
//! An ordered, read-only list of levels. The built-in catalog ships the three
//! original sectors; custom catalogs can be loaded from JSON.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::error::GameError;

/// Axis-aligned obstacle rectangle (top-left corner + size, canvas pixels)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    pub fn min(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    pub fn max(&self) -> Vec2 {
        Vec2::new(self.x + self.w, self.y + self.h)
    }
}

/// A single level
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LevelDefinition {
    pub name: String,
    /// Orb spawn point
    pub start: Vec2,
    /// Goal center
    pub goal: Vec2,
    #[serde(default)]
    pub obstacles: Vec<Rect>,
    /// Starting energy budget
    pub energy: f32,
}

impl LevelDefinition {
    fn validate(&self, index: usize) -> Result<(), GameError> {
        let invalid = |reason: &str| GameError::InvalidLevel {
            index,
            reason: reason.to_string(),
        };

        if !self.start.is_finite() || !self.goal.is_finite() {
            return Err(invalid("start and goal must be finite"));
        }
        if self.energy.is_nan() || self.energy <= 0.0 {
            return Err(invalid("starting energy must be positive"));
        }
        for obs in &self.obstacles {
            let finite = [obs.x, obs.y, obs.w, obs.h].iter().all(|v| v.is_finite());
            if !finite || obs.w < 0.0 || obs.h < 0.0 {
                return Err(invalid("obstacles need finite, non-negative extents"));
            }
        }
        Ok(())
    }
}

/// The three sectors of the original game
pub fn builtin() -> Vec<LevelDefinition> {
    vec![
        LevelDefinition {
            name: "Sector 01: Initiation".to_string(),
            start: Vec2::new(100.0, 300.0),
            goal: Vec2::new(700.0, 300.0),
            obstacles: Vec::new(),
            energy: 100.0,
        },
        LevelDefinition {
            name: "Sector 02: Corridors".to_string(),
            start: Vec2::new(100.0, 100.0),
            goal: Vec2::new(700.0, 500.0),
            obstacles: vec![
                Rect::new(300.0, 0.0, 50.0, 400.0),
                Rect::new(500.0, 200.0, 50.0, 400.0),
            ],
            energy: 120.0,
        },
        LevelDefinition {
            name: "Sector 03: The Gauntlet".to_string(),
            start: Vec2::new(50.0, 300.0),
            goal: Vec2::new(750.0, 300.0),
            obstacles: vec![
                Rect::new(200.0, 200.0, 400.0, 20.0),
                Rect::new(200.0, 380.0, 400.0, 20.0),
                Rect::new(380.0, 220.0, 40.0, 160.0),
            ],
            energy: 150.0,
        },
    ]
}

/// Parse and validate a catalog from JSON (an array of levels)
pub fn from_json(json: &str) -> Result<Vec<LevelDefinition>, GameError> {
    let levels: Vec<LevelDefinition> = serde_json::from_str(json)?;
    validate(&levels)?;
    log::info!("Loaded level catalog ({} levels)", levels.len());
    Ok(levels)
}

/// Check that a catalog is playable
pub fn validate(levels: &[LevelDefinition]) -> Result<(), GameError> {
    if levels.is_empty() {
        return Err(GameError::EmptyCatalog);
    }
    for (i, level) in levels.iter().enumerate() {
        level.validate(i)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_is_valid() {
        let levels = builtin();
        assert_eq!(levels.len(), 3);
        assert!(validate(&levels).is_ok());
        assert_eq!(levels[0].start, Vec2::new(100.0, 300.0));
        assert_eq!(levels[0].goal, Vec2::new(700.0, 300.0));
        assert!(levels[0].obstacles.is_empty());
        assert_eq!(levels[2].energy, 150.0);
    }

    #[test]
    fn test_from_json() {
        let json = r#"[
            { "name": "Test", "start": [10, 20], "goal": [30, 40], "energy": 50,
              "obstacles": [ { "x": 1, "y": 2, "w": 3, "h": 4 } ] },
            { "name": "Open", "start": [0, 0], "goal": [5, 5], "energy": 10 }
        ]"#;
        let levels = from_json(json).unwrap();
        assert_eq!(levels.len(), 2);
        assert_eq!(levels[0].obstacles[0], Rect::new(1.0, 2.0, 3.0, 4.0));
        assert!(levels[1].obstacles.is_empty());
    }

    #[test]
    fn test_rejects_empty_catalog() {
        assert!(matches!(from_json("[]"), Err(GameError::EmptyCatalog)));
    }

    #[test]
    fn test_rejects_non_positive_energy() {
        let mut levels = builtin();
        levels[1].energy = 0.0;
        assert!(matches!(
            validate(&levels),
            Err(GameError::InvalidLevel { index: 1, .. })
        ));
    }

    #[test]
    fn test_rejects_negative_obstacle() {
        let mut levels = builtin();
        levels[0].obstacles.push(Rect::new(0.0, 0.0, -5.0, 10.0));
        assert!(validate(&levels).is_err());
    }
}
