//! Game controller
//!
//! Owns the session, the level catalog and the progress store. Routes player
//! actions into the simulation and applies simulation events to storage.

use glam::Vec2;

use crate::consts::LOW_ENERGY;
use crate::levels::LevelDefinition;
use crate::persistence::{Progress, ProgressStore};
use crate::sim::{self, GameEvent, GamePhase, GameState};
use crate::tuning::Tuning;

/// Overlay screen to show (one per non-playing phase)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Start,
    Win,
    Over,
    /// No overlay while playing
    None,
}

impl Screen {
    /// DOM id of the overlay element
    pub fn element_id(&self) -> Option<&'static str> {
        match self {
            Screen::Start => Some("startScreen"),
            Screen::Win => Some("winScreen"),
            Screen::Over => Some("overScreen"),
            Screen::None => None,
        }
    }
}

/// Everything the DOM HUD displays
#[derive(Debug, Clone, PartialEq)]
pub struct Hud {
    pub level_name: String,
    pub energy: u32,
    /// Energy is running low (HUD switches to the danger color)
    pub energy_low: bool,
    pub pulses: u32,
    pub best: Option<u32>,
    pub screen: Screen,
    /// "1 PULSE" / "N PULSES"
    pub final_score: String,
    pub over_reason: Option<&'static str>,
}

impl Hud {
    pub fn best_label(&self) -> String {
        match self.best {
            Some(best) => format!("Best: {best}"),
            None => "Best: --".to_string(),
        }
    }
}

pub struct Game<S> {
    state: GameState,
    levels: Vec<LevelDefinition>,
    progress: Progress<S>,
}

impl<S: ProgressStore> Game<S> {
    /// Create a game on the title screen, resuming at the saved level
    pub fn new(
        levels: Vec<LevelDefinition>,
        tuning: Tuning,
        progress: Progress<S>,
        bounds: Vec2,
        seed: u64,
    ) -> Self {
        let level_index = progress.level_index();
        log::info!(
            "Resuming at level {} of {} (seed {})",
            level_index + 1,
            levels.len(),
            seed
        );
        Self {
            state: GameState::new(tuning, level_index, bounds, seed),
            levels,
            progress,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Direct access for debug tooling and scripted scenarios
    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    pub fn levels(&self) -> &[LevelDefinition] {
        &self.levels
    }

    pub fn progress(&self) -> &Progress<S> {
        &self.progress
    }

    pub fn phase(&self) -> GamePhase {
        self.state.phase
    }

    /// (Re)start the current level
    pub fn start_game(&mut self) {
        sim::start_game(&mut self.state, &self.levels);
        log::info!(
            "Starting level {}: {}",
            self.state.level_index + 1,
            self.state.level_name
        );
    }

    /// Retry after a loss (same as a restart)
    pub fn retry(&mut self) {
        self.start_game();
    }

    /// Advance to the next level (wrapping to the first), save, and start it
    pub fn next_level(&mut self) {
        let mut next = self.state.level_index + 1;
        if next >= self.levels.len() {
            log::info!("All levels cleared, looping back to the first");
            next = 0;
        }
        self.state.level_index = next;
        self.progress.save_level_index(next);
        self.start_game();
    }

    /// Pointer/touch down at canvas coordinates
    pub fn handle_pointer(&mut self, x: f32, y: f32) -> bool {
        let launched = sim::pulse(&mut self.state, Vec2::new(x, y));
        if launched {
            log::debug!(
                "Pulse {} at ({x:.0}, {y:.0}), energy left {}",
                self.state.pulse_count,
                self.state.energy_display()
            );
        }
        launched
    }

    /// Playfield resized (canvas size in pixels)
    pub fn resize(&mut self, width: f32, height: f32) {
        self.state.bounds = Vec2::new(width, height);
    }

    /// Advance one frame and apply its outcome
    pub fn update(&mut self) {
        sim::tick(&mut self.state);
        for event in self.state.drain_events() {
            match event {
                GameEvent::Won {
                    level_index,
                    pulses,
                } => {
                    log::info!("Level {} goal reached in {} pulses", level_index + 1, pulses);
                    self.progress.record_best(level_index, pulses);
                }
                GameEvent::Lost {
                    level_index,
                    reason,
                } => {
                    log::info!("Level {} failed: {}", level_index + 1, reason);
                }
                GameEvent::Pulse { .. } => {}
            }
        }
    }

    pub fn hud(&self) -> Hud {
        let state = &self.state;
        let level_name = self
            .levels
            .get(state.level_index)
            .map(|l| l.name.clone())
            .unwrap_or_else(|| "Final Frontier".to_string());
        let (screen, over_reason) = match state.phase {
            GamePhase::Start => (Screen::Start, None),
            GamePhase::Playing => (Screen::None, None),
            GamePhase::Win => (Screen::Win, None),
            GamePhase::Over(reason) => (Screen::Over, Some(reason.as_str())),
        };
        let unit = if state.pulse_count == 1 { "PULSE" } else { "PULSES" };

        Hud {
            level_name,
            energy: state.energy_display(),
            energy_low: state.energy < LOW_ENERGY,
            pulses: state.pulse_count,
            best: self.progress.best(state.level_index),
            screen,
            final_score: format!("{} {}", state.pulse_count, unit),
            over_reason,
        }
    }
}
