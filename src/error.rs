//! Error types for loading configuration and talking to storage.
//!
//! The simulation itself never fails; everything here comes from the edges
//! (file reads, JSON parsing, catalog validation, LocalStorage writes).

use std::fmt;

/// Top-level error enum for Neon Gravity.
#[derive(Debug)]
pub enum GameError {
    /// A level or tuning file could not be read.
    Io(std::io::Error),

    /// Tuning, catalog or settings JSON could not be parsed.
    Json(serde_json::Error),

    /// A level in the catalog is unusable.
    InvalidLevel {
        /// Position of the offending level in the catalog.
        index: usize,
        /// Human-readable description of the problem.
        reason: String,
    },

    /// The catalog has no levels at all.
    EmptyCatalog,

    /// The progress store rejected a write.
    Storage(String),
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::Io(e) => write!(f, "I/O error: {e}"),
            GameError::Json(e) => write!(f, "invalid JSON: {e}"),
            GameError::InvalidLevel { index, reason } => {
                write!(f, "level {index} is invalid: {reason}")
            }
            GameError::EmptyCatalog => write!(f, "level catalog is empty"),
            GameError::Storage(msg) => write!(f, "storage write failed: {msg}"),
        }
    }
}

impl std::error::Error for GameError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GameError::Io(e) => Some(e),
            GameError::Json(e) => Some(e),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for GameError {
    fn from(e: serde_json::Error) -> Self {
        GameError::Json(e)
    }
}

impl From<std::io::Error> for GameError {
    fn from(e: std::io::Error) -> Self {
        GameError::Io(e)
    }
}
