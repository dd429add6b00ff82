//! Progress persistence
//!
//! A string key-value store holding the current level index and the best
//! (lowest) pulse count per level:
//! - `<namespace>_progress` → level index
//! - `<best_prefix>_<level>` → best pulse count
//!
//! Values are plain decimal strings so saves from the original browser game
//! keep working. Writes are fire-and-forget: failures are logged, never fatal.

#[cfg(target_arch = "wasm32")]
mod local;

#[cfg(target_arch = "wasm32")]
pub use local::LocalStore;

use std::collections::HashMap;

use crate::error::GameError;

/// Backing key-value storage
pub trait ProgressStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), GameError>;
}

/// In-memory store (native builds and tests)
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ProgressStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), GameError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Key layout
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageKeys {
    pub namespace: String,
    pub best_prefix: String,
}

impl Default for StorageKeys {
    fn default() -> Self {
        Self {
            namespace: "neon_gravity".to_string(),
            best_prefix: "neon_best".to_string(),
        }
    }
}

impl StorageKeys {
    pub fn progress(&self) -> String {
        format!("{}_progress", self.namespace)
    }

    pub fn best(&self, level_index: usize) -> String {
        format!("{}_{}", self.best_prefix, level_index)
    }
}

/// Level progress and per-level best scores on top of a [`ProgressStore`]
#[derive(Debug, Clone)]
pub struct Progress<S> {
    store: S,
    keys: StorageKeys,
}

impl<S: ProgressStore> Progress<S> {
    pub fn new(store: S) -> Self {
        Self::with_keys(store, StorageKeys::default())
    }

    pub fn with_keys(store: S, keys: StorageKeys) -> Self {
        Self { store, keys }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Saved level index (0 when missing or unreadable)
    pub fn level_index(&self) -> usize {
        match self.store.get(&self.keys.progress()) {
            Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
                log::warn!("Ignoring unreadable progress value {:?}", raw);
                0
            }),
            None => 0,
        }
    }

    pub fn save_level_index(&mut self, level_index: usize) {
        self.write(&self.keys.progress(), &level_index.to_string());
    }

    /// Best (lowest) pulse count for a level, if it was ever completed
    pub fn best(&self, level_index: usize) -> Option<u32> {
        self.store
            .get(&self.keys.best(level_index))
            .and_then(|raw| raw.trim().parse().ok())
    }

    /// Record a completion; returns true when it set a new best
    pub fn record_best(&mut self, level_index: usize, pulses: u32) -> bool {
        let improved = self.best(level_index).is_none_or(|best| pulses < best);
        if improved {
            self.write(&self.keys.best(level_index), &pulses.to_string());
            log::info!("New best for level {}: {} pulses", level_index + 1, pulses);
        }
        improved
    }

    fn write(&mut self, key: &str, value: &str) {
        if let Err(e) = self.store.set(key, value) {
            log::warn!("Could not save {key}: {e}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keys_match_browser_saves() {
        let keys = StorageKeys::default();
        assert_eq!(keys.progress(), "neon_gravity_progress");
        assert_eq!(keys.best(2), "neon_best_2");
    }

    #[test]
    fn test_level_index_defaults_to_zero() {
        let mut store = MemoryStore::new();
        assert_eq!(Progress::new(store.clone()).level_index(), 0);
        store.set("neon_gravity_progress", "banana").unwrap();
        assert_eq!(Progress::new(store.clone()).level_index(), 0);
        store.set("neon_gravity_progress", "2").unwrap();
        assert_eq!(Progress::new(store).level_index(), 2);
    }

    #[test]
    fn test_record_best_keeps_lowest() {
        let mut progress = Progress::new(MemoryStore::new());
        assert_eq!(progress.best(0), None);
        assert!(progress.record_best(0, 5));
        assert!(!progress.record_best(0, 7));
        assert!(!progress.record_best(0, 5));
        assert!(progress.record_best(0, 3));
        assert_eq!(progress.best(0), Some(3));
        assert_eq!(progress.best(1), None);
    }

    #[test]
    fn test_zero_pulse_win_is_recorded() {
        let mut progress = Progress::new(MemoryStore::new());
        assert!(progress.record_best(0, 0));
        assert_eq!(progress.store().get("neon_best_0").as_deref(), Some("0"));
    }

    #[test]
    fn test_custom_namespace() {
        let keys = StorageKeys {
            namespace: "demo".to_string(),
            best_prefix: "demo_best".to_string(),
        };
        let mut progress = Progress::with_keys(MemoryStore::new(), keys);
        progress.save_level_index(1);
        progress.record_best(1, 4);
        assert_eq!(progress.store().get("demo_progress").as_deref(), Some("1"));
        assert_eq!(progress.store().get("demo_best_1").as_deref(), Some("4"));
    }

    struct FailingStore;

    impl ProgressStore for FailingStore {
        fn get(&self, _key: &str) -> Option<String> {
            None
        }
        fn set(&mut self, _key: &str, _value: &str) -> Result<(), GameError> {
            Err(GameError::Storage("quota exceeded".to_string()))
        }
    }

    #[test]
    fn test_write_failure_is_not_fatal() {
        let mut progress = Progress::new(FailingStore);
        progress.save_level_index(2);
        assert!(progress.record_best(0, 1));
        assert_eq!(progress.level_index(), 0);
    }
}
