//! Browser LocalStorage backend

use super::ProgressStore;
use crate::error::GameError;

/// LocalStorage handle (falls back to a no-op when storage is unavailable)
pub struct LocalStore {
    storage: Option<web_sys::Storage>,
}

impl LocalStore {
    pub fn open() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();
        if storage.is_none() {
            log::warn!("LocalStorage unavailable, progress will not be saved");
        }
        Self { storage }
    }
}

impl ProgressStore for LocalStore {
    fn get(&self, key: &str) -> Option<String> {
        self.storage.as_ref()?.get_item(key).ok().flatten()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), GameError> {
        let Some(storage) = &self.storage else {
            return Err(GameError::Storage("LocalStorage unavailable".to_string()));
        };
        storage
            .set_item(key, value)
            .map_err(|e| GameError::Storage(format!("{e:?}")))
    }
}
