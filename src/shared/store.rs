// Preference store: load/save the theme preference in one storage slot

use thiserror::Error;

use super::preference::ThemePreference;
use super::storage::{KeyValueStorage, StorageError};

/// Slot name the preference record is stored under.
pub const PREFERENCES_KEY: &str = "theme-preferences";

#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("failed to read theme preferences: {0}")]
    Read(#[from] ReadFailure),
    #[error("failed to save theme preferences: {0}")]
    Write(#[from] WriteFailure),
}

#[derive(Debug, Error)]
pub enum ReadFailure {
    #[error(transparent)]
    Storage(StorageError),
    #[error("malformed preference data: {0}")]
    Malformed(serde_json::Error),
}

#[derive(Debug, Error)]
pub enum WriteFailure {
    #[error(transparent)]
    Storage(StorageError),
    #[error("could not serialize preferences: {0}")]
    Serialize(serde_json::Error),
}

#[derive(Debug)]
pub struct PreferenceStore<S> {
    storage: S,
    key: String,
}

impl<S: KeyValueStorage> PreferenceStore<S> {
    pub fn new(storage: S) -> Self {
        Self::with_key(storage, PREFERENCES_KEY)
    }

    pub fn with_key(storage: S, key: impl Into<String>) -> Self {
        Self {
            storage,
            key: key.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn storage_mut(&mut self) -> &mut S {
        &mut self.storage
    }

    /// Load the saved preference. Any failure is logged and reported as absent.
    pub fn load(&self) -> Option<ThemePreference> {
        match self.try_load() {
            Ok(pref) => pref,
            Err(e) => {
                log::error!("Error loading theme preferences: {}", e);
                None
            }
        }
    }

    /// Save the preference, overwriting the slot. Failures are logged and dropped.
    pub fn save(&mut self, pref: &ThemePreference) {
        if let Err(e) = self.try_save(pref) {
            log::error!("Error saving theme preferences: {}", e);
        }
    }

    pub fn try_load(&self) -> Result<Option<ThemePreference>, PersistenceError> {
        let raw = self.storage.get(&self.key).map_err(ReadFailure::Storage)?;
        let Some(raw) = raw.filter(|raw| !raw.is_empty()) else {
            log::debug!("No saved theme preferences under {:?}", self.key);
            return Ok(None);
        };

        let pref = serde_json::from_str(&raw).map_err(ReadFailure::Malformed)?;
        Ok(Some(pref))
    }

    pub fn try_save(&mut self, pref: &ThemePreference) -> Result<(), PersistenceError> {
        let content = serde_json::to_string(pref).map_err(WriteFailure::Serialize)?;
        self.storage
            .set(&self.key, &content)
            .map_err(WriteFailure::Storage)?;
        log::trace!("Saved theme preferences: {}", content);
        Ok(())
    }
}
