use tracing::{debug, warn};

use crate::core::SettingsRecord;
use crate::error::EnhancerResult;
use crate::persistence::SettingsStorage;

/// Reads and writes the single persisted settings slot.
pub struct PreferenceStore<S: SettingsStorage> {
    storage: S,
    key: String,
}

impl<S: SettingsStorage> PreferenceStore<S> {
    #[must_use]
    pub fn new(storage: S, key: impl Into<String>) -> Self {
        Self {
            storage,
            key: key.into(),
        }
    }

    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    #[must_use]
    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn storage_mut(&mut self) -> &mut S {
        &mut self.storage
    }

    #[must_use]
    pub fn into_storage(self) -> S {
        self.storage
    }

    /// Returns the persisted record merged over defaults.
    ///
    /// Never fails: an absent, unreadable or corrupt slot yields the default
    /// record.
    #[must_use]
    pub fn load(&self) -> SettingsRecord {
        let raw = match self.storage.read(&self.key) {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                debug!(key = %self.key, "no persisted settings, using defaults");
                return SettingsRecord::default();
            }
            Err(err) => {
                warn!(key = %self.key, error = %err, "settings slot unreadable, using defaults");
                return SettingsRecord::default();
            }
        };

        match SettingsRecord::merge_over_defaults(&raw) {
            Ok(record) => record,
            Err(err) => {
                warn!(key = %self.key, error = %err, "discarding corrupt persisted settings");
                SettingsRecord::default()
            }
        }
    }

    /// Replaces the persisted slot with the complete record.
    pub fn save(&mut self, record: &SettingsRecord) -> EnhancerResult<()> {
        let payload = record.to_json()?;
        self.storage.write(&self.key, &payload)?;
        debug!(key = %self.key, "persisted settings");
        Ok(())
    }
}
