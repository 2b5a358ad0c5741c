use indexmap::IndexMap;

use crate::error::EnhancerResult;

use super::SettingsStorage;

/// In-process slot store used by tests and headless hosts.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    slots: IndexMap<String, String>,
    write_count: usize,
}

impl MemoryStorage {
    /// Creates a store with one slot pre-populated.
    #[must_use]
    pub fn with_slot(key: impl Into<String>, value: impl Into<String>) -> Self {
        let mut slots = IndexMap::new();
        slots.insert(key.into(), value.into());
        Self {
            slots,
            write_count: 0,
        }
    }

    #[must_use]
    pub fn raw(&self, key: &str) -> Option<&str> {
        self.slots.get(key).map(String::as_str)
    }

    #[must_use]
    pub fn write_count(&self) -> usize {
        self.write_count
    }
}

impl SettingsStorage for MemoryStorage {
    fn read(&self, key: &str) -> EnhancerResult<Option<String>> {
        Ok(self.slots.get(key).cloned())
    }

    fn write(&mut self, key: &str, value: &str) -> EnhancerResult<()> {
        self.slots.insert(key.to_owned(), value.to_owned());
        self.write_count += 1;
        Ok(())
    }
}
