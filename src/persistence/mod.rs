mod file_storage;
mod memory_storage;

pub use file_storage::FileStorage;
pub use memory_storage::MemoryStorage;

use crate::error::EnhancerResult;

/// Key/value slot store backing persisted preferences.
///
/// `write` must replace the prior value as a whole: a `read` issued after
/// `write` returns never observes a partial payload.
pub trait SettingsStorage {
    fn read(&self, key: &str) -> EnhancerResult<Option<String>>;
    fn write(&mut self, key: &str, value: &str) -> EnhancerResult<()>;
}

impl<T: SettingsStorage + ?Sized> SettingsStorage for Box<T> {
    fn read(&self, key: &str) -> EnhancerResult<Option<String>> {
        (**self).read(key)
    }

    fn write(&mut self, key: &str, value: &str) -> EnhancerResult<()> {
        (**self).write(key, value)
    }
}
