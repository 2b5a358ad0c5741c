use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tracing::{debug, trace, warn};

use crate::error::{EnhancerError, EnhancerResult};

use super::SettingsStorage;

/// Directory-backed slot store: one `<key>.json` file per slot.
///
/// Writes land in a sibling temp file first and are moved into place with a
/// rename, so readers see either the old payload or the new one.
#[derive(Debug, Clone)]
pub struct FileStorage {
    root: PathBuf,
}

impl FileStorage {
    pub fn new(root: impl Into<PathBuf>) -> EnhancerResult<Self> {
        let root = root.into();
        fs::create_dir_all(&root)?;
        Ok(Self { root })
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn slot_path(&self, key: &str) -> EnhancerResult<PathBuf> {
        validate_slot_key(key)?;
        Ok(self.root.join(format!("{key}.json")))
    }
}

fn validate_slot_key(key: &str) -> EnhancerResult<()> {
    if key.is_empty() {
        return Err(EnhancerError::InvalidData(
            "storage key must not be empty".to_owned(),
        ));
    }
    if !key
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    {
        return Err(EnhancerError::InvalidData(format!(
            "storage key `{key}` may only contain ascii alphanumerics, `-` and `_`"
        )));
    }
    Ok(())
}

impl SettingsStorage for FileStorage {
    fn read(&self, key: &str) -> EnhancerResult<Option<String>> {
        let path = self.slot_path(key)?;
        match fs::read_to_string(&path) {
            Ok(contents) => {
                trace!(path = %path.display(), bytes = contents.len(), "read settings slot");
                Ok(Some(contents))
            }
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    fn write(&mut self, key: &str, value: &str) -> EnhancerResult<()> {
        let path = self.slot_path(key)?;
        let staging = self.root.join(format!("{key}.json.tmp"));
        if let Err(err) = replace_via_staging(&staging, &path, value) {
            if let Err(cleanup) = fs::remove_file(&staging) {
                if cleanup.kind() != io::ErrorKind::NotFound {
                    warn!(path = %staging.display(), error = %cleanup, "staging file left behind");
                }
            }
            return Err(EnhancerError::Storage(format!(
                "failed to write settings slot `{key}` at {}: {err}",
                path.display()
            )));
        }
        debug!(path = %path.display(), bytes = value.len(), "wrote settings slot");
        Ok(())
    }
}

fn replace_via_staging(staging: &Path, path: &Path, value: &str) -> io::Result<()> {
    {
        let mut file = fs::File::create(staging)?;
        file.write_all(value.as_bytes())?;
        file.sync_all()?;
    }
    fs::rename(staging, path)
}
