//! File-based preference store.

use std::fs;
use std::path::{Path, PathBuf};

use super::error::{RepositoryError, Result};
use super::traits::RecordStore;

/// Stores each record as `<key>.json` inside one directory.
///
/// Writes go to a temp file first and are renamed into place, so a crash
/// mid-write leaves the previous document intact.
pub struct FilePreferenceStore {
    base_dir: PathBuf,
}

impl FilePreferenceStore {
    /// Create the store, creating `base_dir` if needed.
    pub fn new(base_dir: impl AsRef<Path>) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        fs::create_dir_all(&base_dir).map_err(RepositoryError::Io)?;
        Ok(Self { base_dir })
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    fn record_path(&self, key: &str) -> PathBuf {
        self.base_dir.join(format!("{key}.json"))
    }
}

impl RecordStore for FilePreferenceStore {
    fn read(&self, key: &'static str) -> Result<Option<String>> {
        let path = self.record_path(key);

        if !path.exists() {
            return Ok(None);
        }

        let json = fs::read_to_string(&path).map_err(RepositoryError::Io)?;
        tracing::debug!("Loaded {} from {}", key, path.display());
        Ok(Some(json))
    }

    fn write(&self, key: &'static str, json: &str) -> Result<()> {
        let path = self.record_path(key);
        let temp_path = path.with_extension("json.tmp");

        fs::write(&temp_path, json).map_err(RepositoryError::Io)?;
        fs::rename(&temp_path, &path).map_err(RepositoryError::Io)?;

        tracing::debug!("Saved {} to {}", key, path.display());
        Ok(())
    }
}
