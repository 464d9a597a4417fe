//! In-memory preference store for tests and ephemeral sessions.

use std::collections::HashMap;
use std::sync::RwLock;

use super::error::{RepositoryError, Result};
use super::traits::RecordStore;

/// Keeps every record in a map for the lifetime of the process.
#[derive(Default)]
pub struct InMemoryPreferenceStore {
    records: RwLock<HashMap<&'static str, String>>,
}

impl InMemoryPreferenceStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of records written so far.
    pub fn len(&self) -> usize {
        self.records.read().map(|r| r.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl RecordStore for InMemoryPreferenceStore {
    fn read(&self, key: &'static str) -> Result<Option<String>> {
        let records = self
            .records
            .read()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        Ok(records.get(key).cloned())
    }

    fn write(&self, key: &'static str, json: &str) -> Result<()> {
        let mut records = self
            .records
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        records.insert(key, json.to_owned());
        Ok(())
    }
}
