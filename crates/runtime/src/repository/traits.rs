//! Repository contracts for the three preference records.

use serde::Serialize;
use serde::de::DeserializeOwned;

use super::error::{RepositoryError, Result};
use super::types::{Settings, SettingsPatch, keys};

/// Flat key-value storage of JSON documents.
///
/// Implementations only move strings around; [`PreferenceStore`] is provided
/// on top of it for every `RecordStore`.
pub trait RecordStore: Send + Sync {
    /// Returns the stored document, or `None` if the key was never written.
    fn read(&self, key: &'static str) -> Result<Option<String>>;

    /// Replaces the stored document.
    fn write(&self, key: &'static str, json: &str) -> Result<()>;
}

/// Typed access to player names, settings and word history.
///
/// Reads happen once at session start; every change is written through
/// immediately.
pub trait PreferenceStore: Send + Sync {
    fn load_player_names(&self) -> Result<Option<Vec<String>>>;

    fn save_player_names(&self, names: &[String]) -> Result<()>;

    /// Stored settings, or the defaults if nothing was stored yet.
    fn load_settings(&self) -> Result<Settings>;

    /// Merges `patch` over the stored settings and returns the result.
    fn update_settings(&self, patch: &SettingsPatch) -> Result<Settings>;

    /// Newest first.
    fn load_word_history(&self) -> Result<Vec<String>>;

    fn save_word_history(&self, words: &[String]) -> Result<()>;
}

fn read_json<S, T>(store: &S, key: &'static str) -> Result<Option<T>>
where
    S: RecordStore + ?Sized,
    T: DeserializeOwned,
{
    match store.read(key)? {
        Some(json) => serde_json::from_str(&json)
            .map(Some)
            .map_err(|e| RepositoryError::json(key, e)),
        None => Ok(None),
    }
}

fn write_json<S, T>(store: &S, key: &'static str, value: &T) -> Result<()>
where
    S: RecordStore + ?Sized,
    T: Serialize + ?Sized,
{
    let json = serde_json::to_string(value).map_err(|e| RepositoryError::json(key, e))?;
    store.write(key, &json)
}

impl<S: RecordStore> PreferenceStore for S {
    fn load_player_names(&self) -> Result<Option<Vec<String>>> {
        read_json(self, keys::PLAYER_NAMES)
    }

    fn save_player_names(&self, names: &[String]) -> Result<()> {
        write_json(self, keys::PLAYER_NAMES, names)
    }

    fn load_settings(&self) -> Result<Settings> {
        Ok(read_json(self, keys::SETTINGS)?.unwrap_or_default())
    }

    fn update_settings(&self, patch: &SettingsPatch) -> Result<Settings> {
        let mut settings = self.load_settings()?;
        patch.apply_to(&mut settings);
        write_json(self, keys::SETTINGS, &settings)?;
        Ok(settings)
    }

    fn load_word_history(&self) -> Result<Vec<String>> {
        Ok(read_json(self, keys::WORD_HISTORY)?.unwrap_or_default())
    }

    fn save_word_history(&self, words: &[String]) -> Result<()> {
        write_json(self, keys::WORD_HISTORY, words)
    }
}
