//! Content factory for loading data files from one directory.

use std::path::{Path, PathBuf};

use party_core::GameConfig;

use crate::loaders::{ConfigLoader, LoadResult, WordPoolLoader};
use crate::words::WordPool;

/// Content factory that loads game content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── config.toml
/// └── words.ron
/// ```
///
/// Both files are optional; the `_or_default` helpers fall back to the
/// built-in values when a file does not exist.
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    pub const CONFIG_FILE: &'static str = "config.toml";
    pub const WORDS_FILE: &'static str = "words.ron";

    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Load game configuration from `config.toml`.
    pub fn load_config(&self) -> LoadResult<GameConfig> {
        ConfigLoader::load(&self.data_dir.join(Self::CONFIG_FILE))
    }

    pub fn load_config_or_default(&self) -> LoadResult<GameConfig> {
        let path = self.data_dir.join(Self::CONFIG_FILE);
        if path.exists() {
            ConfigLoader::load(&path)
        } else {
            Ok(GameConfig::default())
        }
    }

    /// Load a custom fallback pool from `words.ron`.
    pub fn load_word_pool(&self) -> LoadResult<WordPool> {
        WordPoolLoader::load(&self.data_dir.join(Self::WORDS_FILE))
    }

    pub fn load_word_pool_or_builtin(&self) -> LoadResult<WordPool> {
        let path = self.data_dir.join(Self::WORDS_FILE);
        if path.exists() {
            WordPoolLoader::load(&path)
        } else {
            Ok(WordPool::builtin())
        }
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}
