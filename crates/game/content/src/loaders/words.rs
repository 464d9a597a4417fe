//! Custom word pool loader.

use std::path::Path;

use party_core::WordPair;
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};
use crate::words::WordPool;

/// Word pool structure for RON files.
///
/// ```ron
/// (
///     pairs: [
///         (secret_word: "Kaffee", hint_word: "Wach", category: "Getränke"),
///     ],
/// )
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WordCatalog {
    pub pairs: Vec<WordPair>,
}

/// Loader for word pools from RON files.
pub struct WordPoolLoader;

impl WordPoolLoader {
    pub fn load(path: &Path) -> LoadResult<WordPool> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    /// Parses a catalog, trimming every field and dropping pairs without a
    /// secret word.
    pub fn parse(content: &str) -> LoadResult<WordPool> {
        let catalog: WordCatalog = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse word pool RON: {}", e))?;

        let pairs: Vec<WordPair> = catalog
            .pairs
            .iter()
            .map(WordPair::trimmed)
            .filter(|pair| !pair.secret_word.is_empty())
            .collect();

        if pairs.is_empty() {
            anyhow::bail!("word pool contains no usable pairs");
        }
        Ok(WordPool::new(pairs))
    }
}
