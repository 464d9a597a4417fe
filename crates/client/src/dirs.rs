//! Platform-specific directories.

use std::env;
use std::path::PathBuf;

const APP_NAME: &str = "familytime";

/// Log directory.
///
/// - macOS: `~/Library/Caches/familytime/logs`
/// - Linux: `~/.cache/familytime/logs` (or `$XDG_CACHE_HOME/familytime/logs`)
/// - Windows: `%LOCALAPPDATA%\familytime\cache\logs`
/// - Fallback: `/tmp/familytime/logs`
pub fn log_dir() -> PathBuf {
    directories::ProjectDirs::from("", "", APP_NAME)
        .map(|dirs| dirs.cache_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("/tmp").join(APP_NAME))
        .join("logs")
}

/// Directory holding preferences and optional content files.
///
/// `PARTY_DATA_DIR` wins; otherwise the platform data directory, falling
/// back to `./familytime_data`.
pub fn data_dir() -> PathBuf {
    if let Some(dir) = env::var_os("PARTY_DATA_DIR") {
        return PathBuf::from(dir);
    }

    directories::ProjectDirs::from("", "", APP_NAME)
        .map(|dirs| dirs.data_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("./familytime_data"))
}
