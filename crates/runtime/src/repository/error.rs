//! Error types raised by repository implementations.

use thiserror::Error;

/// Errors surfaced by repository implementations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("preference store lock was poisoned")]
    LockPoisoned,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error in {key}: {message}")]
    Json { key: &'static str, message: String },
}

impl RepositoryError {
    pub(crate) fn json(key: &'static str, error: serde_json::Error) -> Self {
        Self::Json {
            key,
            message: error.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, RepositoryError>;
