//! Unified error types surfaced by the session API.
//!
//! Wraps failures from worker coordination, the round engine, repositories
//! and word generation so clients can bubble them up with consistent context.
use thiserror::Error;
use tokio::sync::oneshot;

use party_core::ExecuteError;

use super::providers::GenerationError;
pub use crate::repository::RepositoryError;

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("session worker command channel closed")]
    CommandChannelClosed,

    #[error("session worker reply channel closed")]
    ReplyChannelClosed(#[source] oneshot::error::RecvError),

    #[error("session worker join failed")]
    WorkerJoin(#[source] tokio::task::JoinError),

    #[error("no game selected")]
    NoGameSelected,

    /// The engine refused the action; the round state is unchanged.
    #[error(transparent)]
    Rejected(#[from] ExecuteError),

    #[error(transparent)]
    Repository(#[from] RepositoryError),

    #[error("round could not start: {0}")]
    StartAborted(String),

    #[error(transparent)]
    Generation(#[from] GenerationError),
}

impl RuntimeError {
    /// The engine error behind a rejection, if this is one.
    pub fn as_rejection(&self) -> Option<&ExecuteError> {
        match self {
            RuntimeError::Rejected(error) => Some(error),
            _ => None,
        }
    }
}
