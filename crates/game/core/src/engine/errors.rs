//! Error types for the transition pipeline.

use crate::action::RoundError;
use crate::error::ErrorSeverity;

/// Identifies which stage of the transition pipeline produced an error.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TransitionPhase {
    PreValidate,
    Apply,
    PostValidate,
}

impl TransitionPhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransitionPhase::PreValidate => "pre_validate",
            TransitionPhase::Apply => "apply",
            TransitionPhase::PostValidate => "post_validate",
        }
    }
}

/// Associates a transition phase with the underlying error.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TransitionPhaseError<E> {
    pub phase: TransitionPhase,
    pub error: E,
}

impl<E> TransitionPhaseError<E> {
    pub fn new(phase: TransitionPhase, error: E) -> Self {
        Self { phase, error }
    }
}

impl<E: std::fmt::Display> std::fmt::Display for TransitionPhaseError<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} failed: {}", self.phase.as_str(), self.error)
    }
}

impl<E: std::fmt::Display + std::fmt::Debug> std::error::Error for TransitionPhaseError<E> {}

/// Error surfaced while executing an action through the round engine.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{action} action failed: {source}")]
pub struct ExecuteError {
    pub action: &'static str,
    pub source: TransitionPhaseError<RoundError>,
}

impl ExecuteError {
    pub fn new(action: &'static str, source: TransitionPhaseError<RoundError>) -> Self {
        Self { action, source }
    }

    pub fn phase(&self) -> TransitionPhase {
        self.source.phase
    }

    pub fn error(&self) -> &RoundError {
        &self.source.error
    }

    pub fn severity(&self) -> ErrorSeverity {
        self.source.error.severity()
    }

    /// True when the action was refused before any mutation was attempted.
    pub fn is_rejection(&self) -> bool {
        self.phase() == TransitionPhase::PreValidate
    }
}
