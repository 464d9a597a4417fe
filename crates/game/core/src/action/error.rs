//! Round rule violations.

use crate::error::ErrorSeverity;
use crate::state::{Phase, PlayerId};

/// Errors raised by round transitions.
///
/// A transition that fails in `pre_validate` never touches the state, and the
/// engine discards the working copy for failures in later stages, so every
/// variant here leaves the caller's state as it was.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum RoundError {
    #[error("{action} is not allowed during {actual}")]
    WrongPhase { action: &'static str, actual: Phase },

    #[error("a round needs 3 to 12 players, got {count}")]
    PlayerCount { count: usize },

    #[error("{count} impostors is invalid for {players} players")]
    ImpostorCount { count: usize, players: usize },

    #[error("invalid setup: {0}")]
    InvalidSetup(&'static str),

    #[error("answer is empty")]
    EmptyAnswer,

    #[error("guess is empty")]
    EmptyGuess,

    #[error("player {0} is not at the table")]
    UnknownPlayer(PlayerId),

    #[error("player {0} is already eliminated")]
    AlreadyEliminated(PlayerId),

    #[error("no vote has been cast")]
    NoVoteRecorded,

    #[error("discussion countdown is not running")]
    TimerNotArmed,

    #[error("tick for countdown {received} but countdown {expected} is running")]
    StaleTimerTick { expected: u32, received: u32 },

    #[error("state invariant violated: {0}")]
    Invariant(&'static str),
}

impl RoundError {
    pub fn wrong_phase(action: &'static str, actual: Phase) -> Self {
        Self::WrongPhase { action, actual }
    }

    pub fn invariant(message: &'static str) -> Self {
        Self::Invariant(message)
    }

    pub fn severity(&self) -> ErrorSeverity {
        use RoundError::*;
        match self {
            TimerNotArmed | StaleTimerTick { .. } => ErrorSeverity::Stale,
            Invariant(_) => ErrorSeverity::Internal,
            WrongPhase { .. }
            | PlayerCount { .. }
            | ImpostorCount { .. }
            | InvalidSetup(_)
            | EmptyAnswer
            | EmptyGuess
            | UnknownPlayer(_)
            | AlreadyEliminated(_)
            | NoVoteRecorded => ErrorSeverity::Validation,
        }
    }
}
