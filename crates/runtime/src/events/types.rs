use serde::Serialize;

use party_core::{GameVariant, Phase, TransitionOutcome, TransitionPhase};

/// Round lifecycle and engine results.
#[derive(Debug, Clone, Serialize)]
pub enum RoundEvent {
    /// A game was picked from the hub (`Some`) or left (`None`).
    GameSelected { variant: Option<GameVariant> },

    /// The engine accepted an action.
    Transitioned {
        action: &'static str,
        outcome: TransitionOutcome,
    },

    /// The engine refused an action. The state did not change.
    Rejected {
        action: &'static str,
        phase: TransitionPhase,
        status: Phase,
        error: String,
    },
}

/// Discussion countdown progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TimerEvent {
    Started { epoch: u32, seconds: u32 },
    Tick { epoch: u32, remaining: u32 },
    Expired { epoch: u32 },
    /// The discussion ended before the countdown did.
    Cancelled { epoch: u32 },
}

/// Non-blocking messages for the player.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Notice {
    /// The generation service failed and a pool word was used instead.
    GenerationFallback { reason: String },
    /// No word pair could be drawn; the round did not start.
    StartAborted { reason: String },
    /// A preference could not be written. The session continues.
    PersistenceFailed { reason: String },
}
