//! Round execution pipeline.
//!
//! The [`RoundEngine`] is the authoritative reducer for [`RoundState`]. Every
//! action runs `pre_validate -> apply -> post_validate` against a working
//! copy; the caller's state only changes when all three stages succeed.

mod errors;
mod transition;
mod win;


pub use errors::{ExecuteError, TransitionPhase, TransitionPhaseError};
pub use win::evaluate_winner;

use crate::action::RoundAction;
use crate::env::RoundEnv;
use crate::state::{Phase, PlayerId, Role, RoundState};

/// What an accepted action did, beyond the phase change.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Resolution {
    /// A cursor or the phase moved and nothing else happened.
    Advanced,
    Started {
        players: usize,
    },
    AnswerRecorded {
        player: PlayerId,
    },
    VoteCast {
        target: PlayerId,
    },
    Eliminated {
        player: PlayerId,
        role: Role,
        winner: Option<Role>,
    },
    /// The caught spy may name the secret word.
    GuessGranted {
        player: PlayerId,
    },
    SpyGuessed {
        correct: bool,
        winner: Role,
    },
    TimerTicked {
        remaining: u32,
    },
    TimerExpired,
    Reset,
}

/// Result of one accepted action.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TransitionOutcome {
    pub from: Phase,
    pub to: Phase,
    pub resolution: Resolution,
}

impl TransitionOutcome {
    pub fn phase_changed(&self) -> bool {
        self.from != self.to
    }
}

/// Applies round actions to a borrowed state.
pub struct RoundEngine<'a> {
    state: &'a mut RoundState,
}

impl<'a> RoundEngine<'a> {
    pub fn new(state: &'a mut RoundState) -> Self {
        Self { state }
    }

    /// Executes `action`, committing the new state only on success.
    pub fn execute(
        &mut self,
        env: RoundEnv<'_>,
        action: &RoundAction,
    ) -> Result<TransitionOutcome, ExecuteError> {
        let from = self.state.status;
        let mut working = self.state.clone();

        let resolution = transition::execute_transition(action, &mut working, &env)?;

        *self.state = working;
        Ok(TransitionOutcome {
            from,
            to: self.state.status,
            resolution,
        })
    }
}

/// Pure form of [`RoundEngine::execute`]: returns the next state and leaves
/// `state` untouched.
pub fn reduce(
    state: &RoundState,
    env: RoundEnv<'_>,
    action: &RoundAction,
) -> Result<(RoundState, TransitionOutcome), ExecuteError> {
    let mut next = state.clone();
    let outcome = RoundEngine::new(&mut next).execute(env, action)?;
    Ok((next, outcome))
}
