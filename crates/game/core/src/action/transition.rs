use super::RoundError;
use crate::engine::Resolution;
use crate::env::RoundEnv;
use crate::state::{Phase, RoundState};

/// Defines how one round action mutates the state.
///
/// The engine runs `pre_validate`, `apply` and `post_validate` in that order
/// on a working copy and only commits when all three succeed. Hooks receive
/// read-only environment facts via `env` and must not perform I/O.
pub trait RoundTransition {
    /// Short identifier used in errors and logs.
    const NAME: &'static str;

    /// Validates pre-conditions using the state **before** mutation.
    fn pre_validate(&self, _state: &RoundState, _env: &RoundEnv<'_>) -> Result<(), RoundError> {
        Ok(())
    }

    /// Mutates the state. Implementations may assume `pre_validate` passed.
    fn apply(&self, state: &mut RoundState, env: &RoundEnv<'_>) -> Result<Resolution, RoundError>;

    /// Validates post-conditions using the state **after** mutation.
    fn post_validate(&self, state: &RoundState, _env: &RoundEnv<'_>) -> Result<(), RoundError> {
        state.verify()
    }
}

/// Rejects the action unless the round is in `expected`.
pub(crate) fn require_phase(
    state: &RoundState,
    expected: Phase,
    action: &'static str,
) -> Result<(), RoundError> {
    if state.status == expected {
        Ok(())
    } else {
        Err(RoundError::wrong_phase(action, state.status))
    }
}
