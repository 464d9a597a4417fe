//! Action dispatch and the three-stage pipeline.

use crate::action::{RoundAction, RoundError, RoundTransition};
use crate::env::RoundEnv;
use crate::state::RoundState;

use super::Resolution;
use super::errors::{ExecuteError, TransitionPhase, TransitionPhaseError};

/// Runs a transition through its stages and returns its resolution.
///
/// Phases:
/// 1. `pre_validate` - Check preconditions before mutation
/// 2. `apply` - Mutate the state and report what happened
/// 3. `post_validate` - Verify invariants after mutation
#[inline]
fn drive_transition<T>(
    transition: &T,
    state: &mut RoundState,
    env: &RoundEnv<'_>,
) -> Result<Resolution, ExecuteError>
where
    T: RoundTransition,
{
    let fail = |phase: TransitionPhase, error: RoundError| {
        ExecuteError::new(T::NAME, TransitionPhaseError::new(phase, error))
    };

    transition
        .pre_validate(state, env)
        .map_err(|error| fail(TransitionPhase::PreValidate, error))?;

    let resolution = transition
        .apply(state, env)
        .map_err(|error| fail(TransitionPhase::Apply, error))?;

    transition
        .post_validate(state, env)
        .map_err(|error| fail(TransitionPhase::PostValidate, error))?;

    Ok(resolution)
}

/// Routes an action to its transition.
pub(super) fn execute_transition(
    action: &RoundAction,
    state: &mut RoundState,
    env: &RoundEnv<'_>,
) -> Result<Resolution, ExecuteError> {
    match action {
        RoundAction::Start(t) => drive_transition(t, state, env),
        RoundAction::ConfirmReveal(t) => drive_transition(t, state, env),
        RoundAction::SubmitAnswer(t) => drive_transition(t, state, env),
        RoundAction::ContinueToDiscussion(t) => drive_transition(t, state, env),
        RoundAction::StartVote(t) => drive_transition(t, state, env),
        RoundAction::TimerTick(t) => drive_transition(t, state, env),
        RoundAction::CastVote(t) => drive_transition(t, state, env),
        RoundAction::ResolveVote(t) => drive_transition(t, state, env),
        RoundAction::SubmitGuess(t) => drive_transition(t, state, env),
        RoundAction::Reset(t) => drive_transition(t, state, env),
    }
}
