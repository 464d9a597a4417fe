//! Ending the discussion, by hand or by countdown.

use super::{RoundError, RoundTransition, require_phase};
use crate::engine::Resolution;
use crate::env::RoundEnv;
use crate::state::{Phase, RoundState, TimerStatus};

/// Players are ready to vote.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StartVote;

impl RoundTransition for StartVote {
    const NAME: &'static str = "start_vote";

    fn pre_validate(&self, state: &RoundState, _env: &RoundEnv<'_>) -> Result<(), RoundError> {
        require_phase(state, Phase::Discussion, Self::NAME)
    }

    fn apply(&self, state: &mut RoundState, env: &RoundEnv<'_>) -> Result<Resolution, RoundError> {
        state.enter_phase(Phase::Voting, env.config());
        Ok(Resolution::Advanced)
    }
}

/// One elapsed second of the discussion countdown identified by `epoch`.
///
/// Ticks for any other countdown, or ticks arriving after the discussion
/// ended, are rejected with a [`crate::ErrorSeverity::Stale`] error.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TimerTick {
    pub epoch: u32,
}

impl TimerTick {
    pub fn new(epoch: u32) -> Self {
        Self { epoch }
    }
}

impl RoundTransition for TimerTick {
    const NAME: &'static str = "timer_tick";

    fn pre_validate(&self, state: &RoundState, _env: &RoundEnv<'_>) -> Result<(), RoundError> {
        let timer = match (state.status, state.discussion_timer) {
            (Phase::Discussion, Some(timer)) => timer,
            _ => return Err(RoundError::TimerNotArmed),
        };
        if timer.epoch() != self.epoch {
            return Err(RoundError::StaleTimerTick {
                expected: timer.epoch(),
                received: self.epoch,
            });
        }
        Ok(())
    }

    fn apply(&self, state: &mut RoundState, env: &RoundEnv<'_>) -> Result<Resolution, RoundError> {
        let timer = state
            .discussion_timer
            .as_mut()
            .ok_or(RoundError::TimerNotArmed)?;

        match timer.tick() {
            TimerStatus::Running { remaining } => Ok(Resolution::TimerTicked { remaining }),
            TimerStatus::Expired => {
                state.enter_phase(Phase::Voting, env.config());
                Ok(Resolution::TimerExpired)
            }
        }
    }
}
