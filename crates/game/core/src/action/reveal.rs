//! Passing the device around: private reveal, written input, showdown.

use super::{RoundError, RoundTransition, require_phase};
use crate::engine::Resolution;
use crate::env::RoundEnv;
use crate::state::{Phase, RoundState};

/// The player at the reveal cursor has seen their card.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ConfirmReveal;

impl RoundTransition for ConfirmReveal {
    const NAME: &'static str = "confirm_reveal";

    fn pre_validate(&self, state: &RoundState, _env: &RoundEnv<'_>) -> Result<(), RoundError> {
        require_phase(state, Phase::Revealing, Self::NAME)
    }

    fn apply(&self, state: &mut RoundState, env: &RoundEnv<'_>) -> Result<Resolution, RoundError> {
        if state.reveal_cursor < state.last_index() {
            state.reveal_cursor += 1;
        } else if state.rules().has_input_phase {
            state.input_cursor = 0;
            state.enter_phase(Phase::InputPhase, env.config());
        } else {
            state.enter_phase(Phase::Discussion, env.config());
        }
        Ok(Resolution::Advanced)
    }
}

/// Written association (Word-Spy) or answer (Fragen-Mix) of the player at
/// the input cursor.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SubmitAnswer {
    pub answer: String,
}

impl SubmitAnswer {
    pub fn new(answer: impl Into<String>) -> Self {
        Self {
            answer: answer.into(),
        }
    }
}

impl RoundTransition for SubmitAnswer {
    const NAME: &'static str = "submit_answer";

    fn pre_validate(&self, state: &RoundState, _env: &RoundEnv<'_>) -> Result<(), RoundError> {
        require_phase(state, Phase::InputPhase, Self::NAME)?;
        if self.answer.trim().is_empty() {
            return Err(RoundError::EmptyAnswer);
        }
        Ok(())
    }

    fn apply(&self, state: &mut RoundState, env: &RoundEnv<'_>) -> Result<Resolution, RoundError> {
        let cursor = state.input_cursor;
        let player = state
            .players
            .get_mut(cursor)
            .ok_or(RoundError::invariant("input cursor past end of roster"))?;
        player.answer = Some(self.answer.trim().to_owned());
        let id = player.id;

        if cursor < state.last_index() {
            state.input_cursor += 1;
        } else {
            state.enter_phase(Phase::Showdown, env.config());
        }
        Ok(Resolution::AnswerRecorded { player: id })
    }
}

/// Leaves the answer overview for the discussion.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ContinueToDiscussion;

impl RoundTransition for ContinueToDiscussion {
    const NAME: &'static str = "continue_to_discussion";

    fn pre_validate(&self, state: &RoundState, _env: &RoundEnv<'_>) -> Result<(), RoundError> {
        require_phase(state, Phase::Showdown, Self::NAME)
    }

    fn apply(&self, state: &mut RoundState, env: &RoundEnv<'_>) -> Result<Resolution, RoundError> {
        state.enter_phase(Phase::Discussion, env.config());
        Ok(Resolution::Advanced)
    }
}
