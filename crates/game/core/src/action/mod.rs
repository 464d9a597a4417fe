//! Actions that drive a round forward.
//!
//! Every user input and every countdown tick reaches the engine as a
//! [`RoundAction`]. Each variant wraps a small transition struct that
//! implements [`RoundTransition`].
mod discussion;
mod error;
mod reveal;
mod round;
mod transition;
mod vote;

pub use discussion::{StartVote, TimerTick};
pub use error::RoundError;
pub use reveal::{ConfirmReveal, ContinueToDiscussion, SubmitAnswer};
pub use round::{ResetRound, StartRound};
pub use transition::RoundTransition;
pub use vote::{CastVote, ResolveVote, SubmitGuess};

pub(crate) use transition::require_phase;

use crate::setup::SetupRequest;
use crate::state::{PlayerId, WordPair};

/// Input accepted by [`crate::RoundEngine`].
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RoundAction {
    Start(StartRound),
    ConfirmReveal(ConfirmReveal),
    SubmitAnswer(SubmitAnswer),
    ContinueToDiscussion(ContinueToDiscussion),
    StartVote(StartVote),
    TimerTick(TimerTick),
    CastVote(CastVote),
    ResolveVote(ResolveVote),
    SubmitGuess(SubmitGuess),
    Reset(ResetRound),
}

impl RoundAction {
    pub fn start(setup: SetupRequest, word_pair: WordPair, seed: u64) -> Self {
        Self::Start(StartRound::new(setup, word_pair, seed))
    }

    pub fn confirm_reveal() -> Self {
        Self::ConfirmReveal(ConfirmReveal)
    }

    pub fn submit_answer(answer: impl Into<String>) -> Self {
        Self::SubmitAnswer(SubmitAnswer::new(answer))
    }

    pub fn continue_to_discussion() -> Self {
        Self::ContinueToDiscussion(ContinueToDiscussion)
    }

    pub fn start_vote() -> Self {
        Self::StartVote(StartVote)
    }

    pub fn timer_tick(epoch: u32) -> Self {
        Self::TimerTick(TimerTick::new(epoch))
    }

    pub fn cast_vote(target: PlayerId) -> Self {
        Self::CastVote(CastVote::new(target))
    }

    pub fn resolve_vote() -> Self {
        Self::ResolveVote(ResolveVote)
    }

    pub fn submit_guess(guess: impl Into<String>) -> Self {
        Self::SubmitGuess(SubmitGuess::new(guess))
    }

    pub fn reset() -> Self {
        Self::Reset(ResetRound)
    }

    /// Identifier of the wrapped transition.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Start(_) => StartRound::NAME,
            Self::ConfirmReveal(_) => ConfirmReveal::NAME,
            Self::SubmitAnswer(_) => SubmitAnswer::NAME,
            Self::ContinueToDiscussion(_) => ContinueToDiscussion::NAME,
            Self::StartVote(_) => StartVote::NAME,
            Self::TimerTick(_) => TimerTick::NAME,
            Self::CastVote(_) => CastVote::NAME,
            Self::ResolveVote(_) => ResolveVote::NAME,
            Self::SubmitGuess(_) => SubmitGuess::NAME,
            Self::Reset(_) => ResetRound::NAME,
        }
    }

    /// True for inputs produced by the clock rather than a person.
    pub fn is_tick(&self) -> bool {
        matches!(self, Self::TimerTick(_))
    }
}
