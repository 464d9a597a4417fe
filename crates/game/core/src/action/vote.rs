//! Voting, elimination and the spy's last chance.

use super::{RoundError, RoundTransition, require_phase};
use crate::engine::{Resolution, evaluate_winner};
use crate::env::RoundEnv;
use crate::state::{Phase, PlayerId, Role, RoundState};

/// The table picked `target`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CastVote {
    pub target: PlayerId,
}

impl CastVote {
    pub fn new(target: PlayerId) -> Self {
        Self { target }
    }
}

impl RoundTransition for CastVote {
    const NAME: &'static str = "cast_vote";

    fn pre_validate(&self, state: &RoundState, _env: &RoundEnv<'_>) -> Result<(), RoundError> {
        require_phase(state, Phase::Voting, Self::NAME)?;
        let target = state
            .player(self.target)
            .ok_or(RoundError::UnknownPlayer(self.target))?;
        if target.is_eliminated {
            return Err(RoundError::AlreadyEliminated(self.target));
        }
        Ok(())
    }

    fn apply(&self, state: &mut RoundState, env: &RoundEnv<'_>) -> Result<Resolution, RoundError> {
        state.last_voted = Some(self.target);
        state.enter_phase(Phase::RevealVote, env.config());
        Ok(Resolution::VoteCast {
            target: self.target,
        })
    }
}

/// Acts on the revealed vote.
///
/// A caught spy in a variant that grants a guess moves on to `SpyGuessing`
/// without being eliminated. Everyone else is eliminated and the win check
/// decides between another discussion and `GameOver`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ResolveVote;

impl RoundTransition for ResolveVote {
    const NAME: &'static str = "resolve_vote";

    fn pre_validate(&self, state: &RoundState, _env: &RoundEnv<'_>) -> Result<(), RoundError> {
        require_phase(state, Phase::RevealVote, Self::NAME)?;
        let voted = state.last_voted.ok_or(RoundError::NoVoteRecorded)?;
        state
            .player(voted)
            .map(|_| ())
            .ok_or(RoundError::UnknownPlayer(voted))
    }

    fn apply(&self, state: &mut RoundState, env: &RoundEnv<'_>) -> Result<Resolution, RoundError> {
        let voted = state.last_voted.ok_or(RoundError::NoVoteRecorded)?;
        let minority = state.minority_role();
        let guesses = state.rules().minority_guesses_on_catch;

        let player = state
            .player_mut(voted)
            .ok_or(RoundError::UnknownPlayer(voted))?;
        let role = player.role;

        if role == minority && guesses {
            state.enter_phase(Phase::SpyGuessing, env.config());
            return Ok(Resolution::GuessGranted { player: voted });
        }

        player.is_eliminated = true;
        let winner = evaluate_winner(state);
        state.round += 1;
        state.last_voted = None;

        match winner {
            Some(side) => {
                state.winner = Some(side);
                state.enter_phase(Phase::GameOver, env.config());
            }
            None => state.enter_phase(Phase::Discussion, env.config()),
        }

        Ok(Resolution::Eliminated {
            player: voted,
            role,
            winner,
        })
    }
}

/// The caught spy names the secret word.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SubmitGuess {
    pub guess: String,
}

impl SubmitGuess {
    pub fn new(guess: impl Into<String>) -> Self {
        Self {
            guess: guess.into(),
        }
    }
}

impl RoundTransition for SubmitGuess {
    const NAME: &'static str = "submit_guess";

    fn pre_validate(&self, state: &RoundState, _env: &RoundEnv<'_>) -> Result<(), RoundError> {
        require_phase(state, Phase::SpyGuessing, Self::NAME)?;
        if self.guess.trim().is_empty() {
            return Err(RoundError::EmptyGuess);
        }
        Ok(())
    }

    fn apply(&self, state: &mut RoundState, env: &RoundEnv<'_>) -> Result<Resolution, RoundError> {
        let pair = state
            .word_pair
            .as_ref()
            .ok_or(RoundError::invariant("active round without word pair"))?;
        let correct = pair.matches_secret(&self.guess);
        let winner = if correct { Role::Spy } else { Role::Civilian };

        state.winner = Some(winner);
        state.enter_phase(Phase::GameOver, env.config());
        Ok(Resolution::SpyGuessed { correct, winner })
    }
}
