//! Round lifecycle: dealing a new round and discarding it.

use super::{RoundError, RoundTransition, require_phase};
use crate::engine::Resolution;
use crate::env::RoundEnv;
use crate::setup::{SetupRequest, assign_roles};
use crate::state::{Phase, Player, RoundState, WordPair};

/// Deals roles and words and moves `Setup -> Revealing`.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StartRound {
    pub setup: SetupRequest,
    pub word_pair: WordPair,
    /// Seed for the role shuffle.
    pub seed: u64,
}

impl StartRound {
    pub fn new(setup: SetupRequest, word_pair: WordPair, seed: u64) -> Self {
        Self {
            setup,
            word_pair,
            seed,
        }
    }
}

impl RoundTransition for StartRound {
    const NAME: &'static str = "start_round";

    fn pre_validate(&self, state: &RoundState, _env: &RoundEnv<'_>) -> Result<(), RoundError> {
        require_phase(state, Phase::Setup, Self::NAME)?;
        self.setup.validate()?;
        if self.word_pair.secret_word.trim().is_empty() {
            return Err(RoundError::InvalidSetup("secret word is empty"));
        }
        Ok(())
    }

    fn apply(&self, state: &mut RoundState, env: &RoundEnv<'_>) -> Result<Resolution, RoundError> {
        let pair = self.word_pair.trimmed();
        let count = self.setup.player_count();
        let roles = assign_roles(
            count,
            self.setup.impostor_count,
            state.minority_role(),
            env.rng(),
            self.seed,
        );

        state.use_hint_word = self.setup.use_hint_word;
        state.use_timer = self.setup.use_timer;
        state.impostor_count = self.setup.impostor_count;
        state.game_seed = self.seed;
        state.players.clear();

        for (slot, (name, role)) in self.setup.names.iter().zip(roles).enumerate() {
            let word = if role.is_minority() {
                &pair.hint_word
            } else {
                &pair.secret_word
            };
            let id = state.allocate_player_id();
            let player =
                Player::new(id, name.trim(), role, word.as_str()).with_avatar_slot(slot as u8);
            state
                .players
                .try_push(player)
                .map_err(|_| RoundError::invariant("roster capacity exceeded"))?;
        }

        state.word_pair = Some(pair);
        state.reveal_cursor = 0;
        state.input_cursor = 0;
        state.round = 1;
        state.winner = None;
        state.last_voted = None;
        state.enter_phase(Phase::Revealing, env.config());

        Ok(Resolution::Started { players: count })
    }
}

/// Discards all round data and returns to `Setup`.
///
/// Accepted from every phase. From `Setup` it changes nothing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ResetRound;

impl RoundTransition for ResetRound {
    const NAME: &'static str = "reset";

    fn apply(&self, state: &mut RoundState, _env: &RoundEnv<'_>) -> Result<Resolution, RoundError> {
        if state.status != Phase::Setup {
            state.clear_round();
        }
        Ok(Resolution::Reset)
    }
}
