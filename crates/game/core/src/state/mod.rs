//! Authoritative round state.
//!
//! This module owns the data a round carries: the roster with roles and
//! words, the current phase, the reveal/input cursors, the vote in flight and
//! the result. Runtime layers clone or query this state but mutate it
//! exclusively through the engine.
mod history;
mod player;
mod timer;
mod view;
mod word;

use arrayvec::ArrayVec;

use crate::action::RoundError;
use crate::config::GameConfig;
use crate::variant::{GameVariant, VariantRules};

pub use history::WordHistory;
pub use player::{Player, PlayerId, Role};
pub use timer::{DiscussionTimer, TimerStatus};
pub use view::{
    InputPrompt, LabelKind, NextStep, PromptKind, RevealCard, RoundSummary, ShowdownEntry,
};
pub use word::WordPair;

/// Seats in turn order. Bounded by [`GameConfig::MAX_PLAYERS`].
pub type Roster = ArrayVec<Player, { GameConfig::MAX_PLAYERS }>;

/// Phase of the round state machine.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, strum::Display, strum::EnumIter)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Phase {
    #[default]
    Setup,
    Revealing,
    InputPhase,
    Showdown,
    Discussion,
    Voting,
    RevealVote,
    SpyGuessing,
    GameOver,
}

impl Phase {
    pub const fn is_terminal(self) -> bool {
        matches!(self, Phase::GameOver)
    }
}

/// Non-eliminated players per side.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ActiveCounts {
    pub minority: usize,
    pub civilians: usize,
}

/// Canonical snapshot of one game session's round.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RoundState {
    pub variant: GameVariant,
    pub status: Phase,
    pub players: Roster,
    pub reveal_cursor: usize,
    pub input_cursor: usize,
    pub word_pair: Option<WordPair>,
    pub winner: Option<Role>,
    /// Starts at 1; bumped by every resolved elimination.
    pub round: u32,
    /// Player picked by the latest vote, until that vote is resolved.
    pub last_voted: Option<PlayerId>,
    pub use_hint_word: bool,
    pub use_timer: bool,
    pub impostor_count: usize,
    /// Seed drawn for this round. Set by `StartRound`, never modified after.
    pub game_seed: u64,
    pub discussion_timer: Option<DiscussionTimer>,

    /// Number of times a countdown has been armed. Survives resets.
    timer_epoch: u32,
    /// Sequential id allocator. Survives resets so ids stay unique per session.
    next_player_id: u32,
}

impl RoundState {
    /// Fresh state in `Setup` with the stock defaults (hint word on,
    /// timer off).
    pub fn new(variant: GameVariant) -> Self {
        Self {
            variant,
            status: Phase::Setup,
            players: Roster::new(),
            reveal_cursor: 0,
            input_cursor: 0,
            word_pair: None,
            winner: None,
            round: 1,
            last_voted: None,
            use_hint_word: true,
            use_timer: false,
            impostor_count: 0,
            game_seed: 0,
            discussion_timer: None,
            timer_epoch: 0,
            next_player_id: 1,
        }
    }

    pub fn with_options(mut self, use_hint_word: bool, use_timer: bool) -> Self {
        self.use_hint_word = use_hint_word;
        self.use_timer = use_timer;
        self
    }

    pub fn rules(&self) -> &'static VariantRules {
        self.variant.rules()
    }

    pub fn minority_role(&self) -> Role {
        self.variant.minority_role()
    }

    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players.iter().find(|p| p.id == id)
    }

    pub(crate) fn player_mut(&mut self, id: PlayerId) -> Option<&mut Player> {
        self.players.iter_mut().find(|p| p.id == id)
    }

    pub fn current_revealer(&self) -> Option<&Player> {
        match self.status {
            Phase::Revealing => self.players.get(self.reveal_cursor),
            _ => None,
        }
    }

    pub fn current_answerer(&self) -> Option<&Player> {
        match self.status {
            Phase::InputPhase => self.players.get(self.input_cursor),
            _ => None,
        }
    }

    pub fn last_index(&self) -> usize {
        self.players.len().saturating_sub(1)
    }

    pub fn active_counts(&self) -> ActiveCounts {
        self.players
            .iter()
            .filter(|p| p.is_active())
            .fold(ActiveCounts::default(), |mut counts, p| {
                if p.role.is_minority() {
                    counts.minority += 1;
                } else {
                    counts.civilians += 1;
                }
                counts
            })
    }

    pub fn timer_epoch(&self) -> u32 {
        self.timer_epoch
    }

    pub(crate) fn allocate_player_id(&mut self) -> PlayerId {
        let id = PlayerId(self.next_player_id);
        self.next_player_id += 1;
        id
    }

    /// Moves to `phase`, arming the discussion countdown on entry to
    /// `Discussion` and releasing it on every other move.
    pub(crate) fn enter_phase(&mut self, phase: Phase, config: &GameConfig) {
        self.discussion_timer = None;
        if phase == Phase::Discussion && self.use_timer {
            self.timer_epoch += 1;
            self.discussion_timer = Some(DiscussionTimer::new(
                self.timer_epoch,
                config.discussion_seconds,
            ));
        }
        self.status = phase;
    }

    /// Drops all round data and returns to `Setup`. The variant and the
    /// session options are kept.
    pub(crate) fn clear_round(&mut self) {
        self.status = Phase::Setup;
        self.players.clear();
        self.reveal_cursor = 0;
        self.input_cursor = 0;
        self.word_pair = None;
        self.winner = None;
        self.round = 1;
        self.last_voted = None;
        self.impostor_count = 0;
        self.game_seed = 0;
        self.discussion_timer = None;
    }

    /// Checks the structural invariants every phase must satisfy.
    pub fn verify(&self) -> Result<(), RoundError> {
        if self.status == Phase::Setup {
            if !self.players.is_empty() || self.word_pair.is_some() {
                return Err(RoundError::invariant("setup must not carry round data"));
            }
            return Ok(());
        }

        let count = self.players.len();
        if !(GameConfig::MIN_PLAYERS..=GameConfig::MAX_PLAYERS).contains(&count) {
            return Err(RoundError::invariant("roster size out of range"));
        }
        if self.word_pair.is_none() {
            return Err(RoundError::invariant("active round without word pair"));
        }

        let minority = self.minority_role();
        let dealt = self.players.iter().filter(|p| p.role == minority).count();
        let civilians = self
            .players
            .iter()
            .filter(|p| p.role == Role::Civilian)
            .count();
        if dealt != self.impostor_count || dealt + civilians != count {
            return Err(RoundError::invariant("role partition broken"));
        }

        if self.reveal_cursor >= count || self.input_cursor >= count {
            return Err(RoundError::invariant("cursor past end of roster"));
        }

        let expects_timer = self.status == Phase::Discussion && self.use_timer;
        if expects_timer != self.discussion_timer.is_some() {
            return Err(RoundError::invariant("countdown outlived discussion"));
        }

        let expects_vote = matches!(self.status, Phase::RevealVote | Phase::SpyGuessing);
        if expects_vote != self.last_voted.is_some() && self.status != Phase::GameOver {
            return Err(RoundError::invariant("vote reference out of place"));
        }

        if self.status.is_terminal() != self.winner.is_some() {
            return Err(RoundError::invariant("winner set outside game over"));
        }

        Ok(())
    }
}

impl Default for RoundState {
    fn default() -> Self {
        Self::new(GameVariant::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_state_is_valid_setup() {
        let state = RoundState::new(GameVariant::WordSpy);
        assert_eq!(state.status, Phase::Setup);
        assert_eq!(state.round, 1);
        assert!(state.use_hint_word);
        assert!(!state.use_timer);
        state.verify().unwrap();
    }

    #[test]
    fn discussion_arms_timer_only_when_enabled() {
        let config = GameConfig::default();
        let mut state = RoundState::new(GameVariant::Impostor);
        state.enter_phase(Phase::Discussion, &config);
        assert!(state.discussion_timer.is_none());

        state.use_timer = true;
        state.enter_phase(Phase::Discussion, &config);
        let timer = state.discussion_timer.unwrap();
        assert_eq!(timer.remaining(), 180);
        assert_eq!(timer.epoch(), 1);

        state.enter_phase(Phase::Voting, &config);
        assert!(state.discussion_timer.is_none());

        state.enter_phase(Phase::Discussion, &config);
        assert_eq!(state.discussion_timer.unwrap().epoch(), 2);
    }

    #[test]
    fn ids_are_not_reused_after_clear() {
        let mut state = RoundState::default();
        let first = state.allocate_player_id();
        state.clear_round();
        let second = state.allocate_player_id();
        assert_ne!(first, second);
    }
}
