//! Read-only projections of the round for the presentation layer.
//!
//! Each view only exposes what the current phase allows a person holding the
//! device to see. In particular [`RoundState::reveal_card`] yields the card of
//! the player at the reveal cursor and nobody else.

use super::{Phase, Player, PlayerId, Role, RoundState};
use crate::config::GameConfig;

/// Caption above the revealed word.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LabelKind {
    /// Civilian in a word game.
    SecretWord,
    /// Minority player who sees the decoy.
    HintWord,
    /// Minority player with the hint option off.
    Undercover,
    /// Any player in a question game.
    SecretQuestion,
}

/// What confirming the current card leads to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NextStep {
    NextPlayer,
    Discussion,
    Input,
}

/// The private card for the player currently holding the device.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RevealCard<'a> {
    pub player: &'a Player,
    pub role: Role,
    /// Word to print; [`GameConfig::HIDDEN_WORD`] when masked.
    pub shown: &'a str,
    pub label: LabelKind,
    pub is_last: bool,
    pub next: NextStep,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PromptKind {
    /// Write a word that fits your secret word.
    Association,
    /// Answer the question you were dealt.
    Answer,
}

/// Input screen for the player at the input cursor.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InputPrompt<'a> {
    pub player: &'a Player,
    pub kind: PromptKind,
    /// The player's own question in Fragen-Mix; `None` in word games.
    pub question: Option<&'a str>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShowdownEntry<'a> {
    pub player: &'a Player,
    /// Submitted answer, or [`GameConfig::HIDDEN_WORD`] if none was recorded.
    pub answer: &'a str,
}

/// End-of-game summary.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RoundSummary<'a> {
    pub winner: Role,
    pub secret_word: &'a str,
    pub hint_word: &'a str,
    pub category: &'a str,
    pub minority: Vec<&'a Player>,
    pub rounds_played: u32,
}

impl RoundState {
    pub fn reveal_card(&self) -> Option<RevealCard<'_>> {
        let player = self.current_revealer()?;
        let rules = self.rules();
        let is_minority = player.role.is_minority();
        let masked = is_minority && rules.honours_hint_toggle && !self.use_hint_word;

        let label = if rules.asks_questions {
            LabelKind::SecretQuestion
        } else if !is_minority {
            LabelKind::SecretWord
        } else if masked {
            LabelKind::Undercover
        } else {
            LabelKind::HintWord
        };

        let is_last = self.reveal_cursor == self.last_index();
        let next = match (is_last, rules.has_input_phase) {
            (false, _) => NextStep::NextPlayer,
            (true, false) => NextStep::Discussion,
            (true, true) => NextStep::Input,
        };

        Some(RevealCard {
            player,
            role: player.role,
            shown: if masked {
                GameConfig::HIDDEN_WORD
            } else {
                &player.word
            },
            label,
            is_last,
            next,
        })
    }

    pub fn input_prompt(&self) -> Option<InputPrompt<'_>> {
        let player = self.current_answerer()?;
        let asks_questions = self.rules().asks_questions;
        Some(InputPrompt {
            player,
            kind: if asks_questions {
                PromptKind::Answer
            } else {
                PromptKind::Association
            },
            question: asks_questions.then_some(player.word.as_str()),
        })
    }

    pub fn showdown_entries(&self) -> Vec<ShowdownEntry<'_>> {
        self.players
            .iter()
            .map(|player| ShowdownEntry {
                player,
                answer: player.answer.as_deref().unwrap_or(GameConfig::HIDDEN_WORD),
            })
            .collect()
    }

    /// Players that may still be voted for, in roster order.
    pub fn vote_candidates(&self) -> Vec<&Player> {
        self.players.iter().filter(|p| p.is_active()).collect()
    }

    pub fn voted_player(&self) -> Option<&Player> {
        self.last_voted.and_then(|id| self.player(id))
    }

    pub fn summary(&self) -> Option<RoundSummary<'_>> {
        if self.status != Phase::GameOver {
            return None;
        }
        let winner = self.winner?;
        let pair = self.word_pair.as_ref()?;
        Some(RoundSummary {
            winner,
            secret_word: &pair.secret_word,
            hint_word: &pair.hint_word,
            category: &pair.category,
            minority: self
                .players
                .iter()
                .filter(|p| p.role.is_minority())
                .collect(),
            rounds_played: self.round,
        })
    }

    /// Ids in turn order; handy for front-ends and tests.
    pub fn player_ids(&self) -> Vec<PlayerId> {
        self.players.iter().map(|p| p.id).collect()
    }
}
