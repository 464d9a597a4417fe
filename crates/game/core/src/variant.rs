//! Game variants and their rule tables.
//!
//! The three games share one phase machine. Where they differ, the engine
//! looks the difference up in a [`VariantRules`] table instead of matching on
//! the variant inline, so each variant's behaviour can be read (and tested)
//! in one place.

use crate::state::Role;

/// The three party games built on the round engine.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, strum::EnumIter, strum::IntoStaticStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GameVariant {
    /// Classic: civilians share a word, impostors get a decoy; talk, then vote.
    #[default]
    Impostor,
    /// Everyone writes an association first; a caught spy may guess the word.
    WordSpy,
    /// Two similar questions; impostors answer the other one.
    FragenMix,
}

/// Per-variant transition table consulted by the engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VariantRules {
    /// Role handed to the minority players.
    pub minority_role: Role,
    /// Whether `Revealing` is followed by a written input round and showdown.
    pub has_input_phase: bool,
    /// Whether a caught minority player gets to guess the secret word before
    /// the game is decided.
    pub minority_guesses_on_catch: bool,
    /// Whether the hint-word option masks the minority's word during reveal.
    pub honours_hint_toggle: bool,
    /// Whether setup offers the discussion countdown.
    pub offers_timer: bool,
    /// Whether the pair consists of two questions rather than two words.
    pub asks_questions: bool,
    /// Display title.
    pub title: &'static str,
}

const IMPOSTOR: VariantRules = VariantRules {
    minority_role: Role::Impostor,
    has_input_phase: false,
    minority_guesses_on_catch: false,
    honours_hint_toggle: true,
    offers_timer: true,
    asks_questions: false,
    title: "IMPOSTOR",
};

const WORD_SPY: VariantRules = VariantRules {
    minority_role: Role::Spy,
    has_input_phase: true,
    minority_guesses_on_catch: true,
    honours_hint_toggle: true,
    offers_timer: false,
    asks_questions: false,
    title: "WORT-SPION",
};

const FRAGEN_MIX: VariantRules = VariantRules {
    minority_role: Role::Impostor,
    has_input_phase: true,
    minority_guesses_on_catch: false,
    honours_hint_toggle: false,
    offers_timer: false,
    asks_questions: true,
    title: "FRAGEN-MIX",
};

impl GameVariant {
    /// Returns the rule table for this variant.
    pub const fn rules(self) -> &'static VariantRules {
        match self {
            GameVariant::Impostor => &IMPOSTOR,
            GameVariant::WordSpy => &WORD_SPY,
            GameVariant::FragenMix => &FRAGEN_MIX,
        }
    }

    pub const fn minority_role(self) -> Role {
        self.rules().minority_role
    }

    /// Stable identifier used in generation requests and persisted records.
    pub fn as_str(self) -> &'static str {
        self.into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn word_spy_is_the_only_variant_with_spies() {
        for variant in GameVariant::iter() {
            let spy = variant.minority_role() == Role::Spy;
            assert_eq!(spy, variant == GameVariant::WordSpy, "{variant:?}");
        }
    }

    #[test]
    fn only_impostor_skips_the_input_phase() {
        assert!(!GameVariant::Impostor.rules().has_input_phase);
        assert!(GameVariant::WordSpy.rules().has_input_phase);
        assert!(GameVariant::FragenMix.rules().has_input_phase);
    }

    #[test]
    fn guess_is_granted_only_where_minority_is_spy() {
        for variant in GameVariant::iter() {
            let rules = variant.rules();
            if rules.minority_guesses_on_catch {
                assert_eq!(rules.minority_role, Role::Spy);
            }
        }
    }

    #[test]
    fn fragen_mix_ignores_hint_toggle() {
        assert!(!GameVariant::FragenMix.rules().honours_hint_toggle);
        assert!(GameVariant::FragenMix.rules().asks_questions);
    }
}
