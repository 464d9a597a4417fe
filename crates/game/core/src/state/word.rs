/// Words (or questions) drawn for one round.
///
/// `hint_word` may be empty when the generator produced no decoy.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WordPair {
    pub secret_word: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub hint_word: String,
    pub category: String,
}

impl WordPair {
    pub fn new(
        secret_word: impl Into<String>,
        hint_word: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            secret_word: secret_word.into(),
            hint_word: hint_word.into(),
            category: category.into(),
        }
    }

    /// Copy with surrounding whitespace removed from every field.
    pub fn trimmed(&self) -> Self {
        Self::new(
            self.secret_word.trim(),
            self.hint_word.trim(),
            self.category.trim(),
        )
    }

    pub fn has_hint(&self) -> bool {
        !self.hint_word.trim().is_empty()
    }

    /// Case-insensitive comparison of a guess against the secret word,
    /// ignoring surrounding whitespace.
    pub fn matches_secret(&self, guess: &str) -> bool {
        guess.trim().to_lowercase() == self.secret_word.trim().to_lowercase()
    }
}
