use crate::config::GameConfig;

/// Recently used secret words, newest first, bounded.
///
/// Passed to the generator as the exclusion list so consecutive rounds do
/// not repeat words. A word drawn twice is stored twice.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WordHistory {
    words: Vec<String>,
    cap: usize,
}

impl WordHistory {
    pub fn new(cap: usize) -> Self {
        Self {
            words: Vec::new(),
            cap,
        }
    }

    /// Rebuild from a persisted newest-first list, dropping anything past `cap`.
    pub fn from_words(mut words: Vec<String>, cap: usize) -> Self {
        words.truncate(cap);
        Self { words, cap }
    }

    pub fn record(&mut self, word: impl Into<String>) {
        self.words.insert(0, word.into());
        self.words.truncate(self.cap);
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.iter().any(|w| w == word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn cap(&self) -> usize {
        self.cap
    }

    pub fn into_words(self) -> Vec<String> {
        self.words
    }
}

impl Default for WordHistory {
    fn default() -> Self {
        Self::new(GameConfig::WORD_HISTORY_CAP)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn newest_first_and_capped() {
        let mut history = WordHistory::new(3);
        for word in ["a", "b", "c", "d"] {
            history.record(word);
        }
        assert_eq!(history.words(), ["d", "c", "b"]);
    }

    #[test]
    fn repeated_words_are_kept() {
        let mut history = WordHistory::new(5);
        history.record("Apfel");
        history.record("Apfel");
        assert_eq!(history.len(), 2);
    }

    #[test]
    fn from_words_truncates() {
        let words = (0..60).map(|i| format!("w{i}")).collect();
        let history = WordHistory::from_words(words, GameConfig::WORD_HISTORY_CAP);
        assert_eq!(history.len(), 50);
        assert_eq!(history.words()[0], "w0");
    }
}
