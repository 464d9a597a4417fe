//! Fallback word pool.
//!
//! When the generation service is unreachable or answers garbage, the session
//! draws from a [`WordPool`] instead. The pool skips recently used secret
//! words, but never runs dry: if every entry was used recently, the whole
//! pool is eligible again.

use party_core::{RngOracle, WordPair};

/// Built-in pairs as `(secret_word, hint_word, category)`.
pub const FALLBACK_WORDS: [(&str, &str, &str); 10] = [
    ("Apfel", "Vitamin", "Essen"),
    ("Spiegel", "Reflexion", "Alltag"),
    ("Kaffee", "Wach", "Getränke"),
    ("Laptop", "Strom", "Technik"),
    ("Fahrrad", "Kette", "Transport"),
    ("Pizza", "Italien", "Essen"),
    ("Sonne", "Energie", "Natur"),
    ("Katze", "Schnurren", "Tiere"),
    ("Uhr", "Pünktlichkeit", "Alltag"),
    ("Geld", "Macht", "Gesellschaft"),
];

/// A list of word pairs to draw from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WordPool {
    pairs: Vec<WordPair>,
}

impl WordPool {
    pub fn new(pairs: Vec<WordPair>) -> Self {
        Self { pairs }
    }

    /// The pool shipped with the game.
    pub fn builtin() -> Self {
        Self::new(
            FALLBACK_WORDS
                .iter()
                .map(|(secret, hint, category)| WordPair::new(*secret, *hint, *category))
                .collect(),
        )
    }

    pub fn pairs(&self) -> &[WordPair] {
        &self.pairs
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Picks a pair whose secret word is not in `excluded`.
    ///
    /// Falls back to the full pool when the filter leaves nothing. Returns
    /// `None` only for an empty pool.
    pub fn pick(&self, excluded: &[String], rng: &dyn RngOracle, seed: u64) -> Option<&WordPair> {
        let fresh: Vec<&WordPair> = self
            .pairs
            .iter()
            .filter(|pair| !excluded.iter().any(|word| *word == pair.secret_word))
            .collect();

        let candidates = if fresh.is_empty() {
            self.pairs.iter().collect()
        } else {
            fresh
        };

        if candidates.is_empty() {
            return None;
        }
        let index = rng.below(seed, candidates.len() as u32) as usize;
        candidates.get(index).copied()
    }
}

impl Default for WordPool {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use party_core::PcgRng;

    fn secrets(pool: &WordPool) -> Vec<String> {
        pool.pairs().iter().map(|p| p.secret_word.clone()).collect()
    }

    #[test]
    fn builtin_pool_has_ten_distinct_secrets() {
        let pool = WordPool::builtin();
        let mut words = secrets(&pool);
        words.sort();
        words.dedup();
        assert_eq!(words.len(), 10);
    }

    #[test]
    fn pick_skips_excluded_words() {
        let pool = WordPool::builtin();
        let mut excluded = secrets(&pool);
        let survivor = excluded.remove(4);

        for seed in 0..20 {
            let pick = pool.pick(&excluded, &PcgRng, seed).unwrap();
            assert_eq!(pick.secret_word, survivor);
        }
    }

    #[test]
    fn exhausted_filter_uses_whole_pool() {
        let pool = WordPool::builtin();
        let excluded = secrets(&pool);
        let pick = pool.pick(&excluded, &PcgRng, 3).unwrap();
        assert!(excluded.contains(&pick.secret_word));
    }

    #[test]
    fn exclusion_matches_secret_word_only() {
        let pool = WordPool::builtin();
        let mut excluded: Vec<String> = pool
            .pairs()
            .iter()
            .map(|p| p.hint_word.clone())
            .collect();
        excluded.push("Essen".into());
        // Hint words and categories do not count as used.
        let mut seen = std::collections::HashSet::new();
        for seed in 0..200 {
            seen.insert(pool.pick(&excluded, &PcgRng, seed).unwrap().secret_word.clone());
        }
        assert_eq!(seen.len(), 10);
    }

    #[test]
    fn empty_pool_yields_nothing() {
        let pool = WordPool::new(Vec::new());
        assert!(pool.pick(&[], &PcgRng, 0).is_none());
    }
}
