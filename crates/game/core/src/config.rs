/// Round configuration constants and tunable parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GameConfig {
    /// Length of the optional discussion countdown, in seconds.
    pub discussion_seconds: u32,
    /// Number of recently used secret words kept for generation exclusion.
    pub history_cap: usize,
}

impl GameConfig {
    // ===== compile-time constants =====
    pub const MIN_PLAYERS: usize = 3;
    /// Also the capacity of [`crate::state::Roster`].
    pub const MAX_PLAYERS: usize = 12;
    pub const MIN_IMPOSTORS: usize = 1;

    /// Text shown to minority players instead of their hint word when the
    /// hint option is off.
    pub const HIDDEN_WORD: &'static str = "???";

    /// Category that lets the generator pick a category on its own.
    pub const RANDOM_CATEGORY: &'static str = "Zufall";

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_DISCUSSION_SECONDS: u32 = 180;
    pub const WORD_HISTORY_CAP: usize = 50;

    pub fn new() -> Self {
        Self {
            discussion_seconds: Self::DEFAULT_DISCUSSION_SECONDS,
            history_cap: Self::WORD_HISTORY_CAP,
        }
    }

    pub fn with_discussion_seconds(mut self, seconds: u32) -> Self {
        self.discussion_seconds = seconds;
        self
    }

    pub fn with_history_cap(mut self, cap: usize) -> Self {
        self.history_cap = cap;
        self
    }

    /// Largest legal minority count for the given roster size.
    pub const fn max_impostors(player_count: usize) -> usize {
        if player_count <= Self::MIN_IMPOSTORS {
            Self::MIN_IMPOSTORS
        } else {
            player_count - 1
        }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}
