use party_core::GameConfig;
use serde::{Deserialize, Serialize};

/// Record names, shared by every store implementation.
pub mod keys {
    pub const PLAYER_NAMES: &str = "familytime_player_names";
    pub const SETTINGS: &str = "familytime_game_settings";
    pub const WORD_HISTORY: &str = "familytime_word_history";
}

/// Persisted user preferences.
///
/// Stored as one JSON object with camelCase keys. Keys missing from the
/// stored blob fall back to their defaults.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Settings {
    pub music_muted: bool,
    pub sfx_muted: bool,
    pub selected_category: String,
    pub use_timer: bool,
    pub use_hint_word: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            music_muted: false,
            sfx_muted: false,
            selected_category: GameConfig::RANDOM_CATEGORY.to_owned(),
            use_timer: false,
            use_hint_word: true,
        }
    }
}

/// Partial settings update. `None` keeps the stored value.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SettingsPatch {
    pub music_muted: Option<bool>,
    pub sfx_muted: Option<bool>,
    pub selected_category: Option<String>,
    pub use_timer: Option<bool>,
    pub use_hint_word: Option<bool>,
}

impl SettingsPatch {
    pub fn music_muted(mut self, muted: bool) -> Self {
        self.music_muted = Some(muted);
        self
    }

    pub fn sfx_muted(mut self, muted: bool) -> Self {
        self.sfx_muted = Some(muted);
        self
    }

    pub fn selected_category(mut self, category: impl Into<String>) -> Self {
        self.selected_category = Some(category.into());
        self
    }

    pub fn use_timer(mut self, enabled: bool) -> Self {
        self.use_timer = Some(enabled);
        self
    }

    pub fn use_hint_word(mut self, enabled: bool) -> Self {
        self.use_hint_word = Some(enabled);
        self
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Writes every present field over `settings`.
    pub fn apply_to(&self, settings: &mut Settings) {
        if let Some(muted) = self.music_muted {
            settings.music_muted = muted;
        }
        if let Some(muted) = self.sfx_muted {
            settings.sfx_muted = muted;
        }
        if let Some(category) = &self.selected_category {
            settings.selected_category = category.clone();
        }
        if let Some(enabled) = self.use_timer {
            settings.use_timer = enabled;
        }
        if let Some(enabled) = self.use_hint_word {
            settings.use_hint_word = enabled;
        }
    }
}
