//! Collaborators the session calls out to.
//!
//! Runtime users plug in a [`WordGenerator`] (an online service, a fixture,
//! or nothing at all) and a [`SoundService`] (a real mixer or silence).
use async_trait::async_trait;
use thiserror::Error;

use party_core::{GameConfig, GameVariant, PcgRng, RngOracle, WordPair, compute_seed};
use party_core::env::context;

/// Moods mixed into the prompt so repeated requests do not read the same.
pub const VIBES: [&str; 4] = ["wesentlich", "konzeptionell", "abstrakt", "funktional"];

/// Everything a generator needs to produce one word pair.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GenerationRequest {
    /// A category name, or [`GameConfig::RANDOM_CATEGORY`] to let the
    /// service choose.
    pub category: String,
    pub variant: GameVariant,
    /// Recently used secret words, newest first.
    pub exclude_words: Vec<String>,
    /// Random token that keeps otherwise identical requests apart.
    pub entropy: String,
    pub vibe: &'static str,
}

impl GenerationRequest {
    /// Builds a request whose entropy token and vibe are derived from `seed`.
    pub fn new(
        category: impl Into<String>,
        variant: GameVariant,
        exclude_words: Vec<String>,
        seed: u64,
    ) -> Self {
        let rng = PcgRng;
        let token = rng.next_u32(compute_seed(seed, 0, 0, context::ENTROPY));
        let vibe_index = rng.below(compute_seed(seed, 0, 1, context::ENTROPY), VIBES.len() as u32);

        Self {
            category: category.into(),
            variant,
            exclude_words,
            entropy: format!("{token:08x}"),
            vibe: VIBES[vibe_index as usize],
        }
    }

    pub fn wants_random_category(&self) -> bool {
        self.category == GameConfig::RANDOM_CATEGORY
    }
}

/// Why a generator could not deliver a pair.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerationError {
    #[error("generation service unavailable: {0}")]
    Unavailable(String),

    #[error("generation service returned an empty response")]
    EmptyResponse,

    #[error("malformed generation response: {0}")]
    MalformedResponse(String),
}

/// Source of fresh word pairs.
///
/// Failures are expected; the session falls back to the static pool.
#[async_trait]
pub trait WordGenerator: Send + Sync {
    async fn generate(&self, request: &GenerationRequest) -> Result<WordPair, GenerationError>;
}

/// Generator used when no service is configured. Always fails.
#[derive(Clone, Copy, Debug, Default)]
pub struct OfflineGenerator;

#[async_trait]
impl WordGenerator for OfflineGenerator {
    async fn generate(&self, _request: &GenerationRequest) -> Result<WordPair, GenerationError> {
        Err(GenerationError::Unavailable(
            "no generation service configured".into(),
        ))
    }
}

/// Generator that always returns the same pair.
#[derive(Clone, Debug)]
pub struct FixedGenerator {
    pair: WordPair,
}

impl FixedGenerator {
    pub fn new(pair: WordPair) -> Self {
        Self { pair }
    }
}

#[async_trait]
impl WordGenerator for FixedGenerator {
    async fn generate(&self, _request: &GenerationRequest) -> Result<WordPair, GenerationError> {
        Ok(self.pair.clone())
    }
}

/// Short sound effects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::EnumIter)]
pub enum EffectKind {
    Click,
    /// Card flipped open.
    Reveal,
    /// Card flipped closed.
    Hide,
    Vote,
    Win,
    Lose,
}

impl EffectKind {
    /// Suggested playback volume in `0.0..=1.0`.
    pub fn volume(self) -> f32 {
        match self {
            EffectKind::Reveal | EffectKind::Hide => 0.15,
            _ => 0.4,
        }
    }
}

/// Background music.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::EnumIter)]
pub enum TrackKind {
    Hub,
    Setup,
    Revealing,
    Tension,
    Victory,
    Defeat,
}

impl TrackKind {
    /// Victory and defeat stingers play once; everything else loops.
    pub fn loops(self) -> bool {
        !matches!(self, TrackKind::Victory | TrackKind::Defeat)
    }

    pub fn volume(self) -> f32 {
        match self {
            TrackKind::Hub => 0.15,
            TrackKind::Revealing => 0.12,
            TrackKind::Tension => 0.18,
            _ => 0.2,
        }
    }
}

/// Audio playback collaborator.
///
/// Implementations own muting: a muted service ignores the matching calls.
/// Switching to the track that is already playing must not restart it.
pub trait SoundService: Send + Sync {
    fn play_effect(&self, effect: EffectKind);

    fn switch_ambient_track(&self, track: TrackKind);

    fn set_music_muted(&self, muted: bool);

    fn set_sfx_muted(&self, muted: bool);
}

/// Sound service that plays nothing.
#[derive(Clone, Copy, Debug, Default)]
pub struct MutedSound;

impl SoundService for MutedSound {
    fn play_effect(&self, _effect: EffectKind) {}

    fn switch_ambient_track(&self, _track: TrackKind) {}

    fn set_music_muted(&self, _muted: bool) {}

    fn set_sfx_muted(&self, _muted: bool) {}
}
