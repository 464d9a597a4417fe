//! Session runtime for the FamilyTime party games.
//!
//! This crate wires the deterministic round engine from `party-core` to the
//! outside world: word generation with an offline fallback, persisted
//! preferences, the discussion countdown and sound cues. Consumers build a
//! [`Session`], drive it through a [`SessionHandle`] and subscribe to events.
//!
//! Modules are organized by responsibility:
//! - [`session`] hosts the orchestrator, builder and configuration
//! - [`api`] exposes the types downstream clients interact with
//! - [`events`] provides topic-based event bus for flexible event routing
//! - [`generation`] turns generator output (or the fallback pool) into pairs
//! - [`repository`] persists player names, settings and word history
//! - [`workers`] keeps background tasks internal to the crate
pub mod api;
pub mod audio;
pub mod events;
pub mod generation;
pub mod repository;
pub mod session;

mod workers;

pub use api::{
    EffectKind, FixedGenerator, GenerationError, GenerationRequest, MutedSound, OfflineGenerator,
    Result, RuntimeError, SessionHandle, SoundService, TrackKind, WordGenerator,
};
pub use events::{EventBus, Notice, RoundEvent, SessionEvent, TimerEvent, Topic};
pub use generation::{DrawnWords, Prompt, WordOrigin, WordSource, build_prompt, parse_word_pair};
pub use repository::{
    FilePreferenceStore, InMemoryPreferenceStore, PreferenceStore, RecordStore, RepositoryError,
    Settings, SettingsPatch,
};
pub use session::{Session, SessionBuilder, SessionConfig};
pub use workers::SessionSnapshot;
