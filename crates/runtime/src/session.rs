//! Session orchestrator.
//!
//! A [`Session`] owns the worker task, wires up the command channel and the
//! event bus, and hands out cloneable [`SessionHandle`]s to front-ends.

use std::env;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::warn;

use party_content::WordPool;
use party_core::{GameConfig, SetupRequest, WordHistory};

use crate::api::{
    MutedSound, OfflineGenerator, Result, RuntimeError, SessionHandle, SoundService, WordGenerator,
};
use crate::audio::track_for;
use crate::events::EventBus;
use crate::generation::WordSource;
use crate::repository::{InMemoryPreferenceStore, PreferenceStore, RepositoryError, Settings};
use crate::workers::{Command, Preferences, Services, SessionWorker};

/// Session configuration shared by the orchestrator and the worker.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    pub game_config: GameConfig,
    pub command_buffer_size: usize,
    pub event_buffer_size: usize,
    /// Base seed for reproducible rounds. `None` draws fresh entropy.
    pub seed: Option<u64>,
    /// Countdown period; one tick removes one second from the timer.
    pub tick_interval: Duration,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            game_config: GameConfig::default(),
            command_buffer_size: 32,
            event_buffer_size: 100,
            seed: None,
            tick_interval: Duration::from_secs(1),
        }
    }
}

impl SessionConfig {
    /// Defaults overridden by process environment variables.
    ///
    /// - `PARTY_DISCUSSION_SECONDS` - countdown length (default: 180)
    /// - `PARTY_HISTORY_CAP` - remembered secret words (default: 50)
    /// - `PARTY_SEED` - base seed for reproducible rounds
    /// - `PARTY_COMMAND_BUFFER` - worker command queue size (default: 32)
    /// - `PARTY_EVENT_BUFFER` - per-topic event capacity (default: 100)
    pub fn from_env() -> Self {
        Self::default().with_env_overrides()
    }

    /// Applies the `PARTY_*` overrides on top of `self`.
    pub fn with_env_overrides(mut self) -> Self {
        if let Some(seconds) = read_env::<u32>("PARTY_DISCUSSION_SECONDS") {
            self.game_config.discussion_seconds = seconds.max(1);
        }
        if let Some(cap) = read_env::<usize>("PARTY_HISTORY_CAP") {
            self.game_config.history_cap = cap.max(1);
        }
        if let Some(seed) = read_env::<u64>("PARTY_SEED") {
            self.seed = Some(seed);
        }
        if let Some(capacity) = read_env::<usize>("PARTY_COMMAND_BUFFER") {
            self.command_buffer_size = capacity.max(1);
        }
        if let Some(capacity) = read_env::<usize>("PARTY_EVENT_BUFFER") {
            self.event_buffer_size = capacity.max(1);
        }
        self
    }

    pub fn with_game_config(mut self, game_config: GameConfig) -> Self {
        self.game_config = game_config;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_tick_interval(mut self, interval: Duration) -> Self {
        self.tick_interval = interval;
        self
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}

/// Running game session.
pub struct Session {
    handle: SessionHandle,
    worker: JoinHandle<()>,
}

impl Session {
    pub fn builder() -> SessionBuilder {
        SessionBuilder::new()
    }

    /// Cloneable handle for front-ends and tasks.
    pub fn handle(&self) -> SessionHandle {
        self.handle.clone()
    }

    /// Drops this session's handle and waits for the worker to finish.
    ///
    /// The worker stops once every clone of the handle is gone.
    pub async fn shutdown(self) -> Result<()> {
        drop(self.handle);
        self.worker.await.map_err(RuntimeError::WorkerJoin)
    }
}

/// Builder for [`Session`].
///
/// Every collaborator is optional: the defaults are an in-memory store, an
/// offline generator, the built-in word pool and no sound.
pub struct SessionBuilder {
    config: SessionConfig,
    store: Option<Arc<dyn PreferenceStore>>,
    generator: Option<Arc<dyn WordGenerator>>,
    pool: Option<WordPool>,
    sound: Option<Arc<dyn SoundService>>,
}

impl SessionBuilder {
    fn new() -> Self {
        Self {
            config: SessionConfig::default(),
            store: None,
            generator: None,
            pool: None,
            sound: None,
        }
    }

    pub fn config(mut self, config: SessionConfig) -> Self {
        self.config = config;
        self
    }

    pub fn store(mut self, store: impl PreferenceStore + 'static) -> Self {
        self.store = Some(Arc::new(store));
        self
    }

    pub fn shared_store(mut self, store: Arc<dyn PreferenceStore>) -> Self {
        self.store = Some(store);
        self
    }

    pub fn generator(mut self, generator: impl WordGenerator + 'static) -> Self {
        self.generator = Some(Arc::new(generator));
        self
    }

    pub fn word_pool(mut self, pool: WordPool) -> Self {
        self.pool = Some(pool);
        self
    }

    pub fn sound(mut self, sound: impl SoundService + 'static) -> Self {
        self.sound = Some(Arc::new(sound));
        self
    }

    pub fn shared_sound(mut self, sound: Arc<dyn SoundService>) -> Self {
        self.sound = Some(sound);
        self
    }

    /// Loads the stored preferences and spawns the worker.
    ///
    /// Unreadable records (bad JSON) fall back to defaults; I/O failures are
    /// returned.
    pub async fn build(self) -> Result<Session> {
        let store = self
            .store
            .unwrap_or_else(|| Arc::new(InMemoryPreferenceStore::new()));
        let generator = self.generator.unwrap_or_else(|| Arc::new(OfflineGenerator));
        let pool = self.pool.unwrap_or_else(WordPool::builtin);
        let sound = self.sound.unwrap_or_else(|| Arc::new(MutedSound));

        let preferences = load_preferences(store.as_ref(), &self.config.game_config)?;

        sound.set_music_muted(preferences.settings.music_muted);
        sound.set_sfx_muted(preferences.settings.sfx_muted);
        sound.switch_ambient_track(track_for(None));

        let event_bus = EventBus::with_capacity(self.config.event_buffer_size);
        let (command_tx, command_rx) = mpsc::channel::<Command>(self.config.command_buffer_size);
        let handle = SessionHandle::new(command_tx.clone(), event_bus.clone());

        let worker = SessionWorker::new(
            self.config,
            preferences,
            Services {
                store,
                words: WordSource::new(generator, pool),
                sound,
            },
            command_rx,
            command_tx.downgrade(),
            event_bus,
        );
        drop(command_tx);

        let worker = tokio::spawn(async move {
            worker.run().await;
        });

        Ok(Session { handle, worker })
    }
}

fn load_preferences(store: &dyn PreferenceStore, config: &GameConfig) -> Result<Preferences> {
    let names = recover(store.load_player_names(), "player names")?
        .flatten()
        .unwrap_or_else(SetupRequest::default_names);
    let settings = recover(store.load_settings(), "settings")?.unwrap_or_else(Settings::default);
    let history = recover(store.load_word_history(), "word history")?.unwrap_or_default();

    Ok(Preferences {
        names,
        settings,
        history: WordHistory::from_words(history, config.history_cap),
    })
}

/// Turns a corrupt record into `None` so the caller can use its default.
fn recover<T>(
    result: std::result::Result<T, RepositoryError>,
    record: &'static str,
) -> Result<Option<T>> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(error @ RepositoryError::Json { .. }) => {
            warn!(target: "runtime::session", record, error = %error, "ignoring unreadable record");
            Ok(None)
        }
        Err(error) => Err(error.into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_game_constants() {
        let config = SessionConfig::default();
        assert_eq!(config.game_config.discussion_seconds, 180);
        assert_eq!(config.command_buffer_size, 32);
        assert_eq!(config.tick_interval, Duration::from_secs(1));
        assert!(config.seed.is_none());
    }

    #[test]
    fn builder_setters() {
        let config = SessionConfig::default()
            .with_seed(9)
            .with_game_config(GameConfig::new().with_discussion_seconds(5));
        assert_eq!(config.seed, Some(9));
        assert_eq!(config.game_config.discussion_seconds, 5);
    }
}
