//! Session worker that owns the authoritative [`RoundState`].
//!
//! Receives commands from [`crate::SessionHandle`], runs actions through
//! [`RoundEngine`], keeps the preference records in sync and publishes
//! events to the [`EventBus`].

use std::sync::Arc;

use tokio::sync::{mpsc, oneshot};
use tracing::{debug, error, info, trace, warn};

use party_core::{
    ErrorSeverity, ExecuteError, GameConfig, GameVariant, PcgRng, Phase, Resolution, RoundAction,
    RoundEngine, RoundEnv, RoundError, RoundState, RoundTransition, SetupRequest, StartRound,
    TransitionOutcome, TransitionPhase, TransitionPhaseError, WordHistory, compute_seed,
};

use super::clock::DiscussionClock;
use crate::api::{GenerationRequest, Result, RuntimeError, SoundService};
use crate::audio::{effect_for, track_for};
use crate::events::{EventBus, Notice, RoundEvent, TimerEvent};
use crate::generation::{WordOrigin, WordSource};
use crate::repository::{PreferenceStore, Settings, SettingsPatch};
use crate::session::SessionConfig;

/// Commands accepted by the session worker.
pub enum Command {
    /// Open a game from the hub. Replaces any round in progress.
    SelectGame {
        variant: GameVariant,
        reply: oneshot::Sender<RoundState>,
    },
    /// Close the current game and return to the hub.
    LeaveGame { reply: oneshot::Sender<()> },
    /// Replace the stored player names. Replies with the names as kept.
    SetPlayerNames {
        names: Vec<String>,
        reply: oneshot::Sender<Vec<String>>,
    },
    UpdateSettings {
        patch: SettingsPatch,
        reply: oneshot::Sender<Settings>,
    },
    /// Draw words and deal a round with the stored names and settings.
    StartRound {
        impostor_count: usize,
        reply: oneshot::Sender<Result<TransitionOutcome>>,
    },
    Dispatch {
        action: RoundAction,
        reply: oneshot::Sender<Result<TransitionOutcome>>,
    },
    /// Countdown tick from a [`DiscussionClock`].
    Tick { epoch: u32 },
    QueryState {
        reply: oneshot::Sender<Option<RoundState>>,
    },
    QuerySession {
        reply: oneshot::Sender<SessionSnapshot>,
    },
}

/// Everything the presentation layer needs to render any screen.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionSnapshot {
    /// `None` while on the hub.
    pub variant: Option<GameVariant>,
    pub round: Option<RoundState>,
    pub player_names: Vec<String>,
    pub settings: Settings,
    /// Recently used secret words, newest first.
    pub history: Vec<String>,
}

/// Preferences loaded by the builder before the worker starts.
pub(crate) struct Preferences {
    pub names: Vec<String>,
    pub settings: Settings,
    pub history: WordHistory,
}

/// Collaborators injected by the builder.
pub(crate) struct Services {
    pub store: Arc<dyn PreferenceStore>,
    pub words: WordSource,
    pub sound: Arc<dyn SoundService>,
}

/// Round seeds: reproducible from a base seed, or fresh entropy.
enum SeedSource {
    Fixed { base: u64, drawn: u64 },
    Entropy,
}

impl SeedSource {
    fn new(seed: Option<u64>) -> Self {
        match seed {
            Some(base) => SeedSource::Fixed { base, drawn: 0 },
            None => SeedSource::Entropy,
        }
    }

    fn next(&mut self) -> u64 {
        match self {
            SeedSource::Fixed { base, drawn } => {
                let seed = compute_seed(*base, *drawn, 0, 0);
                *drawn += 1;
                seed
            }
            SeedSource::Entropy => rand::random(),
        }
    }
}

/// Background task that processes session commands.
pub struct SessionWorker {
    config: SessionConfig,
    round: Option<RoundState>,
    names: Vec<String>,
    settings: Settings,
    history: WordHistory,
    store: Arc<dyn PreferenceStore>,
    words: WordSource,
    sound: Arc<dyn SoundService>,
    rng: PcgRng,
    seeds: SeedSource,
    clock: Option<DiscussionClock>,
    command_rx: mpsc::Receiver<Command>,
    command_tx: mpsc::WeakSender<Command>,
    event_bus: EventBus,
}

impl SessionWorker {
    pub(crate) fn new(
        config: SessionConfig,
        preferences: Preferences,
        services: Services,
        command_rx: mpsc::Receiver<Command>,
        command_tx: mpsc::WeakSender<Command>,
        event_bus: EventBus,
    ) -> Self {
        info!(
            target: "runtime::session",
            players = preferences.names.len(),
            history = preferences.history.len(),
            seeded = config.seed.is_some(),
            "session worker initialized"
        );

        Self {
            seeds: SeedSource::new(config.seed),
            config,
            round: None,
            names: preferences.names,
            settings: preferences.settings,
            history: preferences.history,
            store: services.store,
            words: services.words,
            sound: services.sound,
            rng: PcgRng,
            clock: None,
            command_rx,
            command_tx,
            event_bus,
        }
    }

    /// Main worker loop. Ends once every handle is dropped.
    pub async fn run(mut self) {
        loop {
            tokio::select! {
                Some(cmd) = self.command_rx.recv() => {
                    self.handle_command(cmd).await;
                }
                else => break,
            }
        }
        debug!(target: "runtime::session", "session worker stopped");
    }

    async fn handle_command(&mut self, cmd: Command) {
        match cmd {
            Command::SelectGame { variant, reply } => {
                let state = self.select_game(variant);
                if reply.send(state).is_err() {
                    debug!("SelectGame reply channel closed (caller dropped)");
                }
            }
            Command::LeaveGame { reply } => {
                self.leave_game();
                if reply.send(()).is_err() {
                    debug!("LeaveGame reply channel closed (caller dropped)");
                }
            }
            Command::SetPlayerNames { names, reply } => {
                let names = self.set_player_names(names);
                if reply.send(names).is_err() {
                    debug!("SetPlayerNames reply channel closed (caller dropped)");
                }
            }
            Command::UpdateSettings { patch, reply } => {
                let settings = self.update_settings(&patch);
                if reply.send(settings).is_err() {
                    debug!("UpdateSettings reply channel closed (caller dropped)");
                }
            }
            Command::StartRound {
                impostor_count,
                reply,
            } => {
                let result = self.start_round(impostor_count).await;
                if reply.send(result).is_err() {
                    debug!("StartRound reply channel closed (caller dropped)");
                }
            }
            Command::Dispatch { action, reply } => {
                let result = self.execute(action);
                if reply.send(result).is_err() {
                    debug!("Dispatch reply channel closed (caller dropped)");
                }
            }
            Command::Tick { epoch } => {
                if self.round.is_none() {
                    trace!(target: "runtime::session", epoch, "tick without a game, dropped");
                    return;
                }
                // Failures are reported inside `execute`.
                let _ = self.execute(RoundAction::timer_tick(epoch));
            }
            Command::QueryState { reply } => {
                if reply.send(self.round.clone()).is_err() {
                    debug!("QueryState reply channel closed (caller dropped)");
                }
            }
            Command::QuerySession { reply } => {
                if reply.send(self.snapshot()).is_err() {
                    debug!("QuerySession reply channel closed (caller dropped)");
                }
            }
        }
    }

    fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            variant: self.round.as_ref().map(|state| state.variant),
            round: self.round.clone(),
            player_names: self.names.clone(),
            settings: self.settings.clone(),
            history: self.history.words().to_vec(),
        }
    }

    fn select_game(&mut self, variant: GameVariant) -> RoundState {
        let state = RoundState::new(variant)
            .with_options(self.settings.use_hint_word, self.settings.use_timer);

        self.round = Some(state.clone());
        self.sync_clock(false);

        info!(target: "runtime::session", variant = variant.as_str(), "game selected");
        self.event_bus.publish(RoundEvent::GameSelected {
            variant: Some(variant),
        });
        self.sound.switch_ambient_track(track_for(self.round.as_ref()));

        state
    }

    fn leave_game(&mut self) {
        if self.round.take().is_none() {
            return;
        }
        self.sync_clock(false);

        info!(target: "runtime::session", "left game");
        self.event_bus
            .publish(RoundEvent::GameSelected { variant: None });
        self.sound.switch_ambient_track(track_for(None));
    }

    fn set_player_names(&mut self, names: Vec<String>) -> Vec<String> {
        let mut names: Vec<String> = names.into_iter().map(|n| n.trim().to_owned()).collect();
        names.truncate(GameConfig::MAX_PLAYERS);

        if let Err(error) = self.store.save_player_names(&names) {
            self.persistence_failed("player names", &error);
        }
        self.names = names.clone();
        names
    }

    fn update_settings(&mut self, patch: &SettingsPatch) -> Settings {
        let before = self.settings.clone();

        match self.store.update_settings(patch) {
            Ok(stored) => self.settings = stored,
            Err(error) => {
                patch.apply_to(&mut self.settings);
                self.persistence_failed("settings", &error);
            }
        }

        if self.settings.music_muted != before.music_muted {
            self.sound.set_music_muted(self.settings.music_muted);
            if !self.settings.music_muted {
                self.sound.switch_ambient_track(track_for(self.round.as_ref()));
            }
        }
        if self.settings.sfx_muted != before.sfx_muted {
            self.sound.set_sfx_muted(self.settings.sfx_muted);
        }

        if let Some(state) = self.round.as_mut()
            && state.status == Phase::Setup
        {
            state.use_hint_word = self.settings.use_hint_word;
            state.use_timer = self.settings.use_timer;
        }

        self.settings.clone()
    }

    /// Draws a word pair and deals a round.
    ///
    /// The phase is checked before the generator is called so an impossible
    /// start never costs a generation request.
    async fn start_round(&mut self, impostor_count: usize) -> Result<TransitionOutcome> {
        let state = self.round.as_ref().ok_or(RuntimeError::NoGameSelected)?;
        if state.status != Phase::Setup {
            let error = ExecuteError::new(
                StartRound::NAME,
                TransitionPhaseError::new(
                    TransitionPhase::PreValidate,
                    RoundError::wrong_phase(StartRound::NAME, state.status),
                ),
            );
            self.report_failure(StartRound::NAME, &error);
            return Err(error.into());
        }
        let variant = state.variant;

        let setup = SetupRequest::new(self.names.iter().cloned())
            .with_impostors(impostor_count)
            .with_hint_word(self.settings.use_hint_word)
            .with_timer(self.settings.use_timer)
            .sanitize();

        let seed = self.seeds.next();
        let request = GenerationRequest::new(
            self.settings.selected_category.clone(),
            variant,
            self.history.words().to_vec(),
            seed,
        );

        let drawn = match self.words.draw(&request, seed).await {
            Ok(drawn) => drawn,
            Err(error) => {
                warn!(target: "runtime::session", error = %error, "round start aborted");
                self.event_bus.publish(Notice::StartAborted {
                    reason: error.to_string(),
                });
                return Err(error);
            }
        };

        if let WordOrigin::Fallback { reason } = &drawn.origin {
            self.event_bus.publish(Notice::GenerationFallback {
                reason: reason.clone(),
            });
        }

        debug!(
            target: "runtime::session",
            players = setup.player_count(),
            impostors = setup.impostor_count,
            category = %drawn.pair.category,
            "starting round"
        );

        self.execute(RoundAction::start(setup, drawn.pair, seed))
    }

    /// Runs one action through the engine and reacts to the outcome.
    fn execute(&mut self, action: RoundAction) -> Result<TransitionOutcome> {
        let Some(state) = self.round.as_mut() else {
            return Err(RuntimeError::NoGameSelected);
        };

        let env = RoundEnv::new(&self.rng, &self.config.game_config);
        let result = RoundEngine::new(state).execute(env, &action);
        match result {
            Ok(outcome) => {
                self.after_transition(&action, outcome);
                Ok(outcome)
            }
            Err(error) => {
                self.report_failure(action.name(), &error);
                Err(error.into())
            }
        }
    }

    fn after_transition(&mut self, action: &RoundAction, outcome: TransitionOutcome) {
        debug!(
            target: "runtime::session",
            action = action.name(),
            from = %outcome.from,
            to = %outcome.to,
            resolution = ?outcome.resolution,
            "action applied"
        );

        let mut expired = false;
        match outcome.resolution {
            Resolution::Started { .. } => self.record_secret_word(),
            Resolution::TimerTicked { remaining } => {
                if let Some(clock) = &self.clock {
                    self.event_bus.publish(TimerEvent::Tick {
                        epoch: clock.epoch(),
                        remaining,
                    });
                }
            }
            Resolution::TimerExpired => {
                if let Some(clock) = &self.clock {
                    self.event_bus.publish(TimerEvent::Expired {
                        epoch: clock.epoch(),
                    });
                }
                expired = true;
            }
            _ => {}
        }

        self.sync_clock(expired);

        if let Some(effect) = effect_for(action) {
            self.sound.play_effect(effect);
        }
        if outcome.phase_changed() {
            self.sound.switch_ambient_track(track_for(self.round.as_ref()));
        }

        self.event_bus.publish(RoundEvent::Transitioned {
            action: action.name(),
            outcome,
        });
    }

    fn report_failure(&self, action: &'static str, error: &ExecuteError) {
        if error.severity() == ErrorSeverity::Stale {
            trace!(
                target: "runtime::session",
                action,
                error = %error,
                "stale input dropped"
            );
            return;
        }

        if error.is_rejection() && !error.severity().is_internal() {
            debug!(
                target: "runtime::session",
                action,
                phase = error.phase().as_str(),
                error = %error,
                "action rejected"
            );
        } else {
            error!(
                target: "runtime::session",
                action,
                phase = error.phase().as_str(),
                severity = %error.severity(),
                error = %error,
                "action failed"
            );
        }

        let status = self
            .round
            .as_ref()
            .map(|state| state.status)
            .unwrap_or_default();
        self.event_bus.publish(RoundEvent::Rejected {
            action,
            phase: error.phase(),
            status,
            error: error.error().to_string(),
        });
    }

    /// Starts, keeps or stops the countdown task to match the round state.
    fn sync_clock(&mut self, expired: bool) {
        let armed = self.round.as_ref().and_then(|state| state.discussion_timer);
        let running = self.clock.as_ref().map(DiscussionClock::epoch);
        if running == armed.map(|timer| timer.epoch()) {
            return;
        }

        if let Some(clock) = self.clock.take()
            && !expired
        {
            self.event_bus.publish(TimerEvent::Cancelled {
                epoch: clock.epoch(),
            });
        }

        if let Some(timer) = armed {
            let epoch = timer.epoch();
            self.clock = Some(DiscussionClock::start(
                epoch,
                self.command_tx.clone(),
                self.config.tick_interval,
            ));
            debug!(
                target: "runtime::session",
                epoch,
                seconds = timer.remaining(),
                "discussion countdown armed"
            );
            self.event_bus.publish(TimerEvent::Started {
                epoch,
                seconds: timer.remaining(),
            });
        }
    }

    fn record_secret_word(&mut self) {
        let Some(pair) = self.round.as_ref().and_then(|state| state.word_pair.as_ref()) else {
            return;
        };
        self.history.record(pair.secret_word.clone());

        if let Err(error) = self.store.save_word_history(self.history.words()) {
            self.persistence_failed("word history", &error);
        }
    }

    fn persistence_failed(&self, record: &'static str, error: &dyn std::error::Error) {
        warn!(target: "runtime::session", record, error = %error, "failed to persist preference");
        self.event_bus.publish(Notice::PersistenceFailed {
            reason: format!("{record}: {error}"),
        });
    }
}
