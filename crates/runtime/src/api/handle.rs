//! Cloneable façade for issuing commands to the session.
//!
//! [`SessionHandle`] hides channel plumbing and offers async helpers for
//! every player-facing operation plus event subscriptions.
use std::collections::HashMap;

use tokio::sync::{broadcast, mpsc, oneshot};

use party_core::{GameVariant, PlayerId, RoundAction, RoundState, TransitionOutcome};

use super::errors::{Result, RuntimeError};
use crate::events::{EventBus, SessionEvent, Topic};
use crate::repository::{Settings, SettingsPatch};
use crate::workers::{Command, SessionSnapshot};

/// Client-facing handle to interact with the session
#[derive(Clone)]
pub struct SessionHandle {
    command_tx: mpsc::Sender<Command>,
    event_bus: EventBus,
}

impl SessionHandle {
    pub(crate) fn new(command_tx: mpsc::Sender<Command>, event_bus: EventBus) -> Self {
        Self {
            command_tx,
            event_bus,
        }
    }

    async fn request<T>(&self, command: impl FnOnce(oneshot::Sender<T>) -> Command) -> Result<T> {
        let (reply_tx, reply_rx) = oneshot::channel();

        self.command_tx
            .send(command(reply_tx))
            .await
            .map_err(|_| RuntimeError::CommandChannelClosed)?;

        reply_rx.await.map_err(RuntimeError::ReplyChannelClosed)
    }

    // ===== hub =====

    /// Opens `variant` in `Setup`, discarding any round in progress.
    pub async fn select_game(&self, variant: GameVariant) -> Result<RoundState> {
        self.request(|reply| Command::SelectGame { variant, reply })
            .await
    }

    /// Returns to the hub.
    pub async fn leave_game(&self) -> Result<()> {
        self.request(|reply| Command::LeaveGame { reply }).await
    }

    // ===== preferences =====

    /// Stores the player list used by the next start. Names are trimmed and
    /// capped at twelve; the kept list is returned.
    pub async fn set_player_names(&self, names: Vec<String>) -> Result<Vec<String>> {
        self.request(|reply| Command::SetPlayerNames { names, reply })
            .await
    }

    pub async fn update_settings(&self, patch: SettingsPatch) -> Result<Settings> {
        self.request(|reply| Command::UpdateSettings { patch, reply })
            .await
    }

    pub async fn select_category(&self, category: impl Into<String>) -> Result<Settings> {
        self.update_settings(SettingsPatch::default().selected_category(category))
            .await
    }

    pub async fn set_music_muted(&self, muted: bool) -> Result<Settings> {
        self.update_settings(SettingsPatch::default().music_muted(muted))
            .await
    }

    pub async fn set_sfx_muted(&self, muted: bool) -> Result<Settings> {
        self.update_settings(SettingsPatch::default().sfx_muted(muted))
            .await
    }

    pub async fn set_use_timer(&self, enabled: bool) -> Result<Settings> {
        self.update_settings(SettingsPatch::default().use_timer(enabled))
            .await
    }

    pub async fn set_use_hint_word(&self, enabled: bool) -> Result<Settings> {
        self.update_settings(SettingsPatch::default().use_hint_word(enabled))
            .await
    }

    // ===== round =====

    /// Draws a word pair and deals a new round with the stored names.
    ///
    /// `impostor_count` is clamped to what the roster allows.
    pub async fn start_round(&self, impostor_count: usize) -> Result<TransitionOutcome> {
        self.request(|reply| Command::StartRound {
            impostor_count,
            reply,
        })
        .await?
    }

    /// Runs `action` against the current round.
    ///
    /// A refused action surfaces as [`RuntimeError::Rejected`] and leaves the
    /// round untouched.
    pub async fn dispatch(&self, action: RoundAction) -> Result<TransitionOutcome> {
        self.request(|reply| Command::Dispatch { action, reply })
            .await?
    }

    pub async fn confirm_reveal(&self) -> Result<TransitionOutcome> {
        self.dispatch(RoundAction::confirm_reveal()).await
    }

    pub async fn submit_answer(&self, answer: impl Into<String>) -> Result<TransitionOutcome> {
        self.dispatch(RoundAction::submit_answer(answer)).await
    }

    pub async fn continue_to_discussion(&self) -> Result<TransitionOutcome> {
        self.dispatch(RoundAction::continue_to_discussion()).await
    }

    pub async fn start_vote(&self) -> Result<TransitionOutcome> {
        self.dispatch(RoundAction::start_vote()).await
    }

    pub async fn cast_vote(&self, target: PlayerId) -> Result<TransitionOutcome> {
        self.dispatch(RoundAction::cast_vote(target)).await
    }

    pub async fn resolve_vote(&self) -> Result<TransitionOutcome> {
        self.dispatch(RoundAction::resolve_vote()).await
    }

    pub async fn submit_guess(&self, guess: impl Into<String>) -> Result<TransitionOutcome> {
        self.dispatch(RoundAction::submit_guess(guess)).await
    }

    /// Back to `Setup` with the same game selected.
    pub async fn reset(&self) -> Result<TransitionOutcome> {
        self.dispatch(RoundAction::reset()).await
    }

    // ===== queries =====

    /// Snapshot of the current round, `None` on the hub.
    pub async fn query_state(&self) -> Result<Option<RoundState>> {
        self.request(|reply| Command::QueryState { reply }).await
    }

    pub async fn query_session(&self) -> Result<SessionSnapshot> {
        self.request(|reply| Command::QuerySession { reply }).await
    }

    // ===== events =====

    /// Subscribe to events from a specific topic
    ///
    /// # Topics
    ///
    /// - `Topic::Round` - game selection, accepted and rejected actions
    /// - `Topic::Timer` - discussion countdown
    /// - `Topic::Notice` - generation fallbacks, aborted starts, storage failures
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use party_runtime::Topic;
    ///
    /// let mut timer_rx = handle.subscribe(Topic::Timer);
    /// while let Ok(event) = timer_rx.recv().await {
    ///     // redraw the countdown
    /// }
    /// ```
    pub fn subscribe(&self, topic: Topic) -> broadcast::Receiver<SessionEvent> {
        self.event_bus.subscribe(topic)
    }

    /// Subscribe to multiple topics at once
    pub fn subscribe_multiple(
        &self,
        topics: &[Topic],
    ) -> HashMap<Topic, broadcast::Receiver<SessionEvent>> {
        self.event_bus.subscribe_multiple(topics)
    }

    /// Get a reference to the event bus for advanced usage
    pub fn event_bus(&self) -> &EventBus {
        &self.event_bus
    }
}
