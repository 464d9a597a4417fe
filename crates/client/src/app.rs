//! Pass-and-play loop over stdin/stdout.
//!
//! Every iteration renders the screen for the current phase, reads one line
//! and turns it into a session command. Timer and notice events are printed
//! by a separate task as they arrive.

use anyhow::Result;
use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};
use tokio::sync::broadcast::error::RecvError;

use party_content::CATEGORIES;
use party_core::{GameConfig, GameVariant, Phase, RoundState};
use party_runtime::{RuntimeError, SessionEvent, SessionHandle, SessionSnapshot, Topic};

use crate::presentation as screen;

pub struct App {
    handle: SessionHandle,
    input: Lines<BufReader<Stdin>>,
    /// Whether the current revealer has already flipped their card.
    card_open: bool,
}

enum Flow {
    Continue,
    Quit,
}

impl App {
    pub fn new(handle: SessionHandle) -> Self {
        Self {
            handle,
            input: BufReader::new(tokio::io::stdin()).lines(),
            card_open: false,
        }
    }

    pub async fn run(mut self) -> Result<()> {
        spawn_event_printer(&self.handle);

        loop {
            let snapshot = self.handle.query_session().await?;
            let flow = match snapshot.round.clone() {
                None => self.hub(&snapshot).await?,
                Some(state) => self.round(&state, &snapshot).await?,
            };
            if let Flow::Quit = flow {
                break;
            }
        }

        tracing::info!("client loop finished");
        Ok(())
    }

    async fn read_line(&mut self) -> Result<Option<String>> {
        Ok(self
            .input
            .next_line()
            .await?
            .map(|line| line.trim().to_owned()))
    }

    async fn hub(&mut self, snapshot: &SessionSnapshot) -> Result<Flow> {
        println!("{}", screen::hub(snapshot));
        let Some(line) = self.read_line().await? else {
            return Ok(Flow::Quit);
        };

        match line.as_str() {
            "1" | "2" | "3" => {
                let variant = match line.as_str() {
                    "1" => GameVariant::Impostor,
                    "2" => GameVariant::WordSpy,
                    _ => GameVariant::FragenMix,
                };
                self.handle.select_game(variant).await?;
            }
            "n" => self.edit_names().await?,
            "k" => self.pick_category().await?,
            "m" => {
                self.handle
                    .set_music_muted(!snapshot.settings.music_muted)
                    .await?;
            }
            "s" => {
                self.handle
                    .set_sfx_muted(!snapshot.settings.sfx_muted)
                    .await?;
            }
            "q" => return Ok(Flow::Quit),
            _ => {}
        }
        Ok(Flow::Continue)
    }

    async fn round(&mut self, state: &RoundState, snapshot: &SessionSnapshot) -> Result<Flow> {
        match state.status {
            Phase::Setup => self.setup(state, snapshot).await,
            Phase::Revealing => self.reveal(state).await,
            Phase::InputPhase => self.collect_answer(state).await,
            Phase::Showdown => {
                let question = state
                    .word_pair
                    .as_ref()
                    .filter(|_| state.rules().asks_questions)
                    .map(|pair| pair.secret_word.as_str());
                println!("{}", screen::showdown(&state.showdown_entries(), question));
                self.on_enter(|handle| async move { handle.continue_to_discussion().await })
                    .await
            }
            Phase::Discussion => {
                println!("{}", screen::discussion(state));
                self.on_enter(|handle| async move { handle.start_vote().await })
                    .await
            }
            Phase::Voting => self.vote(state).await,
            Phase::RevealVote => {
                if let Some(player) = state.voted_player() {
                    println!("{}", screen::reveal_vote(player));
                }
                self.on_enter(|handle| async move { handle.resolve_vote().await })
                    .await
            }
            Phase::SpyGuessing => {
                if let Some(player) = state.voted_player() {
                    println!("{}", screen::spy_guess(player));
                }
                let Some(guess) = self.read_line().await? else {
                    return Ok(Flow::Quit);
                };
                report(self.handle.submit_guess(guess).await)?;
                Ok(Flow::Continue)
            }
            Phase::GameOver => self.game_over(state).await,
        }
    }

    async fn setup(&mut self, state: &RoundState, snapshot: &SessionSnapshot) -> Result<Flow> {
        println!("{}", screen::setup(state, snapshot));
        let Some(line) = self.read_line().await? else {
            return Ok(Flow::Quit);
        };

        let rules = state.rules();
        match line.as_str() {
            "n" => self.edit_names().await?,
            "k" => self.pick_category().await?,
            "h" if rules.honours_hint_toggle => {
                self.handle.set_use_hint_word(!state.use_hint_word).await?;
            }
            "t" if rules.offers_timer => {
                self.handle.set_use_timer(!state.use_timer).await?;
            }
            "b" => self.handle.leave_game().await?,
            other => {
                let impostors = other.parse().unwrap_or(GameConfig::MIN_IMPOSTORS);
                println!("  Wörter werden gemischt …");
                self.card_open = false;
                report(self.handle.start_round(impostors).await)?;
            }
        }
        Ok(Flow::Continue)
    }

    async fn reveal(&mut self, state: &RoundState) -> Result<Flow> {
        let Some(card) = state.reveal_card() else {
            return Ok(Flow::Continue);
        };

        if !self.card_open {
            println!("{}", screen::pass_device(card.player));
            if self.read_line().await?.is_none() {
                return Ok(Flow::Quit);
            }
            self.card_open = true;
            return Ok(Flow::Continue);
        }

        println!("{}", screen::reveal_card(&card));
        if self.read_line().await?.is_none() {
            return Ok(Flow::Quit);
        }
        println!("{}", screen::blank_screen());
        self.card_open = false;
        report(self.handle.confirm_reveal().await)?;
        Ok(Flow::Continue)
    }

    async fn collect_answer(&mut self, state: &RoundState) -> Result<Flow> {
        let Some(prompt) = state.input_prompt() else {
            return Ok(Flow::Continue);
        };
        println!("{}", screen::input_prompt(&prompt));
        let Some(answer) = self.read_line().await? else {
            return Ok(Flow::Quit);
        };
        report(self.handle.submit_answer(answer).await)?;
        Ok(Flow::Continue)
    }

    async fn vote(&mut self, state: &RoundState) -> Result<Flow> {
        let candidates = state.vote_candidates();
        println!("{}", screen::voting(&candidates));
        let Some(line) = self.read_line().await? else {
            return Ok(Flow::Quit);
        };

        let choice = line
            .parse::<usize>()
            .ok()
            .and_then(|n| n.checked_sub(1))
            .and_then(|index| candidates.get(index));
        match choice {
            Some(player) => report(self.handle.cast_vote(player.id).await)?,
            None => println!("  Bitte eine Nummer aus der Liste wählen."),
        }
        Ok(Flow::Continue)
    }

    async fn game_over(&mut self, state: &RoundState) -> Result<Flow> {
        if let Some(summary) = state.summary() {
            println!("{}", screen::summary(&summary));
        }
        let Some(line) = self.read_line().await? else {
            return Ok(Flow::Quit);
        };
        match line.as_str() {
            "r" => report(self.handle.reset().await)?,
            "b" => self.handle.leave_game().await?,
            _ => {}
        }
        Ok(Flow::Continue)
    }

    /// Waits for Enter, then runs `action` unless the phase moved on in the
    /// meantime (e.g. the countdown ran out).
    async fn on_enter<F, Fut>(&mut self, action: F) -> Result<Flow>
    where
        F: FnOnce(SessionHandle) -> Fut,
        Fut: std::future::Future<Output = party_runtime::Result<party_core::TransitionOutcome>>,
    {
        let before = self.handle.query_state().await?.map(|s| s.status);
        if self.read_line().await?.is_none() {
            return Ok(Flow::Quit);
        }
        let after = self.handle.query_state().await?.map(|s| s.status);
        if before == after {
            report(action(self.handle.clone()).await)?;
        }
        Ok(Flow::Continue)
    }

    async fn edit_names(&mut self) -> Result<()> {
        println!(
            "  Namen mit Komma getrennt ({}-{} Spieler):",
            GameConfig::MIN_PLAYERS,
            GameConfig::MAX_PLAYERS
        );
        if let Some(line) = self.read_line().await? {
            let names = line.split(',').map(str::to_owned).collect();
            self.handle.set_player_names(names).await?;
        }
        Ok(())
    }

    async fn pick_category(&mut self) -> Result<()> {
        for (index, category) in CATEGORIES.iter().enumerate() {
            println!("  {:>2}) {category}", index + 1);
        }
        if let Some(line) = self.read_line().await?
            && let Some(category) = line
                .parse::<usize>()
                .ok()
                .and_then(|n| n.checked_sub(1))
                .and_then(|index| CATEGORIES.get(index))
        {
            self.handle.select_category(*category).await?;
        }
        Ok(())
    }
}

/// Prints rejections and aborted starts; anything else ends the client.
fn report<T>(result: party_runtime::Result<T>) -> Result<()> {
    match result {
        Ok(_) => Ok(()),
        Err(RuntimeError::Rejected(error)) => {
            println!("  ✗ {}", error.error());
            Ok(())
        }
        Err(RuntimeError::StartAborted(_)) => Ok(()),
        Err(error) => Err(error.into()),
    }
}

fn spawn_event_printer(handle: &SessionHandle) {
    let mut timer = handle.subscribe(Topic::Timer);
    let mut notices = handle.subscribe(Topic::Notice);

    tokio::spawn(async move {
        loop {
            let event = tokio::select! {
                event = timer.recv() => event,
                event = notices.recv() => event,
            };
            match event {
                Ok(SessionEvent::Timer(event)) => {
                    if let Some(line) = screen::timer(&event) {
                        println!("{line}");
                    }
                }
                Ok(SessionEvent::Notice(notice)) => println!("{}", screen::notice(&notice)),
                Ok(_) => {}
                Err(RecvError::Lagged(skipped)) => {
                    tracing::warn!(skipped, "event printer lagged");
                }
                Err(RecvError::Closed) => break,
            }
        }
    });
}
