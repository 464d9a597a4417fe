use std::sync::{Arc, Mutex};

use party_core::{GameVariant, Phase, PlayerId, Resolution, Role, RoundError, RoundState, WordPair};
use party_runtime::{
    EffectKind, FixedGenerator, RoundEvent, RuntimeError, Session, SessionConfig, SessionEvent,
    SoundService, Topic, TrackKind,
};

fn names(list: &[&str]) -> Vec<String> {
    list.iter().map(|name| name.to_string()).collect()
}

async fn session(pair: WordPair) -> Session {
    Session::builder()
        .config(SessionConfig::default().with_seed(42))
        .generator(FixedGenerator::new(pair))
        .build()
        .await
        .expect("session should build")
}

fn first_with(state: &RoundState, wanted: impl Fn(Role) -> bool) -> PlayerId {
    state
        .players
        .iter()
        .find(|p| p.is_active() && wanted(p.role))
        .map(|p| p.id)
        .expect("player with role")
}

#[tokio::test]
async fn impostor_caught_ends_with_civilian_win() {
    let session = session(WordPair::new("Leuchtturm", "Navigation", "Orte")).await;
    let handle = session.handle();
    let mut round_events = handle.subscribe(Topic::Round);

    handle
        .set_player_names(names(&["Anna", "Ben", "Carla", "Dieter"]))
        .await
        .unwrap();
    handle.select_game(GameVariant::Impostor).await.unwrap();

    let outcome = handle.start_round(1).await.unwrap();
    assert_eq!(outcome.resolution, Resolution::Started { players: 4 });
    assert_eq!(outcome.to, Phase::Revealing);

    let state = handle.query_state().await.unwrap().unwrap();
    let names: Vec<_> = state.players.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, ["Anna", "Ben", "Carla", "Dieter"]);
    assert_eq!(state.players.iter().filter(|p| p.role == Role::Impostor).count(), 1);

    for _ in 0..3 {
        assert_eq!(handle.confirm_reveal().await.unwrap().to, Phase::Revealing);
    }
    assert_eq!(handle.confirm_reveal().await.unwrap().to, Phase::Discussion);

    handle.start_vote().await.unwrap();
    let impostor = first_with(&state, |role| role == Role::Impostor);
    assert_eq!(handle.cast_vote(impostor).await.unwrap().to, Phase::RevealVote);

    let outcome = handle.resolve_vote().await.unwrap();
    assert_eq!(
        outcome.resolution,
        Resolution::Eliminated {
            player: impostor,
            role: Role::Impostor,
            winner: Some(Role::Civilian),
        }
    );

    let state = handle.query_state().await.unwrap().unwrap();
    assert_eq!(state.status, Phase::GameOver);
    assert_eq!(state.winner, Some(Role::Civilian));

    let mut started = false;
    while let Ok(event) = round_events.try_recv() {
        if let SessionEvent::Round(RoundEvent::Transitioned { action, outcome }) = event
            && matches!(outcome.resolution, Resolution::Started { .. })
        {
            assert_eq!(action, "start_round");
            started = true;
        }
    }
    assert!(started);
}

#[tokio::test]
async fn civilians_voted_out_hand_impostors_the_win() {
    let session = session(WordPair::new("Kaffee", "Röstung", "Getränke")).await;
    let handle = session.handle();

    handle
        .set_player_names(names(&["A", "B", "C", "D"]))
        .await
        .unwrap();
    handle.select_game(GameVariant::Impostor).await.unwrap();
    handle.start_round(1).await.unwrap();
    for _ in 0..4 {
        handle.confirm_reveal().await.unwrap();
    }

    let state = handle.query_state().await.unwrap().unwrap();
    let civilians: Vec<_> = state
        .players
        .iter()
        .filter(|p| p.role == Role::Civilian)
        .map(|p| p.id)
        .collect();

    handle.start_vote().await.unwrap();
    handle.cast_vote(civilians[0]).await.unwrap();
    let outcome = handle.resolve_vote().await.unwrap();
    assert_eq!(outcome.to, Phase::Discussion);

    let state = handle.query_state().await.unwrap().unwrap();
    assert_eq!(state.round, 2);
    assert_eq!(state.last_voted, None);

    handle.start_vote().await.unwrap();
    let err = handle.cast_vote(civilians[0]).await.unwrap_err();
    let rejection = err.as_rejection().expect("engine rejection");
    assert_eq!(rejection.error(), &RoundError::AlreadyEliminated(civilians[0]));
    assert_eq!(
        handle.query_state().await.unwrap().unwrap().status,
        Phase::Voting
    );

    handle.cast_vote(civilians[1]).await.unwrap();
    let outcome = handle.resolve_vote().await.unwrap();
    assert_eq!(outcome.to, Phase::GameOver);

    let state = handle.query_state().await.unwrap().unwrap();
    assert_eq!(state.winner, Some(Role::Impostor));
}

#[tokio::test]
async fn caught_spy_guesses_the_word() {
    let session = session(WordPair::new("Vulkan", "Asche", "Natur")).await;
    let handle = session.handle();

    handle
        .set_player_names(names(&["Ida", "Jan", "Kim"]))
        .await
        .unwrap();
    handle.select_game(GameVariant::WordSpy).await.unwrap();
    handle.start_round(1).await.unwrap();

    for _ in 0..2 {
        handle.confirm_reveal().await.unwrap();
    }
    assert_eq!(handle.confirm_reveal().await.unwrap().to, Phase::InputPhase);

    assert!(matches!(
        handle.submit_answer("   ").await,
        Err(RuntimeError::Rejected(_))
    ));
    for answer in ["heiß", "Berg", "Lava"] {
        handle.submit_answer(answer).await.unwrap();
    }
    let state = handle.query_state().await.unwrap().unwrap();
    assert_eq!(state.status, Phase::Showdown);
    assert_eq!(state.showdown_entries().len(), 3);

    handle.continue_to_discussion().await.unwrap();
    handle.start_vote().await.unwrap();

    let spy = first_with(&state, |role| role == Role::Spy);
    handle.cast_vote(spy).await.unwrap();
    let outcome = handle.resolve_vote().await.unwrap();
    assert_eq!(outcome.resolution, Resolution::GuessGranted { player: spy });
    assert_eq!(outcome.to, Phase::SpyGuessing);

    let outcome = handle.submit_guess("  vulkan ").await.unwrap();
    assert_eq!(
        outcome.resolution,
        Resolution::SpyGuessed {
            correct: true,
            winner: Role::Spy,
        }
    );
}

#[tokio::test]
async fn start_requires_selected_game_and_setup_phase() {
    let session = session(WordPair::new("Mond", "Gezeiten", "Natur")).await;
    let handle = session.handle();

    assert!(matches!(
        handle.start_round(1).await,
        Err(RuntimeError::NoGameSelected)
    ));

    handle.select_game(GameVariant::FragenMix).await.unwrap();
    handle.start_round(1).await.unwrap();

    let err = handle.start_round(1).await.unwrap_err();
    let rejection = err.as_rejection().expect("engine rejection");
    assert!(rejection.is_rejection());

    handle.reset().await.unwrap();
    let state = handle.query_state().await.unwrap().unwrap();
    assert_eq!(state.status, Phase::Setup);
    assert!(state.players.is_empty());
}

#[tokio::test]
async fn default_names_and_clamped_impostors() {
    let session = session(WordPair::new("Mond", "Gezeiten", "Natur")).await;
    let handle = session.handle();

    let snapshot = handle.query_session().await.unwrap();
    assert_eq!(snapshot.variant, None);
    assert_eq!(snapshot.player_names.len(), 4);

    handle.select_game(GameVariant::Impostor).await.unwrap();
    handle.start_round(10).await.unwrap();

    let state = handle.query_state().await.unwrap().unwrap();
    assert_eq!(state.impostor_count, 3);
    assert_eq!(state.players[0].name, "Spieler 1");
}

#[tokio::test]
async fn leaving_returns_to_hub() {
    let session = session(WordPair::new("Mond", "Gezeiten", "Natur")).await;
    let handle = session.handle();
    let mut events = handle.subscribe(Topic::Round);

    handle.select_game(GameVariant::WordSpy).await.unwrap();
    handle.leave_game().await.unwrap();

    assert!(handle.query_state().await.unwrap().is_none());
    assert!(matches!(
        handle.confirm_reveal().await,
        Err(RuntimeError::NoGameSelected)
    ));

    let first = events.recv().await.unwrap();
    assert!(matches!(
        first,
        SessionEvent::Round(RoundEvent::GameSelected {
            variant: Some(GameVariant::WordSpy)
        })
    ));
    let second = events.recv().await.unwrap();
    assert!(matches!(
        second,
        SessionEvent::Round(RoundEvent::GameSelected { variant: None })
    ));
}

#[derive(Debug, Clone, PartialEq)]
enum Cue {
    Effect(EffectKind),
    Track(TrackKind),
}

#[derive(Clone, Default)]
struct RecordingSound {
    cues: Arc<Mutex<Vec<Cue>>>,
}

impl SoundService for RecordingSound {
    fn play_effect(&self, effect: EffectKind) {
        self.cues.lock().unwrap().push(Cue::Effect(effect));
    }

    fn switch_ambient_track(&self, track: TrackKind) {
        self.cues.lock().unwrap().push(Cue::Track(track));
    }

    fn set_music_muted(&self, _muted: bool) {}

    fn set_sfx_muted(&self, _muted: bool) {}
}

#[tokio::test]
async fn sound_follows_the_round() {
    let sound = RecordingSound::default();
    let session = Session::builder()
        .config(SessionConfig::default().with_seed(3))
        .generator(FixedGenerator::new(WordPair::new("Brot", "Hefe", "Essen")))
        .sound(sound.clone())
        .build()
        .await
        .unwrap();
    let handle = session.handle();

    handle
        .set_player_names(names(&["A", "B", "C"]))
        .await
        .unwrap();
    handle.select_game(GameVariant::Impostor).await.unwrap();
    handle.start_round(1).await.unwrap();
    for _ in 0..3 {
        handle.confirm_reveal().await.unwrap();
    }
    handle.start_vote().await.unwrap();

    let state = handle.query_state().await.unwrap().unwrap();
    let impostor = first_with(&state, |role| role == Role::Impostor);
    handle.cast_vote(impostor).await.unwrap();
    handle.resolve_vote().await.unwrap();

    let cues = sound.cues.lock().unwrap().clone();
    assert_eq!(cues[0], Cue::Track(TrackKind::Hub));
    assert_eq!(cues[1], Cue::Track(TrackKind::Setup));
    assert!(cues.contains(&Cue::Track(TrackKind::Revealing)));
    assert!(cues.contains(&Cue::Track(TrackKind::Tension)));
    assert!(cues.contains(&Cue::Effect(EffectKind::Vote)));
    assert_eq!(cues.last(), Some(&Cue::Track(TrackKind::Victory)));
}
