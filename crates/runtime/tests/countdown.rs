use std::time::Duration;

use tokio::sync::broadcast::Receiver;
use tokio::sync::broadcast::error::TryRecvError;

use party_core::{GameConfig, GameVariant, Phase, RoundError, WordPair};
use party_runtime::{
    FixedGenerator, RoundEvent, Session, SessionConfig, SessionEvent, SessionHandle, TimerEvent,
    Topic,
};

async fn discussion_with_timer(seconds: u32) -> (Session, SessionHandle) {
    let config = SessionConfig::default()
        .with_seed(11)
        .with_game_config(GameConfig::new().with_discussion_seconds(seconds));
    let session = Session::builder()
        .config(config)
        .generator(FixedGenerator::new(WordPair::new("Zelt", "Lagerfeuer", "Freizeit")))
        .build()
        .await
        .unwrap();
    let handle = session.handle();

    handle
        .set_player_names(vec!["A".into(), "B".into(), "C".into()])
        .await
        .unwrap();
    handle.set_use_timer(true).await.unwrap();
    handle.select_game(GameVariant::Impostor).await.unwrap();
    handle.start_round(1).await.unwrap();
    (session, handle)
}

async fn reach_discussion(handle: &SessionHandle) {
    for _ in 0..3 {
        handle.confirm_reveal().await.unwrap();
    }
}

async fn next_timer_event(rx: &mut Receiver<SessionEvent>) -> TimerEvent {
    match rx.recv().await.unwrap() {
        SessionEvent::Timer(event) => event,
        other => panic!("unexpected event {other:?}"),
    }
}

#[tokio::test(start_paused = true)]
async fn countdown_expires_once_into_voting() {
    let (_session, handle) = discussion_with_timer(3).await;
    let mut timer = handle.subscribe(Topic::Timer);

    reach_discussion(&handle).await;

    assert_eq!(
        next_timer_event(&mut timer).await,
        TimerEvent::Started {
            epoch: 1,
            seconds: 3
        }
    );
    assert_eq!(
        next_timer_event(&mut timer).await,
        TimerEvent::Tick {
            epoch: 1,
            remaining: 2
        }
    );
    assert_eq!(
        next_timer_event(&mut timer).await,
        TimerEvent::Tick {
            epoch: 1,
            remaining: 1
        }
    );
    assert_eq!(
        next_timer_event(&mut timer).await,
        TimerEvent::Expired { epoch: 1 }
    );

    let state = handle.query_state().await.unwrap().unwrap();
    assert_eq!(state.status, Phase::Voting);
    assert!(state.discussion_timer.is_none());

    tokio::time::sleep(Duration::from_secs(10)).await;
    assert!(matches!(timer.try_recv(), Err(TryRecvError::Empty)));
    assert_eq!(
        handle.query_state().await.unwrap().unwrap().status,
        Phase::Voting
    );
}

#[tokio::test(start_paused = true)]
async fn manual_vote_cancels_the_countdown() {
    let (_session, handle) = discussion_with_timer(60).await;
    let mut timer = handle.subscribe(Topic::Timer);

    reach_discussion(&handle).await;
    handle.start_vote().await.unwrap();

    let mut cancelled = false;
    while let Ok(event) = timer.try_recv() {
        match event {
            SessionEvent::Timer(TimerEvent::Cancelled { epoch }) => {
                assert_eq!(epoch, 1);
                cancelled = true;
            }
            SessionEvent::Timer(TimerEvent::Expired { .. }) => panic!("expired after manual vote"),
            _ => {}
        }
    }
    assert!(cancelled);

    tokio::time::sleep(Duration::from_secs(120)).await;
    assert!(matches!(timer.try_recv(), Err(TryRecvError::Empty)));
    assert_eq!(
        handle.query_state().await.unwrap().unwrap().status,
        Phase::Voting
    );
}

#[tokio::test(start_paused = true)]
async fn stale_tick_is_dropped_silently() {
    let (_session, handle) = discussion_with_timer(60).await;
    let mut rounds = handle.subscribe(Topic::Round);

    reach_discussion(&handle).await;
    let err = handle
        .dispatch(party_core::RoundAction::timer_tick(99))
        .await
        .unwrap_err();
    let rejection = err.as_rejection().unwrap();
    assert_eq!(
        rejection.error(),
        &RoundError::StaleTimerTick {
            expected: 1,
            received: 99
        }
    );

    while let Ok(event) = rounds.try_recv() {
        assert!(
            !matches!(event, SessionEvent::Round(RoundEvent::Rejected { .. })),
            "stale tick must not be reported"
        );
    }
    assert_eq!(
        handle.query_state().await.unwrap().unwrap().status,
        Phase::Discussion
    );
}

#[tokio::test(start_paused = true)]
async fn second_discussion_rearms_with_new_epoch() {
    let (_session, handle) = discussion_with_timer(60).await;
    let mut timer = handle.subscribe(Topic::Timer);

    reach_discussion(&handle).await;
    handle.start_vote().await.unwrap();

    let state = handle.query_state().await.unwrap().unwrap();
    let civilian = state
        .players
        .iter()
        .find(|p| p.role == party_core::Role::Civilian)
        .map(|p| p.id)
        .unwrap();

    // three players, one civilian out: the impostor wins right away
    handle.cast_vote(civilian).await.unwrap();
    let outcome = handle.resolve_vote().await.unwrap();
    assert_eq!(outcome.to, Phase::GameOver);

    handle.reset().await.unwrap();
    handle.start_round(1).await.unwrap();
    reach_discussion(&handle).await;

    let mut epochs = Vec::new();
    while let Ok(event) = timer.try_recv() {
        if let SessionEvent::Timer(TimerEvent::Started { epoch, .. }) = event {
            epochs.push(epoch);
        }
    }
    assert_eq!(epochs, [1, 2]);
}
