use std::collections::HashSet;
use std::sync::Arc;

use party_content::WordPool;
use party_core::{GameVariant, Phase, WordPair};
use party_runtime::{
    FixedGenerator, InMemoryPreferenceStore, Notice, OfflineGenerator, PreferenceStore,
    RuntimeError, Session, SessionConfig, SessionEvent, Topic,
};

#[tokio::test]
async fn offline_rounds_cycle_through_the_pool() {
    let store = Arc::new(InMemoryPreferenceStore::new());
    let session = Session::builder()
        .config(SessionConfig::default().with_seed(5))
        .shared_store(store.clone())
        .generator(OfflineGenerator)
        .build()
        .await
        .unwrap();
    let handle = session.handle();
    let mut notices = handle.subscribe(Topic::Notice);

    handle.select_game(GameVariant::Impostor).await.unwrap();

    let mut secrets = Vec::new();
    for _ in 0..11 {
        handle.start_round(1).await.unwrap();
        let state = handle.query_state().await.unwrap().unwrap();
        assert_eq!(state.status, Phase::Revealing);
        secrets.push(state.word_pair.unwrap().secret_word);
        handle.reset().await.unwrap();
    }

    let first_ten: HashSet<_> = secrets[..10].iter().collect();
    assert_eq!(first_ten.len(), 10, "pool exhausted before repeating");
    assert!(WordPool::builtin()
        .pairs()
        .iter()
        .any(|pair| pair.secret_word == secrets[10]));

    let mut fallbacks = 0;
    while let Ok(event) = notices.try_recv() {
        if let SessionEvent::Notice(Notice::GenerationFallback { .. }) = event {
            fallbacks += 1;
        }
    }
    assert_eq!(fallbacks, 11);

    let history = store.load_word_history().unwrap();
    assert_eq!(history.len(), 11);
    assert_eq!(history[0], secrets[10]);
    assert_eq!(history[10], secrets[0]);

    let snapshot = handle.query_session().await.unwrap();
    assert_eq!(snapshot.history, history);
}

#[tokio::test]
async fn empty_pool_aborts_the_start() {
    let session = Session::builder()
        .generator(OfflineGenerator)
        .word_pool(WordPool::new(Vec::new()))
        .build()
        .await
        .unwrap();
    let handle = session.handle();
    let mut notices = handle.subscribe(Topic::Notice);

    handle.select_game(GameVariant::WordSpy).await.unwrap();
    let err = handle.start_round(1).await.unwrap_err();
    assert!(matches!(err, RuntimeError::StartAborted(_)));

    let state = handle.query_state().await.unwrap().unwrap();
    assert_eq!(state.status, Phase::Setup);
    assert!(matches!(
        notices.recv().await.unwrap(),
        SessionEvent::Notice(Notice::StartAborted { .. })
    ));
}

#[tokio::test]
async fn persisted_history_seeds_the_exclusions() {
    let store = Arc::new(InMemoryPreferenceStore::new());
    let pool = WordPool::builtin();
    let all_but_last: Vec<String> = pool.pairs()[..pool.len() - 1]
        .iter()
        .map(|pair| pair.secret_word.clone())
        .collect();
    store.save_word_history(&all_but_last).unwrap();

    let session = Session::builder()
        .shared_store(store.clone())
        .build()
        .await
        .unwrap();
    let handle = session.handle();

    handle.select_game(GameVariant::Impostor).await.unwrap();
    handle.start_round(1).await.unwrap();

    let state = handle.query_state().await.unwrap().unwrap();
    let expected = &pool.pairs()[pool.len() - 1].secret_word;
    assert_eq!(&state.word_pair.unwrap().secret_word, expected);
}

#[tokio::test]
async fn blank_generated_word_starts_with_a_pool_word() {
    let session = Session::builder()
        .generator(FixedGenerator::new(WordPair::new("   ", "Hinweis", "Alltag")))
        .build()
        .await
        .unwrap();
    let handle = session.handle();
    let mut notices = handle.subscribe(Topic::Notice);

    handle.select_game(GameVariant::Impostor).await.unwrap();
    handle.start_round(1).await.unwrap();

    let state = handle.query_state().await.unwrap().unwrap();
    assert_eq!(state.status, Phase::Revealing);
    let secret = state.word_pair.unwrap().secret_word;
    assert!(WordPool::builtin()
        .pairs()
        .iter()
        .any(|pair| pair.secret_word == secret));
    assert!(matches!(
        notices.recv().await.unwrap(),
        SessionEvent::Notice(Notice::GenerationFallback { .. })
    ));
}
