use std::fs;

use party_core::{GameVariant, Phase};
use party_runtime::repository::keys;
use party_runtime::{
    FilePreferenceStore, InMemoryPreferenceStore, PreferenceStore, Session, Settings,
    SettingsPatch,
};
use tempfile::TempDir;

#[test]
fn file_store_round_trip() {
    let dir = TempDir::new().unwrap();
    let store = FilePreferenceStore::new(dir.path()).unwrap();

    assert_eq!(store.load_player_names().unwrap(), None);
    assert_eq!(store.load_settings().unwrap(), Settings::default());
    assert!(store.load_word_history().unwrap().is_empty());

    let names = vec!["Oma".to_string(), "Opa".to_string(), "Lena".to_string()];
    store.save_player_names(&names).unwrap();
    store
        .save_word_history(&["Zelt".to_string(), "Mond".to_string()])
        .unwrap();

    let reopened = FilePreferenceStore::new(dir.path()).unwrap();
    assert_eq!(reopened.load_player_names().unwrap(), Some(names));
    assert_eq!(reopened.load_word_history().unwrap(), ["Zelt", "Mond"]);
    assert!(dir
        .path()
        .join(format!("{}.json", keys::WORD_HISTORY))
        .exists());
}

#[test]
fn settings_patches_merge_and_use_camel_case() {
    let dir = TempDir::new().unwrap();
    let store = FilePreferenceStore::new(dir.path()).unwrap();

    store
        .update_settings(&SettingsPatch::default().music_muted(true))
        .unwrap();
    let merged = store
        .update_settings(&SettingsPatch::default().selected_category("Tiere"))
        .unwrap();

    assert!(merged.music_muted);
    assert_eq!(merged.selected_category, "Tiere");
    assert!(merged.use_hint_word);

    let raw = fs::read_to_string(dir.path().join(format!("{}.json", keys::SETTINGS))).unwrap();
    assert!(raw.contains("\"musicMuted\":true"));
    assert!(raw.contains("\"selectedCategory\":\"Tiere\""));
}

#[test]
fn partial_settings_blob_fills_defaults() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join(format!("{}.json", keys::SETTINGS)),
        r#"{"useTimer":true}"#,
    )
    .unwrap();

    let store = FilePreferenceStore::new(dir.path()).unwrap();
    let settings = store.load_settings().unwrap();
    assert!(settings.use_timer);
    assert!(settings.use_hint_word);
    assert_eq!(settings.selected_category, "Zufall");
}

#[test]
fn in_memory_store_keeps_records() {
    let store = InMemoryPreferenceStore::new();
    assert!(store.is_empty());

    store.save_player_names(&["X".to_string()]).unwrap();
    store
        .update_settings(&SettingsPatch::default().sfx_muted(true))
        .unwrap();

    assert_eq!(store.len(), 2);
    assert!(store.load_settings().unwrap().sfx_muted);
}

#[tokio::test]
async fn session_restores_and_writes_preferences() {
    let dir = TempDir::new().unwrap();

    {
        let session = Session::builder()
            .store(FilePreferenceStore::new(dir.path()).unwrap())
            .build()
            .await
            .unwrap();
        let handle = session.handle();

        let kept = handle
            .set_player_names(vec![" Mia ".into(), "Noah".into(), "Ole".into()])
            .await
            .unwrap();
        assert_eq!(kept, ["Mia", "Noah", "Ole"]);
        handle.set_use_hint_word(false).await.unwrap();
        drop(handle);
        session.shutdown().await.unwrap();
    }

    let session = Session::builder()
        .store(FilePreferenceStore::new(dir.path()).unwrap())
        .build()
        .await
        .unwrap();
    let handle = session.handle();

    let snapshot = handle.query_session().await.unwrap();
    assert_eq!(snapshot.player_names, ["Mia", "Noah", "Ole"]);
    assert!(!snapshot.settings.use_hint_word);

    let state = handle.select_game(GameVariant::Impostor).await.unwrap();
    assert_eq!(state.status, Phase::Setup);
    assert!(!state.use_hint_word);
}

#[tokio::test]
async fn corrupt_records_fall_back_to_defaults() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join(format!("{}.json", keys::PLAYER_NAMES)),
        "not json",
    )
    .unwrap();

    let session = Session::builder()
        .store(FilePreferenceStore::new(dir.path()).unwrap())
        .build()
        .await
        .unwrap();

    let snapshot = session.handle().query_session().await.unwrap();
    assert_eq!(snapshot.player_names[0], "Spieler 1");
}
