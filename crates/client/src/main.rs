//! FamilyTime terminal client.
//!
//! Composition root: loads configuration and content, opens the preference
//! store, builds the session and hands it to the pass-and-play loop.
mod app;
mod dirs;
mod presentation;
mod sound;

use anyhow::{Context, Result};
use party_content::ContentFactory;
use party_runtime::{FilePreferenceStore, OfflineGenerator, Session, SessionConfig};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use app::App;
use sound::LoggedSound;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    setup_logging()?;

    let data_dir = dirs::data_dir();
    let content = ContentFactory::new(&data_dir);
    let game_config = content
        .load_config_or_default()
        .context("failed to load game config")?;
    let pool = content
        .load_word_pool_or_builtin()
        .context("failed to load word pool")?;

    let config = SessionConfig::default()
        .with_game_config(game_config)
        .with_env_overrides();
    let store = FilePreferenceStore::new(data_dir.join("preferences"))
        .context("failed to open preference store")?;

    tracing::info!(
        data_dir = %data_dir.display(),
        pairs = pool.len(),
        discussion_seconds = config.game_config.discussion_seconds,
        "starting FamilyTime"
    );

    let session = Session::builder()
        .config(config)
        .store(store)
        .generator(OfflineGenerator)
        .word_pool(pool)
        .sound(LoggedSound::new())
        .build()
        .await?;

    App::new(session.handle()).run().await?;
    session.shutdown().await?;
    Ok(())
}

/// Logs go to a file so they never interleave with the game screen.
fn setup_logging() -> Result<()> {
    let log_dir = dirs::log_dir();
    std::fs::create_dir_all(&log_dir)
        .with_context(|| format!("failed to create log directory {}", log_dir.display()))?;

    let file_appender = tracing_appender::rolling::never(&log_dir, "familytime.log");
    let (non_blocking_file, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing::Level::INFO.into());

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking_file)
        .with_ansi(false);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .init();

    // Keep the writer alive for the whole process.
    std::mem::forget(guard);

    tracing::info!("Log file: {}/familytime.log", log_dir.display());
    Ok(())
}
