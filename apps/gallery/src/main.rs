use gallery::error::GalleryError;
use gallery::logger::initialize as LoggerInitialize;
use gallery::paths::resolve_log_dir;

use gallery_core::credentials::load_access_key;
use gallery_core::error::CoreError;
use gallery_core::{AppConfig, FavoritesStore, FileStore, MemoryStore, SessionController, UnsplashClient};

use log::{info, warn};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), GalleryError> {
    // Initialize logger FIRST
    let log_dir = resolve_log_dir()?;
    LoggerInitialize(&log_dir)?;

    info!("Gallery starting");
    info!("Log directory: {}", log_dir.display());

    let config = match AppConfig::default_dir() {
        Ok(config_dir) => AppConfig::load_or_default(&config_dir),
        Err(e) => {
            warn!("No config directory, using defaults: {e}");
            AppConfig::default()
        }
    };

    let access_key = match load_access_key() {
        Ok(key) => Some(key),
        Err(e) => {
            warn!("Searches will fail until a valid access key is set: {e}");
            None
        }
    };

    let client =
        UnsplashClient::from_config(&config.api, access_key).map_err(CoreError::from)?;

    let favorites = match config.data_dir() {
        Some(dir) => {
            info!("Favorites directory: {}", dir.display());
            FavoritesStore::load(FileStore::new(dir))
        }
        None => {
            warn!("No data directory available, favorites will not survive this session");
            FavoritesStore::load(MemoryStore::new())
        }
    };

    let session = SessionController::new(favorites, config.ui.initial_query.clone());

    gallery::tui::run(session, client).await?;

    info!("Gallery exiting");
    Ok(())
}
