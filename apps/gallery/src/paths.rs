//! Where the application keeps its log file.

use crate::error::GalleryError;

use gallery_core::APP_DIR_NAME;

use common::ErrorLocation;

use std::fs::create_dir_all;
use std::panic::Location;
use std::path::{Path, PathBuf};

const LOG_DIR_NAME: &str = "logs";

/// `{data_local_dir}/galerie-inspiration/logs`, created if missing.
///
/// # Errors
///
/// Returns [`GalleryError::Gallery`] if the platform has no local data
/// directory or the directory cannot be created.
pub fn resolve_log_dir() -> Result<PathBuf, GalleryError> {
    let base = dirs::data_local_dir().ok_or_else(|| GalleryError::Gallery {
        message: String::from("Failed to get local data directory"),
        location: ErrorLocation::from(Location::caller()),
    })?;

    log_dir_under(&base)
}

#[track_caller]
pub fn log_dir_under(base: &Path) -> Result<PathBuf, GalleryError> {
    let log_dir = base.join(APP_DIR_NAME).join(LOG_DIR_NAME);

    create_dir_all(&log_dir).map_err(|e| GalleryError::Gallery {
        message: format!("Failed to create log directory {}: {e}", log_dir.display()),
        location: ErrorLocation::from(Location::caller()),
    })?;

    Ok(log_dir)
}
