//! File logging for the gallery terminal application.
//!
//! The terminal belongs to the UI, so records go to `gallery.log` only.

use crate::error::GalleryError;

use common::ErrorLocation;

use std::panic::Location;
use std::path::Path;
use std::sync::Once;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::SystemTime;

use fern::Dispatch;
use humantime::format_rfc3339;
use log::{LevelFilter, info, warn};

/// Thread-safe initialization guard.
static INIT_LOGGER_ONCE: Once = Once::new();

/// Tracks if logger initialization was already attempted.
static LOGGER_ALREADY_CALLED: AtomicBool = AtomicBool::new(false);

pub const LOG_FILE_NAME: &str = "gallery.log";

const LOGGER_INITIALIZED_MESSAGE_PREFIX: &str = "Logger initialized with level: ";

const LOGGER_ALREADY_INITIALIZED_MESSAGE: &str = "Logger already initialized";

#[cfg(debug_assertions)]
const LOG_LEVEL: LevelFilter = LevelFilter::Debug;

#[cfg(not(debug_assertions))]
const LOG_LEVEL: LevelFilter = LevelFilter::Info;

/// Initialize the logger writing to `{log_dir}/gallery.log`.
///
/// Safe to call more than once: later calls log a warning and return Ok.
///
/// # Errors
///
/// Returns [`GalleryError::Gallery`] if the log file cannot be opened or a
/// global logger is already installed.
pub fn initialize(log_dir: &Path) -> Result<(), GalleryError> {
    if LOGGER_ALREADY_CALLED.swap(true, Ordering::SeqCst) {
        warn!("{LOGGER_ALREADY_INITIALIZED_MESSAGE}");
        return Ok(());
    }

    let mut result = Ok(());

    INIT_LOGGER_ONCE.call_once(|| {
        result = file_dispatch(log_dir).and_then(|dispatch| {
            dispatch.apply().map_err(|e| GalleryError::Gallery {
                message: format!("Failed to initialize logger: {e}"),
                location: ErrorLocation::from(Location::caller()),
            })
        });
        if result.is_ok() {
            info!("{LOGGER_INITIALIZED_MESSAGE_PREFIX}{LOG_LEVEL:?}");
        }
    });

    result
}

/// Plain-text dispatch chained to the log file.
#[track_caller]
pub(crate) fn file_dispatch(log_dir: &Path) -> Result<Dispatch, GalleryError> {
    let log_file_path = log_dir.join(LOG_FILE_NAME);

    let log_file = fern::log_file(&log_file_path).map_err(|e| GalleryError::Gallery {
        message: format!("Failed to create log file: {e}"),
        location: ErrorLocation::from(Location::caller()),
    })?;

    Ok(Dispatch::new()
        .level(LOG_LEVEL)
        .format(move |out, message, record| {
            out.finish(format_args!(
                "[{date} - {level}] {message} [{file}:{line}]",
                date = format_rfc3339(SystemTime::now()),
                level = record.level(),
                message = message,
                file = record.file().unwrap_or("unknown"),
                line = record.line().unwrap_or(0)
            ))
        })
        .chain(log_file))
}
