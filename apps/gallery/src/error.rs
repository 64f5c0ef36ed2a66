use common::ErrorLocation;
use gallery_core::error::CoreError;

use std::io::Error as IoError;
use std::panic::Location;

use thiserror::Error;

/// Errors surfaced by the terminal application.
///
/// Only startup and terminal failures end up here; search and storage
/// problems are absorbed by the session and logged.
#[derive(Debug, Error)]
pub enum GalleryError {
    /// Error from this App
    #[error("Gallery Error: {message} {location}")]
    Gallery {
        message: String,
        location: ErrorLocation,
    },

    /// Raw mode, alternate screen, drawing or event stream failure
    #[error("Terminal Error: {message} {location}")]
    Terminal {
        message: String,
        location: ErrorLocation,
    },

    /// Error from gallery-core (config, credentials, client setup)
    #[error("Core Error: {message} {location}")]
    Core {
        message: String,
        location: ErrorLocation,
    },
}

impl GalleryError {
    #[track_caller]
    pub fn gallery(message: impl Into<String>) -> Self {
        GalleryError::Gallery {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<CoreError> for GalleryError {
    #[track_caller]
    fn from(error: CoreError) -> Self {
        GalleryError::Core {
            message: error.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<IoError> for GalleryError {
    #[track_caller]
    fn from(error: IoError) -> Self {
        GalleryError::Terminal {
            message: error.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}
