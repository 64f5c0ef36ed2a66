use common::ErrorLocation;

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Storage Read Error: {path}: {source} {location}")]
    ReadError {
        location: ErrorLocation,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Storage Write Error: {path}: {source} {location}")]
    WriteError {
        location: ErrorLocation,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Storage Key Error: invalid key '{key}' {location}")]
    InvalidKey {
        location: ErrorLocation,
        key: String,
    },

    #[error("Storage Serialization Error: {reason} {location}")]
    SerializeError {
        location: ErrorLocation,
        reason: String,
    },

    #[error("Storage Unavailable Error: {reason} {location}")]
    Unavailable {
        location: ErrorLocation,
        reason: String,
    },
}
