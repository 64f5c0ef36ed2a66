use super::{KeyValueStore, validate_key};
use crate::error::StorageError;

use common::ErrorLocation;

use std::io::ErrorKind;
use std::panic::Location;
use std::path::{Path, PathBuf};

use log::debug;

const VALUE_FILE_EXTENSION: &str = "json";

/// Stores each key as `<dir>/<key>.json`.
///
/// Writes go through a temp file and a rename so a crash mid-write leaves
/// the previous value intact.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// The directory is created lazily on the first write.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.{VALUE_FILE_EXTENSION}"))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        validate_key(key)?;
        let path = self.path_for(key);

        match std::fs::read_to_string(&path) {
            Ok(contents) => {
                debug!("Read {} bytes from {}", contents.len(), path.display());
                Ok(Some(contents))
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StorageError::ReadError {
                location: ErrorLocation::from(Location::caller()),
                path,
                source: e,
            }),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        validate_key(key)?;

        std::fs::create_dir_all(&self.dir).map_err(|e| StorageError::WriteError {
            location: ErrorLocation::from(Location::caller()),
            path: self.dir.clone(),
            source: e,
        })?;

        let path = self.path_for(key);
        let temp_path = self.dir.join(format!("{key}.{VALUE_FILE_EXTENSION}.tmp"));

        std::fs::write(&temp_path, value).map_err(|e| StorageError::WriteError {
            location: ErrorLocation::from(Location::caller()),
            path: temp_path.clone(),
            source: e,
        })?;

        std::fs::rename(&temp_path, &path).map_err(|e| StorageError::WriteError {
            location: ErrorLocation::from(Location::caller()),
            path: path.clone(),
            source: e,
        })?;

        debug!("Wrote {} bytes to {}", value.len(), path.display());
        Ok(())
    }

    fn describe(&self) -> String {
        self.dir.display().to_string()
    }
}
