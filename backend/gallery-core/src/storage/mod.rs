//! Durable key/value storage backing the favorites.
//!
//! One value per key, stored as a string. The favorites use a single fixed
//! key; the trait keeps the store swappable for tests.

mod file_store;
mod memory_store;

pub use file_store::FileStore;
pub use memory_store::MemoryStore;

use crate::error::StorageError;

use common::ErrorLocation;

use std::panic::Location;

pub trait KeyValueStore {
    /// Read the value stored under `key`; `Ok(None)` when nothing was written yet.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Replace the value stored under `key`.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Human readable location for log lines.
    fn describe(&self) -> String;
}

/// Keys become file names, so only a conservative character set is allowed.
#[track_caller]
pub(crate) fn validate_key(key: &str) -> Result<(), StorageError> {
    let valid = !key.is_empty()
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_'));

    if valid {
        Ok(())
    } else {
        Err(StorageError::InvalidKey {
            location: ErrorLocation::from(Location::caller()),
            key: key.to_string(),
        })
    }
}
