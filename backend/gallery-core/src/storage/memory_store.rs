use super::{KeyValueStore, validate_key};
use crate::error::StorageError;

use common::ErrorLocation;

use std::collections::HashMap;
use std::panic::Location;

/// Session-only storage. Used when no data directory is available and in tests.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    values: HashMap<String, String>,
    read_only: bool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store pre-seeded with one value.
    pub fn with_value(key: impl Into<String>, value: impl Into<String>) -> Self {
        let mut values = HashMap::new();
        values.insert(key.into(), value.into());
        Self {
            values,
            read_only: false,
        }
    }

    /// Reject every write, the way a full disk or a locked file would.
    pub fn read_only(mut self) -> Self {
        self.read_only = true;
        self
    }

    pub fn raw(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        validate_key(key)?;
        Ok(self.values.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        validate_key(key)?;

        if self.read_only {
            return Err(StorageError::Unavailable {
                location: ErrorLocation::from(Location::caller()),
                reason: String::from("memory store is read-only"),
            });
        }

        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn describe(&self) -> String {
        String::from("memory")
    }
}
