//! The photo API access key, kept out of logs and debug output.

use crate::{ErrorLocation, RedactError};

use std::fmt;
use std::panic::Location;

use serde::ser::Error;
use zeroize::Zeroize;

/// An access key that never exposes its value through `Debug`, `Display`
/// or serde.
#[derive(Clone, PartialEq, Eq)]
pub struct RedactedApiKey {
    inner: String,
}

impl RedactedApiKey {
    /// Wrap a key, dropping surrounding whitespace picked up from `.env` files.
    pub fn new(key: impl Into<String>) -> Self {
        let mut raw: String = key.into();
        let trimmed = raw.trim().to_string();
        raw.zeroize();
        Self { inner: trimmed }
    }

    /// The key value, for building the outgoing request only.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.inner
    }

    /// Key length (safe to log).
    #[inline]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

impl fmt::Debug for RedactedApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RedactedApiKey([REDACTED])")
    }
}

impl fmt::Display for RedactedApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[REDACTED API KEY]")
    }
}

impl Drop for RedactedApiKey {
    fn drop(&mut self) {
        self.inner.zeroize();
    }
}

impl serde::Serialize for RedactedApiKey {
    #[track_caller]
    fn serialize<S>(&self, _serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        Err(S::Error::custom(RedactError::Serialization {
            message: String::from("RedactedApiKey cannot be serialized - use as_str() explicitly"),
            location: ErrorLocation::from(Location::caller()),
        }))
    }
}
