//! Errors for loading the photo API access key.

use common::ErrorLocation;

use std::panic::Location;

use thiserror::Error as ThisError;

#[derive(Debug, ThisError)]
pub enum CredentialError {
    #[error("Credential Missing Error: {variable} is not set {location}")]
    Missing {
        variable: &'static str,
        location: ErrorLocation,
    },

    #[error("Credential Environment Error: {message} {location}")]
    EnvLoad {
        message: String,
        location: ErrorLocation,
    },

    #[error("Credential Validation Error: {reason} {location}")]
    Validation {
        reason: KeyValidationFailure,
        location: ErrorLocation,
    },
}

/// Why a configured access key was rejected before any request was sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyValidationFailure {
    Empty,
    TooShort { min: usize, actual: usize },
    TooLong { max: usize, actual: usize },
    PlaceholderDetected { pattern: &'static str },
    InvalidCharacters,
}

impl std::fmt::Display for KeyValidationFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(f, "key is empty"),
            Self::TooShort { min, actual } => {
                write!(f, "key too short ({} chars, minimum {})", actual, min)
            }
            Self::TooLong { max, actual } => {
                write!(f, "key too long ({} chars, maximum {})", actual, max)
            }
            Self::PlaceholderDetected { pattern } => {
                write!(f, "detected placeholder pattern '{}'", pattern)
            }
            Self::InvalidCharacters => write!(f, "contains invalid characters"),
        }
    }
}

impl CredentialError {
    #[track_caller]
    pub fn missing(variable: &'static str) -> Self {
        CredentialError::Missing {
            variable,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn env_load(message: impl Into<String>) -> Self {
        CredentialError::EnvLoad {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn validation(reason: KeyValidationFailure) -> Self {
        CredentialError::Validation {
            reason,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}
