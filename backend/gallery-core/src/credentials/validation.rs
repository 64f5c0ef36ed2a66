//! Format checks for the access key.
//!
//! Catches unedited `.env` templates before they turn into a 401 on the
//! first search.

use crate::error::{CredentialError, KeyValidationFailure};

use common::RedactedApiKey;

/// Unsplash access keys are 43 characters today; the bounds leave room.
const MIN_KEY_LENGTH: usize = 16;
const MAX_KEY_LENGTH: usize = 128;

#[derive(Debug)]
pub enum ValidationResult {
    Valid,
    Invalid(KeyValidationFailure),
}

pub struct KeyValidator {
    min_length: usize,
    max_length: usize,
}

impl Default for KeyValidator {
    fn default() -> Self {
        Self {
            min_length: MIN_KEY_LENGTH,
            max_length: MAX_KEY_LENGTH,
        }
    }
}

impl KeyValidator {
    pub fn validate(&self, key: &str) -> ValidationResult {
        let trimmed = key.trim();

        if trimmed.is_empty() {
            return ValidationResult::Invalid(KeyValidationFailure::Empty);
        }

        if let Some(pattern) = detect_placeholder(trimmed) {
            return ValidationResult::Invalid(KeyValidationFailure::PlaceholderDetected {
                pattern,
            });
        }

        if trimmed.len() < self.min_length {
            return ValidationResult::Invalid(KeyValidationFailure::TooShort {
                min: self.min_length,
                actual: trimmed.len(),
            });
        }

        if trimmed.len() > self.max_length {
            return ValidationResult::Invalid(KeyValidationFailure::TooLong {
                max: self.max_length,
                actual: trimmed.len(),
            });
        }

        if !is_valid_key_chars(trimmed) {
            return ValidationResult::Invalid(KeyValidationFailure::InvalidCharacters);
        }

        ValidationResult::Valid
    }

    /// Validate and wrap in RedactedApiKey if valid.
    #[track_caller]
    pub fn validate_and_wrap(&self, key: String) -> Result<RedactedApiKey, CredentialError> {
        match self.validate(&key) {
            ValidationResult::Valid => Ok(RedactedApiKey::new(key)),
            ValidationResult::Invalid(reason) => Err(CredentialError::validation(reason)),
        }
    }
}

/// Returns the matched pattern name if the key looks like template text.
pub(crate) fn detect_placeholder(key: &str) -> Option<&'static str> {
    let lower = key.to_lowercase();

    static PATTERNS: &[(&str, &str)] = &[
        ("...", "ellipsis"),
        ("your_access_key", "your_access_key"),
        ("your-access-key", "your-access-key"),
        ("access_key_here", "access_key_here"),
        ("<your", "<your...>"),
        ("xxx", "xxx"),
        ("placeholder", "placeholder"),
        ("changeme", "changeme"),
        ("example", "example"),
        ("replace", "replace"),
    ];

    for (pattern, name) in PATTERNS {
        if lower.contains(pattern) {
            return Some(name);
        }
    }

    let mut chars = key.chars();
    if let Some(first_char) = chars.next() {
        if key.len() >= 10 && chars.all(|c| c == first_char) {
            return Some("repeated_char");
        }
    }

    None
}

/// Access keys are URL-safe base64: alphanumeric, hyphen, underscore.
fn is_valid_key_chars(key: &str) -> bool {
    key.chars()
        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_'))
}
