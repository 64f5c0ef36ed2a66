use crate::credentials::read_access_key;
use crate::credentials::validation::{KeyValidator, ValidationResult, detect_placeholder};
use crate::error::{CredentialError, KeyValidationFailure};

const REALISTIC_KEY: &str = "Zx9_kQ2mP4vL8nR1tY6wB3cF5hJ7dG0sA-eU2iO4pMq";

/// **VALUE**: Verifies a realistic access key passes validation.
///
/// **WHY THIS MATTERS**: A false rejection locks the user out of every search.
///
/// **BUG THIS CATCHES**: Would catch over-strict length or charset rules.
#[test]
fn given_realistic_key_when_validated_then_valid() {
    // GIVEN / WHEN
    let result = KeyValidator::default().validate(REALISTIC_KEY);

    // THEN
    assert!(matches!(result, ValidationResult::Valid));
}

/// **VALUE**: Verifies unedited template values are caught.
///
/// **WHY THIS MATTERS**: Copying `.env.example` without editing it is the most
/// common setup mistake; it should be reported before the first 401.
///
/// **BUG THIS CATCHES**: Would catch the placeholder table being bypassed.
#[test]
fn given_placeholder_key_when_validated_then_placeholder_detected() {
    // GIVEN: Template values
    let samples = [
        "your_access_key_goes_here_now",
        "<your-unsplash-access-key>",
        "CHANGEME-CHANGEME-CHANGEME",
        "aaaaaaaaaaaaaaaaaaaaaa",
    ];

    // WHEN / THEN
    for sample in samples {
        match KeyValidator::default().validate(sample) {
            ValidationResult::Invalid(KeyValidationFailure::PlaceholderDetected { .. }) => {}
            other => panic!("{sample} should be a placeholder, got {other:?}"),
        }
    }
    assert_eq!(detect_placeholder(REALISTIC_KEY), None);
}

#[test]
fn given_malformed_keys_when_validated_then_specific_failure() {
    let validator = KeyValidator::default();

    assert!(matches!(
        validator.validate("   "),
        ValidationResult::Invalid(KeyValidationFailure::Empty)
    ));
    assert!(matches!(
        validator.validate("abc123"),
        ValidationResult::Invalid(KeyValidationFailure::TooShort { min: 16, actual: 6 })
    ));
    assert!(matches!(
        validator.validate("abc123def456ghi789 jkl"),
        ValidationResult::Invalid(KeyValidationFailure::InvalidCharacters)
    ));
}

#[test]
fn given_too_long_key_when_validated_then_too_long() {
    let key: String = (0..200).map(|i| if i % 2 == 0 { 'a' } else { 'b' }).collect();

    assert!(matches!(
        KeyValidator::default().validate(&key),
        ValidationResult::Invalid(KeyValidationFailure::TooLong { max: 128, actual: 200 })
    ));
}

/// **VALUE**: Verifies an unset variable is reported as Missing.
///
/// **WHY THIS MATTERS**: The app starts without a key and explains why searches fail.
///
/// **BUG THIS CATCHES**: Would catch a panic on `env::var` errors.
#[test]
fn given_unset_variable_when_reading_key_then_missing_error() {
    // GIVEN: A variable nobody sets
    let variable = "GALLERY_TEST_ACCESS_KEY_UNSET";

    // WHEN
    let result = read_access_key(variable);

    // THEN
    match result {
        Err(CredentialError::Missing { variable: name, .. }) => assert_eq!(name, variable),
        other => panic!("expected Missing, got {other:?}"),
    }
}

#[test]
fn given_valid_variable_when_reading_key_then_wrapped() {
    let variable = "GALLERY_TEST_ACCESS_KEY_VALID";
    // SAFETY: the variable name is unique to this test.
    unsafe { std::env::set_var(variable, format!("  {REALISTIC_KEY}\n")) };

    let key = read_access_key(variable).expect("key should be accepted");

    assert_eq!(key.as_str(), REALISTIC_KEY);
}

#[test]
fn given_placeholder_variable_when_reading_key_then_validation_error() {
    let variable = "GALLERY_TEST_ACCESS_KEY_PLACEHOLDER";
    // SAFETY: the variable name is unique to this test.
    unsafe { std::env::set_var(variable, "your_access_key_here_please") };

    let result = read_access_key(variable);

    assert!(matches!(result, Err(CredentialError::Validation { .. })));
}
