use crate::ErrorLocation;

use std::panic::Location;

/// **VALUE**: Verifies that `ErrorLocation::from()` captures file, line and column.
///
/// **WHY THIS MATTERS**: Every error in the workspace renders its location. If the
/// capture is wrong, a failed search or a failed favorites write points nowhere.
///
/// **BUG THIS CATCHES**: Would catch if `Location::caller()` stops being propagated
/// or the field mapping in `ErrorLocation::from()` is broken.
#[test]
fn given_location_caller_when_error_location_created_then_captures_file_line_column() {
    // GIVEN / WHEN: Capturing the current location
    let expected_line = line!() + 1;
    let location = ErrorLocation::from(Location::caller());

    // THEN: File, line and column are populated
    assert!(
        location.file.contains("error_location.rs"),
        "Should capture file path"
    );
    assert_eq!(location.line, expected_line, "Should capture correct line number");
    assert!(location.column > 0, "Should capture column number");
}

/// **VALUE**: Verifies the Display format is `[file:line:column]`.
///
/// **WHY THIS MATTERS**: Error messages in the log file are grepped by that format.
///
/// **BUG THIS CATCHES**: Would catch if the brackets or separators change.
#[test]
fn given_error_location_when_formatted_then_produces_bracketed_format() {
    // GIVEN: An ErrorLocation
    let location = ErrorLocation::from(Location::caller());

    // WHEN: Formatting as string
    let formatted = format!("{}", location);

    // THEN: "[file:line:column]"
    assert!(formatted.starts_with('['), "Should start with '['");
    assert!(formatted.ends_with(']'), "Should end with ']'");
    assert!(formatted.contains(&location.line.to_string()));
    assert!(formatted.contains(&location.column.to_string()));
    assert_eq!(
        formatted.matches(':').count(),
        2,
        "Should have exactly 2 colons"
    );
}

/// **VALUE**: Verifies `#[track_caller]` helpers report the call site, not themselves.
///
/// **WHY THIS MATTERS**: Error constructors across the workspace are `#[track_caller]`
/// helpers; without propagation every error would point at the constructor.
///
/// **BUG THIS CATCHES**: Would catch a regression in location propagation.
#[test]
fn given_multiple_call_sites_when_capturing_location_then_each_has_unique_line() {
    // GIVEN: A helper that captures its caller
    #[track_caller]
    fn capture_location() -> ErrorLocation {
        ErrorLocation::from(Location::caller())
    }

    // WHEN: Capturing from two consecutive lines
    let loc1 = capture_location();
    let loc2 = capture_location();

    // THEN: Same file, sequential lines
    assert_eq!(loc1.file, loc2.file, "Should have same file");
    assert_eq!(loc1.line + 1, loc2.line, "Lines should be sequential");
}
