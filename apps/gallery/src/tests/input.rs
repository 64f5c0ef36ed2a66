use crate::tui::input::LineCursor;

/// **VALUE**: Verifies typing lands at the cursor, not always at the end.
///
/// **WHY THIS MATTERS**: Users fix typos mid-query with the arrow keys.
///
/// **BUG THIS CATCHES**: Would catch `push` being used instead of `insert`.
#[test]
fn given_cursor_moved_left_when_typing_then_char_inserted_at_cursor() {
    // GIVEN
    let mut text = String::from("ntre");
    let mut cursor = LineCursor::at_end(&text);
    cursor.left(&text);
    cursor.left(&text);
    cursor.left(&text);

    // WHEN
    cursor.insert(&mut text, 'a');

    // THEN
    assert_eq!(text, "natre");
    assert_eq!(cursor.column(&text), 2);
}

/// **VALUE**: Verifies editing never splits a multi-byte character.
///
/// **WHY THIS MATTERS**: Queries like "café" or "東京" are ordinary input.
///
/// **BUG THIS CATCHES**: Would catch byte-wise cursor moves that panic on
/// `String::remove` at a non-boundary.
#[test]
fn given_multibyte_text_when_backspacing_then_whole_chars_removed() {
    // GIVEN
    let mut text = String::from("café 東京");
    let mut cursor = LineCursor::at_end(&text);

    // WHEN
    assert!(cursor.backspace(&mut text));
    cursor.left(&text);
    cursor.left(&text);
    assert!(cursor.backspace(&mut text));

    // THEN
    assert_eq!(text, "caf 東");
    assert_eq!(cursor.column(&text), 3);
}

#[test]
fn given_cursor_at_start_when_backspace_then_nothing_removed() {
    let mut text = String::from("abc");
    let mut cursor = LineCursor::default();

    assert!(!cursor.backspace(&mut text));
    assert_eq!(text, "abc");
}

#[test]
fn given_cursor_at_end_when_delete_then_nothing_removed() {
    let mut text = String::from("abc");
    let mut cursor = LineCursor::at_end(&text);

    assert!(!cursor.delete(&mut text));

    cursor.home();
    assert!(cursor.delete(&mut text));
    assert_eq!(text, "bc");
}

#[test]
fn given_text_shortened_elsewhere_when_editing_then_cursor_clamped() {
    let mut text = String::from("architecture");
    let mut cursor = LineCursor::at_end(&text);

    text = String::from("ux");
    cursor.insert(&mut text, '!');

    assert_eq!(text, "ux!");
    assert_eq!(cursor.position(), 3);
}

#[test]
fn given_cursor_when_right_past_end_then_stays_at_end() {
    let text = String::from("é");
    let mut cursor = LineCursor::default();

    cursor.right(&text);
    cursor.right(&text);

    assert_eq!(cursor.position(), text.len());
    cursor.home();
    cursor.end(&text);
    assert_eq!(cursor.column(&text), 1);
}
