use crate::{ModelError, PhotoBuilder};

fn complete_builder() -> PhotoBuilder {
    PhotoBuilder::default()
        .with_id("Dwu85P9SOIk")
        .with_image_base("https://images.unsplash.com/photo-1")
        .with_alt_description("green leaves")
        .with_photographer("Jane Doe")
        .with_source_url("https://unsplash.com/photos/Dwu85P9SOIk")
}

/// **VALUE**: Verifies a fully specified builder produces the expected photo.
///
/// **WHY THIS MATTERS**: Every fixture in the core crate goes through the builder.
///
/// **BUG THIS CATCHES**: Would catch field mix-ups between the three image sizes.
#[test]
fn given_complete_builder_when_building_then_returns_photo() {
    // GIVEN: A builder with every required field
    let builder = complete_builder();

    // WHEN: Building
    let photo = builder.build().expect("complete builder must succeed");

    // THEN: Fields land where they belong
    assert_eq!(photo.id, "Dwu85P9SOIk");
    assert!(photo.urls.small.ends_with("w=400"));
    assert!(photo.urls.thumb.ends_with("w=200"));
    assert!(photo.urls.regular.ends_with("w=1080"));
    assert_eq!(photo.user.name, "Jane Doe");
    assert_eq!(photo.alt_description.as_deref(), Some("green leaves"));
}

/// **VALUE**: Verifies the builder rejects a missing id.
///
/// **WHY THIS MATTERS**: Favorites are keyed by id; a photo without one could never
/// be removed again.
///
/// **BUG THIS CATCHES**: Would catch a silently defaulted id.
#[test]
fn given_missing_id_when_building_then_returns_validation_error() {
    // GIVEN: Builder without an id
    let builder = PhotoBuilder::default()
        .with_image_base("https://images.unsplash.com/photo-1")
        .with_photographer("Jane Doe")
        .with_source_url("https://unsplash.com/photos/x");

    // WHEN: Building
    let result = builder.build();

    // THEN: Validation error naming the id
    match result.unwrap_err() {
        ModelError::Validation { message, .. } => {
            assert_eq!(message, "Photo id is required");
        }
    }
}

/// **VALUE**: Verifies an empty id is rejected by the shared validation.
///
/// **WHY THIS MATTERS**: The builder and the API boundary must agree on what a
/// valid photo is.
///
/// **BUG THIS CATCHES**: Would catch the builder skipping `Photo::validate`.
#[test]
fn given_blank_id_when_building_then_returns_validation_error() {
    // GIVEN: A whitespace-only id
    let builder = complete_builder().with_id("   ");

    // WHEN: Building
    let result = builder.build();

    // THEN: Rejected
    match result.unwrap_err() {
        ModelError::Validation { message, .. } => {
            assert_eq!(message, "Photo id cannot be empty");
        }
    }
}

#[test]
fn given_non_http_source_url_when_building_then_returns_validation_error() {
    let result = complete_builder().with_source_url("ftp://example.com").build();

    match result.unwrap_err() {
        ModelError::Validation { message, .. } => {
            assert!(message.contains("Invalid source URL format"));
        }
    }
}

#[test]
fn given_validation_error_when_formatted_then_includes_location() {
    let err = PhotoBuilder::default().build().unwrap_err();
    let rendered = err.to_string();

    assert!(rendered.starts_with("Validation Error: Photo id is required"));
    assert!(rendered.contains("builder.rs"), "location should point at the call site");
}
