use crate::{Photo, PhotoBuilder};

fn photo_json(id: &str, small: &str) -> String {
    format!(
        r#"{{
            "id": "{id}",
            "width": 4000,
            "urls": {{ "raw": "r", "full": "f", "regular": "reg", "small": "{small}", "thumb": "th" }},
            "alt_description": null,
            "user": {{ "name": "Jane Doe", "username": "jdoe" }},
            "links": {{ "self": "s", "html": "https://unsplash.com/photos/{id}" }}
        }}"#
    )
}

/// **VALUE**: Verifies an API record with extra fields decodes into a Photo.
///
/// **WHY THIS MATTERS**: The API returns many more fields than the gallery uses; an
/// unknown field must never fail a search.
///
/// **BUG THIS CATCHES**: Would catch `deny_unknown_fields` being added to the model.
#[test]
fn given_api_record_with_extra_fields_when_decoded_then_succeeds() {
    // GIVEN: An API-shaped record
    let json = photo_json("abc", "small-url");

    // WHEN: Decoding
    let photo: Photo = serde_json::from_str(&json).expect("record should decode");

    // THEN: Known fields populated, null description mapped to None
    assert_eq!(photo.id, "abc");
    assert_eq!(photo.urls.small, "small-url");
    assert_eq!(photo.alt_description, None);
    assert_eq!(photo.user.username.as_deref(), Some("jdoe"));
    assert!(photo.validate().is_ok());
}

/// **VALUE**: Verifies records missing required fields fail to decode.
///
/// **WHY THIS MATTERS**: The search client relies on serde to enforce presence of
/// the fields the view renders.
///
/// **BUG THIS CATCHES**: Would catch `#[serde(default)]` creeping onto required fields.
#[test]
fn given_record_without_user_when_decoded_then_fails() {
    // GIVEN: A record with no user
    let json = r#"{ "id": "x", "urls": { "small": "a", "thumb": "b", "regular": "c" }, "links": { "html": "h" } }"#;

    // WHEN / THEN
    assert!(serde_json::from_str::<Photo>(json).is_err());
}

#[test]
fn given_empty_image_url_when_validated_then_fails() {
    let photo: Photo = serde_json::from_str(&photo_json("abc", "")).unwrap();

    let err = photo.validate().unwrap_err();

    assert!(err.to_string().contains("empty small image URL"));
}

/// **VALUE**: Verifies the alt text fallback chain.
///
/// **WHY THIS MATTERS**: Cards show this text in place of the image in a terminal.
///
/// **BUG THIS CATCHES**: Would catch blank descriptions rendering as empty cards.
#[test]
fn given_descriptions_when_alt_text_requested_then_prefers_first_non_blank() {
    // GIVEN: Photos with different description combinations
    let base = PhotoBuilder::default()
        .with_id("a")
        .with_image_base("https://images.unsplash.com/a")
        .with_photographer("Jane")
        .with_source_url("https://unsplash.com/photos/a");
    let with_alt = base.clone().with_alt_description("a lake").build().unwrap();
    let blank_alt = base
        .clone()
        .with_alt_description("  ")
        .with_description("mountain view")
        .build()
        .unwrap();
    let none = base.build().unwrap();

    // WHEN / THEN
    assert_eq!(with_alt.alt_text("fallback"), "a lake");
    assert_eq!(blank_alt.alt_text("fallback"), "mountain view");
    assert_eq!(none.alt_text("fallback"), "fallback");
}

/// **VALUE**: Verifies a persisted photo decodes back to an identical value.
///
/// **WHY THIS MATTERS**: Favorites are written with the same serde impls and must
/// reload unchanged after a restart.
///
/// **BUG THIS CATCHES**: Would catch a renamed field on only one side of the codec.
#[test]
fn given_photo_when_serialized_and_decoded_then_equal() {
    // GIVEN: A photo
    let photo = PhotoBuilder::default()
        .with_id("a")
        .with_image_base("https://images.unsplash.com/a")
        .with_photographer("Jane")
        .with_source_url("https://unsplash.com/photos/a")
        .with_description("desc")
        .with_username("jane")
        .build()
        .unwrap();

    // WHEN: Round-tripping through JSON
    let json = serde_json::to_string(&photo).unwrap();
    let decoded: Photo = serde_json::from_str(&json).unwrap();

    // THEN: Identical
    assert_eq!(decoded, photo);
}
