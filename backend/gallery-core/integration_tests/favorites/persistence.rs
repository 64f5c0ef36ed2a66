use gallery_core::{
    FAVORITES_STORAGE_KEY, FavoriteToggle, FavoritesStore, FileStore, KeyValueStore,
    SessionController,
};

use models::{Photo, PhotoBuilder};

use tempfile::TempDir;

fn photo(id: &str) -> Photo {
    PhotoBuilder::default()
        .with_id(id)
        .with_image_base(format!("https://images.unsplash.com/photo-{id}"))
        .with_alt_description(format!("photo {id}"))
        .with_photographer(format!("Photographer {id}"))
        .with_username(format!("user_{id}"))
        .with_source_url(format!("https://unsplash.com/photos/{id}"))
        .build()
        .unwrap()
}

/// **VALUE**: Verifies favorites survive a restart through the file store.
///
/// **WHY THIS MATTERS**: Persistence across sessions is the point of favorites.
///
/// **BUG THIS CATCHES**: Would catch writes that never reach disk, or a load that
/// reads a different file than the one written.
#[test]
fn given_favorites_saved_when_reloaded_from_same_dir_then_same_set_in_order() {
    // GIVEN: A session that favorites three photos and removes one
    let temp = TempDir::new().unwrap();
    {
        let mut favorites = FavoritesStore::load(FileStore::new(temp.path()));
        favorites.toggle(&photo("a"));
        favorites.toggle(&photo("b"));
        favorites.toggle(&photo("c"));
        assert_eq!(favorites.toggle(&photo("b")), FavoriteToggle::Removed);
    }

    // WHEN: A new session loads from the same directory
    let reloaded = FavoritesStore::load(FileStore::new(temp.path()));

    // THEN
    let ids: Vec<&str> = reloaded.photos().iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids, vec!["a", "c"]);
    assert_eq!(reloaded.photos()[0], photo("a"));
}

#[test]
fn given_missing_data_dir_when_first_favorite_added_then_dir_created() {
    let temp = TempDir::new().unwrap();
    let data_dir = temp.path().join("nested").join("data");
    let mut favorites = FavoritesStore::load(FileStore::new(&data_dir));

    favorites.toggle(&photo("a"));

    let stored = FileStore::new(&data_dir)
        .get(FAVORITES_STORAGE_KEY)
        .unwrap()
        .expect("favorites written");
    assert!(stored.contains("\"a\""));
}

/// **VALUE**: Verifies a corrupted favorites file yields an empty set, not a crash.
///
/// **WHY THIS MATTERS**: A hand-edited or truncated file must not lock the user out.
///
/// **BUG THIS CATCHES**: Would catch a parse error escaping `load`.
#[test]
fn given_corrupted_file_when_loaded_then_empty_and_next_toggle_overwrites() {
    // GIVEN
    let temp = TempDir::new().unwrap();
    std::fs::write(
        temp.path().join(format!("{FAVORITES_STORAGE_KEY}.json")),
        "[{\"id\": \"broken\"",
    )
    .unwrap();

    // WHEN
    let mut favorites = FavoritesStore::load(FileStore::new(temp.path()));

    // THEN
    assert!(favorites.is_empty());
    favorites.toggle(&photo("fresh"));
    let reloaded = FavoritesStore::load(FileStore::new(temp.path()));
    assert_eq!(reloaded.len(), 1);
    assert!(reloaded.contains("fresh"));
}

#[test]
fn given_session_over_file_store_when_detail_favorite_toggled_then_persisted() {
    let temp = TempDir::new().unwrap();
    let mut session =
        SessionController::new(FavoritesStore::load(FileStore::new(temp.path())), "nature");
    session.open_detail(photo("z"));

    assert_eq!(session.toggle_selected_favorite(), Some(FavoriteToggle::Added));

    let reloaded = FavoritesStore::load(FileStore::new(temp.path()));
    assert!(reloaded.contains("z"));
}
