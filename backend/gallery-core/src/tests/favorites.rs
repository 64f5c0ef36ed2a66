use super::fixtures::{photo, photos};
use crate::FAVORITES_STORAGE_KEY;
use crate::favorites::{FavoriteToggle, FavoritesStore};
use crate::storage::{FileStore, MemoryStore};

use models::Photo;

use tempfile::TempDir;

fn ids(store: &FavoritesStore) -> Vec<String> {
    store.photos().iter().map(|p| p.id.clone()).collect()
}

fn stored_ids(store: &FavoritesStore) -> Vec<String> {
    let raw = store
        .storage()
        .get(FAVORITES_STORAGE_KEY)
        .unwrap()
        .expect("favorites should have been persisted");
    let photos: Vec<Photo> = serde_json::from_str(&raw).unwrap();
    photos.into_iter().map(|p| p.id).collect()
}

/// **VALUE**: Verifies toggling the same photo twice restores the previous set.
///
/// **WHY THIS MATTERS**: The favorite button is a toggle; two presses must be a no-op.
///
/// **BUG THIS CATCHES**: Would catch removal by position instead of by id, or an
/// append that does not check membership.
#[test]
fn given_favorites_when_same_photo_toggled_twice_then_set_unchanged() {
    // GIVEN: A store with two favorites
    let mut store = FavoritesStore::load(MemoryStore::new());
    store.toggle(&photo("a"));
    store.toggle(&photo("b"));
    let before = ids(&store);

    // WHEN: Toggling a third photo on and off
    let first = store.toggle(&photo("c"));
    let second = store.toggle(&photo("c"));

    // THEN: Added then Removed, set identical to before
    assert_eq!(first, FavoriteToggle::Added);
    assert_eq!(second, FavoriteToggle::Removed);
    assert_eq!(ids(&store), before);
}

/// **VALUE**: Verifies no sequence of toggles can create duplicate ids.
///
/// **WHY THIS MATTERS**: Duplicates would render twice and need two removals.
///
/// **BUG THIS CATCHES**: Would catch membership checks by full equality instead of id.
#[test]
fn given_arbitrary_toggle_sequence_when_applied_then_ids_stay_unique() {
    // GIVEN: A toggle sequence with repeats, including a photo whose other
    // fields differ but whose id matches
    let mut store = FavoritesStore::load(MemoryStore::new());
    let mut altered = photo("a");
    altered.alt_description = Some(String::from("different text"));
    let sequence = [
        photo("a"),
        photo("b"),
        photo("a"),
        photo("c"),
        altered,
        photo("b"),
        photo("a"),
        photo("c"),
        photo("d"),
    ];

    // WHEN / THEN: after every step ids are unique
    for p in &sequence {
        store.toggle(p);
        let mut seen = ids(&store);
        let len = seen.len();
        seen.sort();
        seen.dedup();
        assert_eq!(seen.len(), len, "duplicate id after toggling {}", p.id);
    }
}

/// **VALUE**: Verifies insertion order is kept for display.
///
/// **WHY THIS MATTERS**: The favorites panel lists items in the order they were added.
///
/// **BUG THIS CATCHES**: Would catch a HashMap-backed store reordering entries.
#[test]
fn given_several_favorites_when_added_then_insertion_order_kept() {
    let mut store = FavoritesStore::load(MemoryStore::new());
    for p in photos(5) {
        store.toggle(&p);
    }
    store.toggle(&photo("p1"));

    assert_eq!(ids(&store), vec!["p0", "p2", "p3", "p4"]);
    assert!(store.contains("p3"));
    assert!(!store.is_favorite(&photo("p1")));
}

/// **VALUE**: Verifies every mutation writes the full set.
///
/// **WHY THIS MATTERS**: A crash after a toggle must not lose it.
///
/// **BUG THIS CATCHES**: Would catch persistence only on shutdown.
#[test]
fn given_toggle_when_applied_then_storage_mirrors_memory() {
    // GIVEN
    let mut store = FavoritesStore::load(MemoryStore::new());

    // WHEN
    store.toggle(&photo("a"));
    store.toggle(&photo("b"));
    store.toggle(&photo("a"));

    // THEN
    assert_eq!(stored_ids(&store), vec!["b"]);
}

/// **VALUE**: Verifies persist + reload on a fresh store yields the same set.
///
/// **WHY THIS MATTERS**: This is the whole point of favorites surviving a restart.
///
/// **BUG THIS CATCHES**: Would catch serialization order or field loss.
#[test]
fn given_persisted_favorites_when_reloaded_from_disk_then_identical() {
    // GIVEN: Favorites written through a FileStore
    let dir = TempDir::new().unwrap();
    let mut store = FavoritesStore::load(FileStore::new(dir.path()));
    for id in ["z", "m", "a"] {
        store.toggle(&photo(id));
    }
    let before: Vec<Photo> = store.photos().to_vec();
    drop(store);

    // WHEN: A fresh store loads the same directory
    let reloaded = FavoritesStore::load(FileStore::new(dir.path()));

    // THEN: Same photos, same order
    assert_eq!(reloaded.photos(), before.as_slice());
}

/// **VALUE**: Verifies unparseable stored data starts an empty set without failing.
///
/// **WHY THIS MATTERS**: A corrupted file must not block the gallery.
///
/// **BUG THIS CATCHES**: Would catch a panic or propagated error from `load`.
#[test]
fn given_corrupted_storage_when_loaded_then_empty() {
    // GIVEN
    let storage = MemoryStore::with_value(FAVORITES_STORAGE_KEY, "{ definitely not json");

    // WHEN
    let store = FavoritesStore::load(storage);

    // THEN
    assert!(store.is_empty());
}

/// **VALUE**: Verifies an I/O failure while reading favorites starts an empty set.
///
/// **WHY THIS MATTERS**: A broken data directory must never stop the gallery from
/// starting, and the session must still be able to collect favorites.
///
/// **BUG THIS CATCHES**: Would catch a read error being propagated or panicking
/// instead of degrading to an empty in-memory set.
#[test]
fn given_unreadable_storage_file_when_loaded_then_empty_and_toggle_still_works() {
    // GIVEN: The favorites file path is occupied by a directory
    let dir = TempDir::new().unwrap();
    std::fs::create_dir(dir.path().join(format!("{FAVORITES_STORAGE_KEY}.json"))).unwrap();

    // WHEN
    let mut store = FavoritesStore::load(FileStore::new(dir.path()));

    // THEN
    assert!(store.is_empty());
    assert_eq!(store.toggle(&photo("a")), FavoriteToggle::Added);
    assert!(store.contains("a"));
}

#[test]
fn given_stored_duplicates_when_loaded_then_first_occurrence_kept() {
    let stored = vec![photo("a"), photo("b"), photo("a")];
    let storage =
        MemoryStore::with_value(FAVORITES_STORAGE_KEY, serde_json::to_string(&stored).unwrap());

    let store = FavoritesStore::load(storage);

    assert_eq!(ids(&store), vec!["a", "b"]);
}

/// **VALUE**: Verifies a failing write keeps the in-memory change.
///
/// **WHY THIS MATTERS**: Favorites degrade to session-only; the click still works.
///
/// **BUG THIS CATCHES**: Would catch a rollback on persist failure.
#[test]
fn given_unwritable_storage_when_toggled_then_memory_updated_anyway() {
    // GIVEN: Storage that rejects writes
    let mut store = FavoritesStore::load(MemoryStore::new().read_only());

    // WHEN
    let outcome = store.toggle(&photo("a"));

    // THEN
    assert_eq!(outcome, FavoriteToggle::Added);
    assert_eq!(ids(&store), vec!["a"]);
    assert!(store.persist().is_err());
    assert_eq!(store.storage().get(FAVORITES_STORAGE_KEY).unwrap(), None);
}
