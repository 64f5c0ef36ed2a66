//! The user's favorite photos, mirrored to durable storage.
//!
//! The set is ordered by insertion and unique by photo id. Every mutation
//! rewrites the whole set under [`FAVORITES_STORAGE_KEY`]. Storage problems
//! are logged and never reach the user: the in-memory set stays
//! authoritative for the rest of the session.

use crate::FAVORITES_STORAGE_KEY;
use crate::error::StorageError;
use crate::storage::KeyValueStore;

use common::ErrorLocation;
use models::Photo;

use std::collections::HashSet;
use std::fmt;
use std::panic::Location;

use log::{debug, info, warn};

/// What a toggle did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FavoriteToggle {
    Added,
    Removed,
}

pub struct FavoritesStore {
    photos: Vec<Photo>,
    storage: Box<dyn KeyValueStore>,
}

impl FavoritesStore {
    /// Load the persisted set from `storage`.
    ///
    /// Missing, unreadable or unparseable data yields an empty set; the
    /// condition is logged only.
    pub fn load(storage: impl KeyValueStore + 'static) -> Self {
        let storage: Box<dyn KeyValueStore> = Box::new(storage);

        let photos = match storage.get(FAVORITES_STORAGE_KEY) {
            Ok(Some(raw)) => match serde_json::from_str::<Vec<Photo>>(&raw) {
                Ok(photos) => {
                    let photos = dedupe(photos);
                    info!(
                        "Loaded {} favorites from {}",
                        photos.len(),
                        storage.describe()
                    );
                    photos
                }
                Err(e) => {
                    warn!(
                        "Stored favorites in {} are unreadable, starting empty: {}",
                        storage.describe(),
                        e
                    );
                    Vec::new()
                }
            },
            Ok(None) => {
                info!("No stored favorites in {}, starting empty", storage.describe());
                Vec::new()
            }
            Err(e) => {
                warn!("Failed to read favorites, starting empty: {e}");
                Vec::new()
            }
        };

        Self { photos, storage }
    }

    pub fn is_favorite(&self, photo: &Photo) -> bool {
        self.contains(&photo.id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.photos.iter().any(|fav| fav.id == id)
    }

    /// Remove the photo if present, otherwise append it, then persist.
    pub fn toggle(&mut self, photo: &Photo) -> FavoriteToggle {
        let outcome = if self.is_favorite(photo) {
            self.photos.retain(|fav| fav.id != photo.id);
            FavoriteToggle::Removed
        } else {
            self.photos.push(photo.clone());
            FavoriteToggle::Added
        };

        debug!("Favorite {} {:?} ({} total)", photo.id, outcome, self.photos.len());

        if let Err(e) = self.persist() {
            warn!("Favorites kept in memory only: {e}");
        }

        outcome
    }

    /// Serialize the full set and write it to storage.
    ///
    /// Callers log the error; the in-memory set is never rolled back.
    pub fn persist(&mut self) -> Result<(), StorageError> {
        let json = serde_json::to_string(&self.photos).map_err(|e| StorageError::SerializeError {
            location: ErrorLocation::from(Location::caller()),
            reason: e.to_string(),
        })?;

        self.storage.set(FAVORITES_STORAGE_KEY, &json)
    }

    pub fn photos(&self) -> &[Photo] {
        &self.photos
    }

    pub fn len(&self) -> usize {
        self.photos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.photos.is_empty()
    }

    pub fn storage(&self) -> &dyn KeyValueStore {
        self.storage.as_ref()
    }
}

impl fmt::Debug for FavoritesStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FavoritesStore")
            .field("count", &self.photos.len())
            .field("storage", &self.storage.describe())
            .finish()
    }
}

/// Keep the first occurrence of every id, preserving order.
fn dedupe(photos: Vec<Photo>) -> Vec<Photo> {
    let before = photos.len();
    let mut seen = HashSet::with_capacity(before);
    let unique: Vec<Photo> = photos
        .into_iter()
        .filter(|photo| seen.insert(photo.id.clone()))
        .collect();

    if unique.len() != before {
        warn!(
            "Dropped {} duplicate favorites from storage",
            before - unique.len()
        );
    }

    unique
}
