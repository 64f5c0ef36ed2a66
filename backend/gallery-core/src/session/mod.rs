//! Session state and the search-cycle state machine.
//!
//! ```text
//! Idle ──submit──▶ Loading ──results──▶ Results
//!                    │  ├───empty────▶ Empty
//!                    │  └───failure──▶ Error
//! Results/Empty/Error/Loading ──submit──▶ Loading
//! ```
//!
//! Each submit hands out a [`SearchTicket`] with a fresh sequence number.
//! Only the completion for the most recent ticket is applied, so a slow
//! response to an older query can never overwrite a newer one.

use crate::error::SearchError;
use crate::favorites::{FavoriteToggle, FavoritesStore};
use crate::search_client::SearchOutcome;
use crate::DEFAULT_INITIAL_QUERY;

use models::Photo;

use log::{debug, info, warn};

pub const EMPTY_RESULTS_MESSAGE: &str = "No results found for this search.";
pub const SEARCH_FAILED_MESSAGE: &str = "Something went wrong while searching. Try again.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchStatus {
    Idle,
    Loading,
    Results,
    Empty,
    Error,
}

/// Handle for one in-flight search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchTicket {
    sequence: u64,
    query: String,
}

impl SearchTicket {
    pub fn sequence(&self) -> u64 {
        self.sequence
    }

    /// The trimmed query to send.
    pub fn query(&self) -> &str {
        &self.query
    }
}

/// Where a click landed while the detail overlay is open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayClick {
    /// Outside the overlay content.
    Scrim,
    /// Inside the overlay content.
    Content,
    CloseButton,
}

#[derive(Debug)]
pub struct SessionController {
    query: String,
    status: SearchStatus,
    photos: Vec<Photo>,
    message: Option<String>,
    selected: Option<Photo>,
    favorites: FavoritesStore,
    last_issued: u64,
}

impl SessionController {
    pub fn new(favorites: FavoritesStore, initial_query: impl Into<String>) -> Self {
        Self {
            query: initial_query.into(),
            status: SearchStatus::Idle,
            photos: Vec::new(),
            message: None,
            selected: None,
            favorites,
            last_issued: 0,
        }
    }

    pub fn with_default_query(favorites: FavoritesStore) -> Self {
        Self::new(favorites, DEFAULT_INITIAL_QUERY)
    }

    // ============================================
    // SEARCH CYCLE
    // ============================================

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn query_mut(&mut self) -> &mut String {
        &mut self.query
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    /// Start a search cycle for the current query.
    ///
    /// Returns `None` and changes nothing when the trimmed query is empty.
    /// Otherwise enters Loading, clears previous results and message, and
    /// returns the ticket the caller must pass back to [`Self::complete`].
    pub fn submit(&mut self) -> Option<SearchTicket> {
        let trimmed = self.query.trim();
        if trimmed.is_empty() {
            debug!("Ignoring submit with a blank query");
            return None;
        }

        if self.status == SearchStatus::Loading {
            debug!("Superseding search #{}", self.last_issued);
        }

        self.last_issued += 1;
        let ticket = SearchTicket {
            sequence: self.last_issued,
            query: trimmed.to_string(),
        };

        self.status = SearchStatus::Loading;
        self.photos.clear();
        self.message = None;

        info!("Search #{} started for '{}'", ticket.sequence, ticket.query);
        Some(ticket)
    }

    /// Apply the result of a search.
    ///
    /// Returns `false` when the ticket is stale (a newer search was issued,
    /// or this one already completed); state is left untouched.
    pub fn complete(
        &mut self,
        ticket: &SearchTicket,
        result: Result<SearchOutcome, SearchError>,
    ) -> bool {
        if self.status != SearchStatus::Loading || ticket.sequence != self.last_issued {
            debug!(
                "Discarding stale completion for search #{} (latest #{})",
                ticket.sequence, self.last_issued
            );
            return false;
        }

        match result {
            Ok(SearchOutcome::Results(photos)) => {
                info!("Search #{} finished with {} photos", ticket.sequence, photos.len());
                self.photos = photos;
                self.message = None;
                self.status = SearchStatus::Results;
            }
            Ok(SearchOutcome::Empty) => {
                info!("Search #{} finished without results", ticket.sequence);
                self.photos.clear();
                self.message = Some(EMPTY_RESULTS_MESSAGE.to_string());
                self.status = SearchStatus::Empty;
            }
            Err(e) => {
                warn!("Search #{} failed: {}", ticket.sequence, e);
                self.photos.clear();
                self.message = Some(SEARCH_FAILED_MESSAGE.to_string());
                self.status = SearchStatus::Error;
            }
        }

        true
    }

    pub fn status(&self) -> SearchStatus {
        self.status
    }

    pub fn is_loading(&self) -> bool {
        self.status == SearchStatus::Loading
    }

    pub fn photos(&self) -> &[Photo] {
        &self.photos
    }

    /// Informational (Empty) or error (Error) text; `None` otherwise.
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    // ============================================
    // FAVORITES
    // ============================================

    pub fn is_favorite(&self, photo: &Photo) -> bool {
        self.favorites.is_favorite(photo)
    }

    pub fn toggle_favorite(&mut self, photo: &Photo) -> FavoriteToggle {
        self.favorites.toggle(photo)
    }

    /// Toggle the photo shown in the detail overlay, if any.
    pub fn toggle_selected_favorite(&mut self) -> Option<FavoriteToggle> {
        let photo = self.selected.clone()?;
        Some(self.favorites.toggle(&photo))
    }

    pub fn favorites(&self) -> &FavoritesStore {
        &self.favorites
    }

    // ============================================
    // DETAIL OVERLAY
    // ============================================

    pub fn open_detail(&mut self, photo: Photo) {
        debug!("Opening detail for {}", photo.id);
        self.selected = Some(photo);
    }

    pub fn close_detail(&mut self) {
        if let Some(photo) = self.selected.take() {
            debug!("Closing detail for {}", photo.id);
        }
    }

    /// Route a click while the overlay is open. Returns `true` if it closed.
    pub fn overlay_click(&mut self, click: OverlayClick) -> bool {
        if self.selected.is_none() {
            return false;
        }

        match click {
            OverlayClick::Scrim | OverlayClick::CloseButton => {
                self.close_detail();
                true
            }
            OverlayClick::Content => false,
        }
    }

    pub fn selected(&self) -> Option<&Photo> {
        self.selected.as_ref()
    }
}
