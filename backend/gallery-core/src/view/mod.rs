//! Screen content as a pure function of the session.
//!
//! The front end only lays out what [`render`] returns; every label, badge
//! and fallback text is decided here.

use crate::session::{SearchStatus, SessionController};

use models::Photo;

pub const APP_TITLE: &str = "Galerie d'Inspiration Créative";
pub const APP_SUBTITLE: &str = "Search, explore and save your inspiration images.";
pub const SEARCH_PLACEHOLDER: &str = "Search (e.g. architecture, ux design, nature...)";
pub const SEARCH_LABEL: &str = "Search";
pub const SEARCHING_LABEL: &str = "Searching...";
pub const LOADING_TEXT: &str = "Loading images...";
pub const RESULTS_TITLE: &str = "Results";
pub const FAVORITES_TITLE: &str = "Favorites";
pub const FAVORITES_EMPTY_TEXT: &str = "No favorite images yet. Add some from the results.";
pub const ADD_FAVORITE_LABEL: &str = "Add to favorites";
pub const REMOVE_FAVORITE_LABEL: &str = "Remove from favorites";
pub const SOURCE_LINK_LABEL: &str = "View on Unsplash";
pub const FOOTER_TEXT: &str = "Galerie d'Inspiration Créative - photos courtesy of Unsplash";

const CARD_ALT_FALLBACK: &str = "Unsplash image";
const FAVORITE_ALT_FALLBACK: &str = "Unsplash favorite";
const DETAIL_ALT_FALLBACK: &str = "Enlarged image";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Screen {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub search_form: SearchForm,
    pub results: ResultsPanel,
    pub favorites: FavoritesPanel,
    pub detail: Option<DetailOverlay>,
    pub footer: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchForm {
    pub query: String,
    pub placeholder: &'static str,
    pub submit_label: &'static str,
    pub busy: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultsPanel {
    pub title: &'static str,
    pub badge: Option<String>,
    pub body: ResultsBody,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    /// The search worked but found nothing.
    Info,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResultsBody {
    /// Nothing searched yet.
    Blank,
    Loading(&'static str),
    Message { kind: MessageKind, text: String },
    Grid(Vec<PhotoCard>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhotoCard {
    pub id: String,
    pub image_url: String,
    pub alt_text: String,
    pub photographer: String,
    pub source_url: String,
    pub source_label: &'static str,
    pub is_favorite: bool,
    pub favorite_label: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FavoritesPanel {
    pub title: &'static str,
    pub badge: Option<String>,
    pub body: FavoritesBody,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FavoritesBody {
    Empty(&'static str),
    Grid(Vec<FavoriteCard>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FavoriteCard {
    pub id: String,
    pub thumb_url: String,
    pub alt_text: String,
    pub photographer: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailOverlay {
    pub id: String,
    pub image_url: String,
    pub alt_text: String,
    pub attribution: String,
    pub source_url: String,
    pub is_favorite: bool,
    pub favorite_label: &'static str,
}

pub fn render(session: &SessionController) -> Screen {
    Screen {
        title: APP_TITLE,
        subtitle: APP_SUBTITLE,
        search_form: render_search_form(session),
        results: render_results(session),
        favorites: render_favorites(session),
        detail: session.selected().map(|photo| render_detail(session, photo)),
        footer: FOOTER_TEXT,
    }
}

fn render_search_form(session: &SessionController) -> SearchForm {
    let busy = session.is_loading();
    SearchForm {
        query: session.query().to_string(),
        placeholder: SEARCH_PLACEHOLDER,
        submit_label: if busy { SEARCHING_LABEL } else { SEARCH_LABEL },
        busy,
    }
}

fn render_results(session: &SessionController) -> ResultsPanel {
    let photos = session.photos();
    let badge = (!photos.is_empty()).then(|| format!("{} images", photos.len()));

    let body = match session.status() {
        SearchStatus::Idle => ResultsBody::Blank,
        SearchStatus::Loading => ResultsBody::Loading(LOADING_TEXT),
        SearchStatus::Empty | SearchStatus::Error => {
            let kind = if session.status() == SearchStatus::Error {
                MessageKind::Error
            } else {
                MessageKind::Info
            };
            ResultsBody::Message {
                kind,
                text: session.message().unwrap_or_default().to_string(),
            }
        }
        SearchStatus::Results => ResultsBody::Grid(
            photos
                .iter()
                .map(|photo| photo_card(session, photo))
                .collect(),
        ),
    };

    ResultsPanel {
        title: RESULTS_TITLE,
        badge,
        body,
    }
}

fn photo_card(session: &SessionController, photo: &Photo) -> PhotoCard {
    let is_favorite = session.is_favorite(photo);
    PhotoCard {
        id: photo.id.clone(),
        image_url: photo.urls.small.clone(),
        alt_text: photo.alt_text(CARD_ALT_FALLBACK).to_string(),
        photographer: photo.user.name.clone(),
        source_url: photo.links.html.clone(),
        source_label: SOURCE_LINK_LABEL,
        is_favorite,
        favorite_label: favorite_label(is_favorite),
    }
}

fn render_favorites(session: &SessionController) -> FavoritesPanel {
    let favorites = session.favorites();
    let badge = (!favorites.is_empty()).then(|| favorites.len().to_string());

    let body = if favorites.is_empty() {
        FavoritesBody::Empty(FAVORITES_EMPTY_TEXT)
    } else {
        FavoritesBody::Grid(
            favorites
                .photos()
                .iter()
                .map(|photo| FavoriteCard {
                    id: photo.id.clone(),
                    thumb_url: photo.urls.thumb.clone(),
                    alt_text: photo.alt_text(FAVORITE_ALT_FALLBACK).to_string(),
                    photographer: photo.user.name.clone(),
                })
                .collect(),
        )
    };

    FavoritesPanel {
        title: FAVORITES_TITLE,
        badge,
        body,
    }
}

fn render_detail(session: &SessionController, photo: &Photo) -> DetailOverlay {
    let is_favorite = session.is_favorite(photo);
    DetailOverlay {
        id: photo.id.clone(),
        image_url: photo.urls.regular.clone(),
        alt_text: photo.alt_text(DETAIL_ALT_FALLBACK).to_string(),
        attribution: format!("Photo by {} on Unsplash", photo.user.name),
        source_url: photo.links.html.clone(),
        is_favorite,
        favorite_label: favorite_label(is_favorite),
    }
}

fn favorite_label(is_favorite: bool) -> &'static str {
    if is_favorite {
        REMOVE_FAVORITE_LABEL
    } else {
        ADD_FAVORITE_LABEL
    }
}
