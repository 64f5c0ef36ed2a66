pub mod config;
pub mod credentials;
pub mod error;
pub mod favorites;
pub mod search_client;
pub mod session;
pub mod storage;
pub mod view;

#[cfg(test)]
mod tests;

pub use config::AppConfig;
pub use favorites::{FavoriteToggle, FavoritesStore};
pub use search_client::{SearchOutcome, UnsplashClient};
pub use session::{OverlayClick, SearchStatus, SearchTicket, SessionController};
pub use storage::{FileStore, KeyValueStore, MemoryStore};

pub const APP_DIR_NAME: &str = "galerie-inspiration";
pub const UNSPLASH_API_HOSTNAME: &str = "api.unsplash.com";
pub const UNSPLASH_API_BASE_URL: &str =
    const_format::concatcp!("https://", UNSPLASH_API_HOSTNAME, "/");
pub const UNSPLASH_ACCESS_KEY_ENV: &str = "UNSPLASH_ACCESS_KEY";

/// Results requested per search; the gallery never pages.
pub const SEARCH_PAGE_SIZE: u32 = 24;

/// Storage key holding the serialized favorites.
pub const FAVORITES_STORAGE_KEY: &str = "galerie-inspiration-favorites";

pub const DEFAULT_INITIAL_QUERY: &str = "design";
