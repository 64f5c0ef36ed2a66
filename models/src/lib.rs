//! Photo records as returned by the Unsplash search API.
//!
//! Models are pure data plus boundary validation. The same serde shape is
//! used for API payloads and for the persisted favorites file, so a photo
//! saved today decodes with the same code that fetched it.

pub mod error;
pub mod photo;
pub mod search_response;

#[cfg(test)]
mod tests;

pub use common::ErrorLocation;
pub use error::model_error::ModelError;
pub use photo::builder::PhotoBuilder;
pub use photo::{Photo, PhotoLinks, PhotoUrls, PhotoUser};
pub use search_response::SearchResponse;
