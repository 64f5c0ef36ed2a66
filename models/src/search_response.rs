use crate::Photo;

use serde::Deserialize;

/// Body of `GET /search/photos`.
///
/// A missing `results` array decodes as empty; callers treat that the same
/// as a search with no hits.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub total: Option<u64>,
    #[serde(default)]
    pub total_pages: Option<u64>,
    #[serde(default)]
    pub results: Vec<Photo>,
}
