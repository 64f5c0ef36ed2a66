//! HTTP client for the Unsplash photo search endpoint.
//!
//! One GET per search, fixed page size, no retry. The response is decoded
//! into strict [`Photo`] records at this boundary.

use crate::config::ApiConfig;
use crate::error::SearchError;
use crate::SEARCH_PAGE_SIZE;

use common::RedactedApiKey;
use models::{Photo, SearchResponse};

use std::collections::HashSet;
use std::time::Duration;

use log::{debug, info, warn};
use reqwest::Client;
use url::Url;

const SEARCH_PHOTOS_ENDPOINT: &str = "search/photos";
const ACCEPT_VERSION_HEADER_KEY: &str = "Accept-Version";
const API_VERSION: &str = "v1";

/// Terminal state of a successful search request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    /// Photos in the order the API returned them.
    Results(Vec<Photo>),
    /// The API answered but had nothing for this query.
    Empty,
}

#[derive(Debug, Clone)]
pub struct UnsplashClient {
    base_url: Url,
    client: Client,
    access_key: Option<RedactedApiKey>,
}

impl UnsplashClient {
    /// Build a client for `base_url_str`.
    ///
    /// A missing access key is allowed; searches then fail with
    /// [`SearchError::MissingCredential`] without touching the network.
    pub fn new(
        base_url_str: &str,
        access_key: Option<RedactedApiKey>,
        timeout: Duration,
    ) -> Result<Self, SearchError> {
        let base_url = if base_url_str.ends_with('/') {
            Url::parse(base_url_str)?
        } else {
            Url::parse(&format!("{base_url_str}/"))?
        };
        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            base_url,
            client,
            access_key,
        })
    }

    pub fn from_config(
        config: &ApiConfig,
        access_key: Option<RedactedApiKey>,
    ) -> Result<Self, SearchError> {
        Self::new(&config.base_url, access_key, config.timeout())
    }

    pub fn has_credential(&self) -> bool {
        self.access_key.is_some()
    }

    /// Full request URL for `query`, credential included.
    ///
    /// # Errors
    /// [`SearchError::EmptyQuery`] for a blank query,
    /// [`SearchError::MissingCredential`] without an access key.
    pub fn search_url(&self, query: &str) -> Result<Url, SearchError> {
        let query = query.trim();
        if query.is_empty() {
            return Err(SearchError::empty_query());
        }

        let access_key = self
            .access_key
            .as_ref()
            .ok_or_else(SearchError::missing_credential)?;

        let mut url = self.base_url.join(SEARCH_PHOTOS_ENDPOINT)?;
        url.query_pairs_mut()
            .append_pair("query", query)
            .append_pair("per_page", &SEARCH_PAGE_SIZE.to_string())
            .append_pair("client_id", access_key.as_str());

        Ok(url)
    }

    /// Run one search.
    ///
    /// # Errors
    /// Returns [`SearchError`] for a blank query, a missing credential, a
    /// transport failure, a non-success status or a malformed body.
    pub async fn search(&self, query: &str) -> Result<SearchOutcome, SearchError> {
        let url = self.search_url(query)?;
        info!("Searching photos for '{}'", query.trim());

        let response = self
            .client
            .get(url)
            .header(ACCEPT_VERSION_HEADER_KEY, API_VERSION)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            let error = SearchError::from_status(status, body);
            warn!("Search failed ({}): {}", error.error_category(), error);
            return Err(error);
        }

        let body = response.text().await?;
        let payload: SearchResponse = serde_json::from_str(&body)?;
        debug!(
            "Search returned {} records (total {:?}, pages {:?})",
            payload.results.len(),
            payload.total,
            payload.total_pages
        );

        let photos = accept_records(payload.results);
        if photos.is_empty() {
            info!("No photos found for '{}'", query.trim());
            return Ok(SearchOutcome::Empty);
        }

        info!("Found {} photos for '{}'", photos.len(), query.trim());
        Ok(SearchOutcome::Results(photos))
    }
}

/// Drop records that fail validation or repeat an earlier id, keeping order.
pub(crate) fn accept_records(records: Vec<Photo>) -> Vec<Photo> {
    let mut seen = HashSet::with_capacity(records.len());

    records
        .into_iter()
        .filter(|photo| match photo.validate() {
            Ok(()) => true,
            Err(e) => {
                warn!("Skipping invalid photo record: {e}");
                false
            }
        })
        .filter(|photo| {
            let first = seen.insert(photo.id.clone());
            if !first {
                warn!("Skipping duplicate photo record {}", photo.id);
            }
            first
        })
        .collect()
}
