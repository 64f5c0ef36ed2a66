//! Errors raised while running a photo search.
//!
//! Every variant collapses to the same "try again" message in the view; the
//! detail is for the log file.

use common::{ErrorLocation, HttpStatusCode};

use std::panic::Location;

use thiserror::Error as ThisError;

#[derive(Debug, ThisError)]
pub enum SearchError {
    #[error("Empty Query Error: search term is blank {location}")]
    EmptyQuery { location: ErrorLocation },

    #[error("Missing Credential Error: no access key configured {location}")]
    MissingCredential { location: ErrorLocation },

    #[error("HTTP Error: {message} {location}")]
    Http {
        message: String,
        is_timeout: bool,
        is_connection: bool,
        location: ErrorLocation,
    },

    #[error("Status Error: HTTP {status_code} - {message} {location}")]
    Status {
        status_code: HttpStatusCode,
        message: String,
        location: ErrorLocation,
    },

    #[error("JSON Error: {message} {location}")]
    Json {
        message: String,
        location: ErrorLocation,
    },

    #[error("URL Parse Error: {message} {location}")]
    UrlParse {
        message: String,
        location: ErrorLocation,
    },
}

impl SearchError {
    #[track_caller]
    pub fn empty_query() -> Self {
        SearchError::EmptyQuery {
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn missing_credential() -> Self {
        SearchError::MissingCredential {
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn from_status(status_code: u16, body: impl Into<String>) -> Self {
        SearchError::Status {
            status_code: HttpStatusCode(status_code),
            message: body.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Label for log lines, derived from the variant and status code.
    pub fn error_category(&self) -> &'static str {
        match self {
            SearchError::EmptyQuery { .. } => "empty_query",
            SearchError::MissingCredential { .. } => "missing_credential",
            SearchError::Http { is_timeout: true, .. } => "timeout",
            SearchError::Http { is_connection: true, .. } => "connection",
            SearchError::Http { .. } => "http",
            SearchError::Status { status_code, .. } => status_code.category(),
            SearchError::Json { .. } => "json",
            SearchError::UrlParse { .. } => "url_parse",
        }
    }

    pub fn status_code(&self) -> Option<u16> {
        match self {
            SearchError::Status { status_code, .. } => Some(status_code.0),
            _ => None,
        }
    }
}

impl From<url::ParseError> for SearchError {
    #[track_caller]
    fn from(error: url::ParseError) -> Self {
        SearchError::UrlParse {
            message: error.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<reqwest::Error> for SearchError {
    #[track_caller]
    fn from(error: reqwest::Error) -> Self {
        if error.is_decode() {
            return SearchError::Json {
                message: error.to_string(),
                location: ErrorLocation::from(Location::caller()),
            };
        }

        SearchError::Http {
            message: error.to_string(),
            is_timeout: error.is_timeout(),
            is_connection: error.is_connect(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<serde_json::Error> for SearchError {
    #[track_caller]
    fn from(error: serde_json::Error) -> Self {
        SearchError::Json {
            message: error.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}
