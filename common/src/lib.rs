//! Shared building blocks for the gallery workspace.
//!
//! Everything here is independent of the photo domain: source-located
//! errors, the redacted API credential, and HTTP status helpers.
//!
//! ## Architecture
//!
//! - **common** (this crate): cross-cutting primitives
//! - **models**: photo records decoded from the search API
//! - **gallery-core**: search client, favorites, session controller, view model
//! - **gallery**: terminal application wiring everything together

pub mod error;
pub mod http_status;
pub mod redacted_key;

#[cfg(test)]
mod tests;

pub use error::error_location::ErrorLocation;
pub use error::redact_error::RedactError;
pub use http_status::HttpStatusCode;
pub use redacted_key::RedactedApiKey;
