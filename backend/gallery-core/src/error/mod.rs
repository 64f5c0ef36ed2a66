pub mod config;
pub mod credentials;
pub mod search;
pub mod storage;

pub use credentials::{CredentialError, KeyValidationFailure};
pub use search::SearchError;
pub use storage::StorageError;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error(transparent)]
    Search(#[from] search::SearchError),

    #[error(transparent)]
    Storage(#[from] storage::StorageError),

    #[error(transparent)]
    Config(#[from] config::ConfigError),

    #[error(transparent)]
    Credential(#[from] credentials::CredentialError),
}
