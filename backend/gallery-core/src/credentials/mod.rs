//! Access key loading for the photo API.
//!
//! The key comes from `UNSPLASH_ACCESS_KEY`, after an optional `.env` file
//! has been merged into the environment. It is wrapped in a
//! [`RedactedApiKey`] straight away and never logged.

pub mod validation;

use crate::UNSPLASH_ACCESS_KEY_ENV;
use crate::error::CredentialError;

use common::RedactedApiKey;

use validation::KeyValidator;

use std::env;
use std::path::PathBuf;

use log::{debug, info, warn};

/// Result of attempting to load a `.env` file.
#[derive(Debug)]
pub struct EnvLoadResult {
    /// Path to the loaded `.env` file, if found.
    pub path: Option<PathBuf>,
    pub loaded: bool,
}

/// Load the access key from `.env` and the process environment.
///
/// # Errors
/// - [`CredentialError::Missing`] when the variable is not set
/// - [`CredentialError::EnvLoad`] when it is not valid unicode
/// - [`CredentialError::Validation`] when the value is obviously wrong
pub fn load_access_key() -> Result<RedactedApiKey, CredentialError> {
    let env_result = try_load_dotenv();
    if !env_result.loaded {
        debug!("No .env file found - will check existing environment variables");
    }

    read_access_key(UNSPLASH_ACCESS_KEY_ENV)
}

/// Read and validate the key from a single environment variable.
pub fn read_access_key(variable: &'static str) -> Result<RedactedApiKey, CredentialError> {
    match env::var(variable) {
        Ok(value) => {
            let key = KeyValidator::default().validate_and_wrap(value)?;
            info!("Found access key in {} ({} chars)", variable, key.len());
            Ok(key)
        }
        Err(env::VarError::NotPresent) => Err(CredentialError::missing(variable)),
        Err(env::VarError::NotUnicode(_)) => {
            warn!("Env var {} contains invalid unicode", variable);
            Err(CredentialError::env_load(format!(
                "{} contains invalid unicode",
                variable
            )))
        }
    }
}

/// Attempts to load .env from known locations.
fn try_load_dotenv() -> EnvLoadResult {
    if let Ok(path) = dotenvy::dotenv() {
        info!("Loaded .env from: {:?}", path);
        return EnvLoadResult {
            path: Some(path),
            loaded: true,
        };
    }

    if let Ok(exe_path) = env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            let env_path = exe_dir.join(".env");
            if env_path.exists() {
                match dotenvy::from_path(&env_path) {
                    Ok(_) => {
                        info!("Loaded .env from: {:?}", env_path);
                        return EnvLoadResult {
                            path: Some(env_path),
                            loaded: true,
                        };
                    }
                    Err(e) => {
                        warn!("Failed to parse .env at {:?}: {}", env_path, e);
                    }
                }
            }
        }
    }

    EnvLoadResult {
        path: None,
        loaded: false,
    }
}
