//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All variables are optional and fall back to local-development defaults.
//!
//! - `PANTHER_API_URL` - Base URL of the backend API (default:
//!   `http://localhost:8000/api`)
//! - `PANTHER_DATA_DIR` - Directory for persisted store state (default:
//!   `.panther`)
//! - `PANTHER_API_TIMEOUT_SECS` - HTTP request timeout in seconds
//!   (default: 10)
//! - `PANTHER_CHECKOUT_KEY_ID` - Public key id for the hosted checkout
//!   (default: the sandbox test key)

use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;
use url::Url;

const DEFAULT_API_URL: &str = "http://localhost:8000/api";
const DEFAULT_DATA_DIR: &str = ".panther";
const DEFAULT_TIMEOUT_SECS: &str = "10";
const DEFAULT_CHECKOUT_KEY_ID: &str = "rzp_test_xxxxxx";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Storefront application configuration.
#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    /// Base URL for the backend API. Always ends with a trailing slash so
    /// endpoint paths join underneath it rather than replacing the last
    /// segment.
    pub api_url: Url,
    /// Directory holding persisted store state (one JSON file per key).
    pub data_dir: PathBuf,
    /// Timeout applied to every outgoing API request.
    pub api_timeout: Duration,
    /// Public key id handed to the hosted checkout dialog.
    pub checkout_key_id: String,
}

impl StorefrontConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is present but invalid (bad
    /// URL, non-numeric timeout).
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let raw_url = get_env_or_default("PANTHER_API_URL", DEFAULT_API_URL);
        let api_url = parse_base_url(&raw_url)
            .map_err(|e| ConfigError::InvalidEnvVar("PANTHER_API_URL".to_owned(), e.to_string()))?;

        let data_dir = PathBuf::from(get_env_or_default("PANTHER_DATA_DIR", DEFAULT_DATA_DIR));

        let timeout_secs = get_env_or_default("PANTHER_API_TIMEOUT_SECS", DEFAULT_TIMEOUT_SECS)
            .parse::<u64>()
            .map_err(|e| {
                ConfigError::InvalidEnvVar("PANTHER_API_TIMEOUT_SECS".to_owned(), e.to_string())
            })?;

        let checkout_key_id =
            get_env_or_default("PANTHER_CHECKOUT_KEY_ID", DEFAULT_CHECKOUT_KEY_ID);

        Ok(Self {
            api_url,
            data_dir,
            api_timeout: Duration::from_secs(timeout_secs),
            checkout_key_id,
        })
    }
}

/// Parse a base URL, normalizing to a trailing slash.
///
/// `Url::join` replaces the final path segment when the base lacks a
/// trailing slash, which would silently drop the `/api` prefix.
fn parse_base_url(raw: &str) -> Result<Url, url::ParseError> {
    if raw.ends_with('/') {
        Url::parse(raw)
    } else {
        Url::parse(&format!("{raw}/"))
    }
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_owned())
}
