//! Integration tests for the Panther storefront.
//!
//! # Running Tests
//!
//! ```bash
//! # Store-layer tests against a throwaway profile directory
//! cargo test -p panther-integration-tests
//!
//! # Live-backend tests (require a running backend)
//! PANTHER_API_URL=http://localhost:8000/api \
//!     cargo test -p panther-integration-tests -- --ignored
//! ```
//!
//! # Test Categories
//!
//! - `cart_flow` - Cart lifecycle, persistence round trips, corruption
//!   recovery
//! - `session_flow` - Session restore and logout across store instances
//! - `live_backend` - Credential exchange against a real backend

#![allow(clippy::unwrap_used)]

use std::path::PathBuf;
use std::time::Duration;

use tempfile::TempDir;
use url::Url;

use panther_storefront::config::StorefrontConfig;
use panther_storefront::services::api::ApiClient;
use panther_storefront::storage::StorageBridge;

/// A throwaway storefront profile: every store built from the same
/// harness shares one temporary data directory, like stores sharing one
/// browser profile.
pub struct TestHarness {
    dir: TempDir,
}

impl TestHarness {
    /// Create a fresh profile directory.
    ///
    /// # Panics
    ///
    /// Panics if the temporary directory cannot be created.
    #[must_use]
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("failed to create temp profile dir"),
        }
    }

    /// A bridge rooted at this profile.
    ///
    /// # Panics
    ///
    /// Panics if the bridge cannot be opened.
    #[must_use]
    pub fn storage(&self) -> StorageBridge {
        StorageBridge::open(self.dir.path()).expect("failed to open storage bridge")
    }

    /// Config pointing at this profile. The API URL comes from
    /// `PANTHER_API_URL` when set (live tests), else a loopback port that
    /// refuses connections so stray requests fail fast.
    #[must_use]
    pub fn config(&self) -> StorefrontConfig {
        let api_url = std::env::var("PANTHER_API_URL")
            .map_or_else(|_| "http://127.0.0.1:9/api/".to_owned(), normalize_slash);

        StorefrontConfig {
            api_url: Url::parse(&api_url).expect("invalid PANTHER_API_URL"),
            data_dir: PathBuf::from(self.dir.path()),
            api_timeout: Duration::from_secs(10),
            checkout_key_id: "rzp_test_xxxxxx".to_owned(),
        }
    }

    /// An API client bound to this profile's config.
    ///
    /// # Panics
    ///
    /// Panics if the HTTP client cannot be built.
    #[must_use]
    pub fn api(&self) -> ApiClient {
        ApiClient::new(&self.config()).expect("failed to build API client")
    }

    /// Path of the persisted file for a bridge key.
    #[must_use]
    pub fn key_path(&self, key: &str) -> PathBuf {
        self.dir.path().join(format!("{key}.json"))
    }
}

impl Default for TestHarness {
    fn default() -> Self {
        Self::new()
    }
}

fn normalize_slash(url: String) -> String {
    if url.ends_with('/') {
        url
    } else {
        format!("{url}/")
    }
}
