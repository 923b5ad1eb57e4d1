//! Auth store.
//!
//! Owns the session: the authenticated user's identity record and the
//! access token returned by the credential exchange. Both halves persist
//! through the bridge so a session survives restarts, and the token is
//! installed as the API client's default bearer header for every
//! subsequent request.
//!
//! Remote failures never escape the store: they are captured into the
//! `error` field for views to read, and the operation reports plain
//! success or failure.

use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::instrument;

use panther_core::Email;

use crate::services::api::{ApiClient, ApiError};
use crate::storage::{StorageBridge, StorageError, keys};

/// Identity record returned by the backend on login.
///
/// Treated as opaque beyond the fields the UI reads: unrecognized keys
/// survive the persistence round trip through `extra`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// Payload for account creation. The same credentials are used for the
/// follow-up login.
#[derive(Debug, Clone, Serialize)]
pub struct RegisterRequest {
    pub email: Email,
    pub password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

#[derive(Serialize)]
struct TokenRequest<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Deserialize)]
struct TokenResponse {
    access: String,
    user: UserProfile,
}

/// Internal failure source for a session operation; only its message ever
/// leaves the store.
#[derive(Debug, Error)]
enum SessionError {
    #[error(transparent)]
    Api(#[from] ApiError),
    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl SessionError {
    /// Message surfaced to views: the server's own wording when the
    /// failure response carried one, else the generic fallback.
    fn user_message(&self, fallback: &str) -> String {
        match self {
            Self::Api(api) => api
                .server_message()
                .map_or_else(|| fallback.to_owned(), str::to_owned),
            Self::Storage(_) => fallback.to_owned(),
        }
    }
}

/// Session state container.
pub struct AuthStore {
    user: Option<UserProfile>,
    access_token: Option<SecretString>,
    loading: bool,
    error: Option<String>,
    api: ApiClient,
    storage: StorageBridge,
}

impl AuthStore {
    /// Restore any persisted session from the bridge.
    ///
    /// A restored token is immediately re-installed as the API client's
    /// bearer header, matching the state a fresh login leaves behind.
    #[must_use]
    pub fn load(api: ApiClient, storage: StorageBridge) -> Self {
        let user: Option<UserProfile> = storage.load(keys::USER);
        let access_token = storage
            .load::<String>(keys::TOKEN)
            .map(SecretString::from);

        if let Some(token) = &access_token {
            api.set_bearer_token(token.clone());
        }

        Self {
            user,
            access_token,
            loading: false,
            error: None,
            api,
            storage,
        }
    }

    /// Exchange credentials for a session.
    ///
    /// On success the token and user identity are stored in state and in
    /// the bridge, the bearer header is installed, and `true` is returned.
    /// On failure the human-readable message lands in [`Self::error`] and
    /// `false` is returned. `loading` is reset on every path.
    #[instrument(skip(self, password))]
    pub async fn login(&mut self, email: &str, password: &str) -> bool {
        self.loading = true;
        self.error = None;

        let outcome = self.exchange_credentials(email, password).await;
        self.loading = false;

        match outcome {
            Ok(()) => true,
            Err(err) => {
                self.error = Some(err.user_message("Login failed"));
                false
            }
        }
    }

    async fn exchange_credentials(
        &mut self,
        email: &str,
        password: &str,
    ) -> Result<(), SessionError> {
        let response: TokenResponse = self
            .api
            .post_json("token/", &TokenRequest { email, password })
            .await?;

        self.storage.save(keys::TOKEN, &response.access)?;
        self.storage.save(keys::USER, &response.user)?;

        self.api
            .set_bearer_token(SecretString::from(response.access.clone()));
        self.access_token = Some(SecretString::from(response.access));
        self.user = Some(response.user);
        Ok(())
    }

    /// Create an account, then immediately log in with the same
    /// credentials to establish a session.
    ///
    /// Returns `false` only when account creation itself fails; the
    /// follow-up login reports through [`Self::error`] like any login.
    #[instrument(skip(self, data), fields(email = %data.email))]
    pub async fn register(&mut self, data: &RegisterRequest) -> bool {
        self.loading = true;
        self.error = None;

        let created = self.api.post_no_content("auth/register/", data).await;

        let success = match created {
            Ok(()) => {
                self.login(data.email.as_str(), &data.password).await;
                true
            }
            Err(err) => {
                self.error =
                    Some(SessionError::Api(err).user_message("Registration failed"));
                false
            }
        };

        self.loading = false;
        success
    }

    /// Clear the session: state, persisted keys, and the bearer header.
    pub fn logout(&mut self) {
        self.user = None;
        self.access_token = None;
        self.storage.remove(keys::TOKEN);
        self.storage.remove(keys::USER);
        self.api.clear_bearer_token();
    }

    // =========================================================================
    // Derived getters
    // =========================================================================

    /// A session exists only when both the token and the user identity
    /// are present.
    #[must_use]
    pub const fn is_logged_in(&self) -> bool {
        self.access_token.is_some() && self.user.is_some()
    }

    /// The logged-in user's email, when known.
    #[must_use]
    pub fn user_email(&self) -> Option<&str> {
        self.user.as_ref().and_then(|user| user.email.as_deref())
    }

    /// The user identity record, when logged in.
    #[must_use]
    pub const fn user(&self) -> Option<&UserProfile> {
        self.user.as_ref()
    }

    /// Whether a login or registration is currently in flight.
    #[must_use]
    pub const fn loading(&self) -> bool {
        self.loading
    }

    /// The last captured failure message, cleared on the next attempt.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// The raw access token; exposed for collaborators that must forward
    /// it outside the API client (none today besides tests).
    #[must_use]
    pub fn access_token(&self) -> Option<&str> {
        self.access_token.as_ref().map(ExposeSecret::expose_secret)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::config::StorefrontConfig;
    use std::path::PathBuf;
    use std::time::Duration;
    use url::Url;

    /// Config pointing at a port that refuses connections, so network
    /// paths fail fast and deterministically.
    fn unreachable_config(data_dir: &std::path::Path) -> StorefrontConfig {
        StorefrontConfig {
            api_url: Url::parse("http://127.0.0.1:9/api/").unwrap(),
            data_dir: PathBuf::from(data_dir),
            api_timeout: Duration::from_secs(2),
            checkout_key_id: "rzp_test_xxxxxx".to_owned(),
        }
    }

    fn setup() -> (tempfile::TempDir, AuthStore) {
        let dir = tempfile::tempdir().unwrap();
        let config = unreachable_config(dir.path());
        let storage = StorageBridge::open(dir.path()).unwrap();
        let api = ApiClient::new(&config).unwrap();
        let store = AuthStore::load(api, storage);
        (dir, store)
    }

    #[test]
    fn test_fresh_store_is_logged_out() {
        let (_dir, store) = setup();
        assert!(!store.is_logged_in());
        assert!(store.user_email().is_none());
        assert!(!store.loading());
        assert!(store.error().is_none());
    }

    #[test]
    fn test_restores_persisted_session() {
        let dir = tempfile::tempdir().unwrap();
        let storage = StorageBridge::open(dir.path()).unwrap();
        storage.save(keys::TOKEN, "token-abc").unwrap();
        storage
            .save(
                keys::USER,
                &serde_json::json!({"id": 7, "email": "lifter@thepanther.in"}),
            )
            .unwrap();

        let api = ApiClient::new(&unreachable_config(dir.path())).unwrap();
        let store = AuthStore::load(api.clone(), storage);

        assert!(store.is_logged_in());
        assert_eq!(store.user_email(), Some("lifter@thepanther.in"));
        assert_eq!(store.access_token(), Some("token-abc"));
        // The restored token re-arms the default bearer header.
        assert!(api.has_bearer_token());
    }

    #[test]
    fn test_token_without_user_is_not_logged_in() {
        let dir = tempfile::tempdir().unwrap();
        let storage = StorageBridge::open(dir.path()).unwrap();
        storage.save(keys::TOKEN, "token-abc").unwrap();

        let api = ApiClient::new(&unreachable_config(dir.path())).unwrap();
        let store = AuthStore::load(api, storage);

        assert!(!store.is_logged_in());
    }

    #[test]
    fn test_logout_clears_state_and_persisted_keys() {
        let dir = tempfile::tempdir().unwrap();
        let storage = StorageBridge::open(dir.path()).unwrap();
        storage.save(keys::TOKEN, "token-abc").unwrap();
        storage
            .save(keys::USER, &serde_json::json!({"email": "a@b.c"}))
            .unwrap();

        let api = ApiClient::new(&unreachable_config(dir.path())).unwrap();
        let mut store = AuthStore::load(api.clone(), storage.clone());
        assert!(store.is_logged_in());

        store.logout();

        assert!(!store.is_logged_in());
        assert!(store.user_email().is_none());
        assert!(!storage.contains(keys::TOKEN));
        assert!(!storage.contains(keys::USER));
        assert!(!api.has_bearer_token());
    }

    #[tokio::test]
    async fn test_login_transport_failure_sets_fallback_error() {
        let (_dir, mut store) = setup();

        let ok = store.login("lifter@thepanther.in", "hunter2").await;

        assert!(!ok);
        assert!(!store.loading());
        assert_eq!(store.error(), Some("Login failed"));
        assert!(!store.is_logged_in());
    }

    #[tokio::test]
    async fn test_register_transport_failure_sets_fallback_error() {
        let (_dir, mut store) = setup();
        let request = RegisterRequest {
            email: Email::parse("new@thepanther.in").unwrap(),
            password: "hunter2".to_owned(),
            first_name: Some("New".to_owned()),
            phone: None,
        };

        let ok = store.register(&request).await;

        assert!(!ok);
        assert!(!store.loading());
        assert_eq!(store.error(), Some("Registration failed"));
    }

    #[test]
    fn test_user_profile_round_trips_unknown_fields() {
        let raw = serde_json::json!({
            "id": 3,
            "email": "a@b.c",
            "loyalty_tier": "gold"
        });
        let profile: UserProfile = serde_json::from_value(raw.clone()).unwrap();
        let back = serde_json::to_value(&profile).unwrap();
        assert_eq!(back.get("loyalty_tier"), raw.get("loyalty_tier"));
    }
}
