//! HTTP client for the Panther backend API.
//!
//! A thin wrapper over `reqwest`: base URL and timeout come from
//! configuration, and a shared bearer-token slot is consulted on every
//! request so services cloned from the same client pick up the session
//! header the moment the auth store installs it.

use std::sync::{Arc, RwLock};

use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::instrument;
use url::Url;

use crate::config::StorefrontConfig;

/// Errors that can occur when calling the backend API.
#[derive(Debug, Error)]
pub enum ApiError {
    /// HTTP transport failed (connect, timeout, TLS).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The API answered with a non-success status.
    #[error("API error: {status} - {detail}", detail = .server_message.as_deref().unwrap_or("(no detail)"))]
    Api {
        status: u16,
        /// Human-readable message from the response's `error` field, when
        /// the body carried one.
        server_message: Option<String>,
    },

    /// A relative endpoint path did not join onto the base URL.
    #[error("invalid endpoint path {0}: {1}")]
    Endpoint(String, url::ParseError),

    /// The success response body was not the expected JSON shape.
    #[error("response parse error: {0}")]
    Parse(String),
}

impl ApiError {
    /// The server-provided error message, if the failure response had one.
    #[must_use]
    pub fn server_message(&self) -> Option<&str> {
        match self {
            Self::Api { server_message, .. } => server_message.as_deref(),
            _ => None,
        }
    }
}

/// Client for the backend API.
///
/// Cheaply cloneable; all clones share the same connection pool and
/// bearer-token slot.
#[derive(Clone)]
pub struct ApiClient {
    inner: Arc<ApiClientInner>,
}

struct ApiClientInner {
    client: reqwest::Client,
    base_url: Url,
    bearer: RwLock<Option<SecretString>>,
}

impl ApiClient {
    /// Create a new API client from configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to build.
    pub fn new(config: &StorefrontConfig) -> Result<Self, ApiError> {
        let client = reqwest::Client::builder()
            .timeout(config.api_timeout)
            .build()?;

        Ok(Self {
            inner: Arc::new(ApiClientInner {
                client,
                base_url: config.api_url.clone(),
                bearer: RwLock::new(None),
            }),
        })
    }

    /// Install the default Authorization bearer token used by subsequent
    /// requests from every clone of this client.
    pub fn set_bearer_token(&self, token: SecretString) {
        *self
            .inner
            .bearer
            .write()
            .unwrap_or_else(std::sync::PoisonError::into_inner) = Some(token);
    }

    /// Remove the default Authorization header.
    pub fn clear_bearer_token(&self) {
        *self
            .inner
            .bearer
            .write()
            .unwrap_or_else(std::sync::PoisonError::into_inner) = None;
    }

    /// Whether a bearer token is currently installed.
    #[must_use]
    pub fn has_bearer_token(&self) -> bool {
        self.inner
            .bearer
            .read()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .is_some()
    }

    /// POST a JSON body and decode a JSON response.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure, non-success status, or a
    /// response body that does not decode as `T`.
    #[instrument(skip(self, body))]
    pub async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let request = self
            .authorize(self.inner.client.post(self.endpoint(path)?))
            .json(body);
        Self::decode(request.send().await?).await
    }

    /// POST a JSON body, checking only for success and discarding the
    /// response body.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or non-success status.
    #[instrument(skip(self, body))]
    pub async fn post_no_content<B>(&self, path: &str, body: &B) -> Result<(), ApiError>
    where
        B: Serialize + ?Sized,
    {
        let request = self
            .authorize(self.inner.client.post(self.endpoint(path)?))
            .json(body);
        let response = request.send().await?;
        let status = response.status();
        if status.is_success() {
            return Ok(());
        }
        let text = response.text().await.unwrap_or_default();
        Err(Self::failure(status.as_u16(), &text))
    }

    /// GET and decode a JSON response.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure, non-success status, or a
    /// response body that does not decode as `T`.
    #[instrument(skip(self))]
    pub async fn get_json<T>(&self, path: &str) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
    {
        let request = self.authorize(self.inner.client.get(self.endpoint(path)?));
        Self::decode(request.send().await?).await
    }

    fn endpoint(&self, path: &str) -> Result<Url, ApiError> {
        self.inner
            .base_url
            .join(path)
            .map_err(|e| ApiError::Endpoint(path.to_owned(), e))
    }

    fn authorize(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        let bearer = self
            .inner
            .bearer
            .read()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        match bearer.as_ref() {
            Some(token) => request.bearer_auth(token.expose_secret()),
            None => request,
        }
    }

    async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ApiError> {
        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            return Err(Self::failure(status.as_u16(), &text));
        }

        serde_json::from_str(&text).map_err(|e| ApiError::Parse(e.to_string()))
    }

    fn failure(status: u16, body: &str) -> ApiError {
        ApiError::Api {
            status,
            server_message: parse_server_message(body),
        }
    }
}

/// Pull a human-readable message out of a failure body of the shape
/// `{"error": "..."}`. Anything else yields `None`.
fn parse_server_message(body: &str) -> Option<String> {
    #[derive(serde::Deserialize)]
    struct ErrorBody {
        error: Option<String>,
    }

    serde_json::from_str::<ErrorBody>(body).ok()?.error
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use std::time::Duration;

    fn config() -> StorefrontConfig {
        StorefrontConfig {
            api_url: Url::parse("http://localhost:8000/api/").unwrap(),
            data_dir: PathBuf::from(".panther"),
            api_timeout: Duration::from_secs(10),
            checkout_key_id: "rzp_test_xxxxxx".to_owned(),
        }
    }

    #[test]
    fn test_endpoint_joins_under_base() {
        let client = ApiClient::new(&config()).unwrap();
        let url = client.endpoint("logistics/pickrr/track/PKR1/").unwrap();
        assert_eq!(
            url.as_str(),
            "http://localhost:8000/api/logistics/pickrr/track/PKR1/"
        );
    }

    #[test]
    fn test_bearer_token_slot() {
        let client = ApiClient::new(&config()).unwrap();
        assert!(!client.has_bearer_token());

        client.set_bearer_token(SecretString::from("token-123"));
        assert!(client.has_bearer_token());

        // Clones share the same slot.
        let clone = client.clone();
        assert!(clone.has_bearer_token());

        clone.clear_bearer_token();
        assert!(!client.has_bearer_token());
    }

    #[test]
    fn test_parse_server_message() {
        assert_eq!(
            parse_server_message(r#"{"error": "Invalid credentials"}"#).as_deref(),
            Some("Invalid credentials")
        );
        assert!(parse_server_message(r#"{"detail": "other shape"}"#).is_none());
        assert!(parse_server_message("<html>gateway timeout</html>").is_none());
    }

    #[test]
    fn test_api_error_display() {
        let err = ApiError::Api {
            status: 401,
            server_message: Some("Invalid credentials".to_owned()),
        };
        assert_eq!(err.to_string(), "API error: 401 - Invalid credentials");

        let err = ApiError::Api {
            status: 502,
            server_message: None,
        };
        assert_eq!(err.to_string(), "API error: 502 - (no detail)");
    }
}
