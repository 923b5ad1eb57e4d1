//! Unified error type for binaries driving the store layer.
//!
//! Library modules keep their own focused error enums; this type exists
//! so a front end (the CLI) can bubble any of them with `?`.

use thiserror::Error;

use crate::config::ConfigError;
use crate::services::api::ApiError;
use crate::services::checkout::CheckoutError;
use crate::storage::StorageError;

/// Application-level error for storefront front ends.
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration could not be loaded.
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    /// Persistence bridge write failed.
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// Backend API call failed.
    #[error("API error: {0}")]
    Api(#[from] ApiError),

    /// Checkout SDK failed to load.
    #[error("Checkout error: {0}")]
    Checkout(#[from] CheckoutError),

    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Invalid input from the caller.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Operation requires an authenticated session.
    #[error("Unauthorized: {0}")]
    Unauthorized(String),
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_error_display() {
        let err = AppError::NotFound("panther-unknown".to_owned());
        assert_eq!(err.to_string(), "Not found: panther-unknown");

        let err = AppError::Unauthorized("checkout requires login".to_owned());
        assert_eq!(err.to_string(), "Unauthorized: checkout requires login");
    }
}
