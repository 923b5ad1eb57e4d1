//! Persistent key-value bridge.
//!
//! Stores serialize their state through this bridge, one JSON file per
//! well-known key under the configured data directory. The bridge has no
//! ownership of the data and no expiry: it only serializes on the way in
//! and deserializes on the way out.
//!
//! A missing or unreadable file is not an error - `load` hands back `None`
//! and the calling store falls back to its default. Write failures (disk
//! full, permissions) do surface, because losing a mutation silently would
//! let in-memory and persisted state drift apart.

use std::fs;
use std::io;
use std::path::PathBuf;

use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

/// Well-known persistence keys.
pub mod keys {
    /// Cart line items (JSON array).
    pub const CART: &str = "panther_cart";

    /// Session access token (JSON string).
    pub const TOKEN: &str = "panther_token";

    /// Session user identity (JSON object).
    pub const USER: &str = "panther_user";

    /// Theme preference (`"dark"` | `"light"`).
    pub const THEME: &str = "panther_theme";
}

/// Errors that can occur when writing through the bridge.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Filesystem operation failed.
    #[error("storage I/O error: {0}")]
    Io(#[from] io::Error),

    /// Value could not be serialized to JSON.
    #[error("storage serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Bridge over a directory of JSON files, one per key.
///
/// Cheap to clone; every store holds its own clone.
#[derive(Debug, Clone)]
pub struct StorageBridge {
    dir: PathBuf,
}

impl StorageBridge {
    /// Open a bridge rooted at `dir`, creating the directory if needed.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created.
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self, StorageError> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    /// Load and deserialize the value stored under `key`.
    ///
    /// Returns `None` when the key is absent or the stored text does not
    /// parse; parse failures are logged and the corrupt value is treated
    /// as missing so the caller can substitute a default.
    #[must_use]
    pub fn load<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let text = fs::read_to_string(self.path_for(key)).ok()?;
        match serde_json::from_str(&text) {
            Ok(value) => Some(value),
            Err(err) => {
                tracing::warn!(key, error = %err, "discarding unreadable persisted value");
                None
            }
        }
    }

    /// Serialize `value` to JSON and store it under `key`, overwriting any
    /// prior value.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the filesystem write fails.
    /// Callers do not retry; a failed write is surfaced to whoever asked
    /// for the mutation.
    pub fn save<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> Result<(), StorageError> {
        let text = serde_json::to_string(value)?;
        fs::write(self.path_for(key), text)?;
        Ok(())
    }

    /// Delete the value stored under `key`. A missing key is not an error.
    pub fn remove(&self, key: &str) {
        if let Err(err) = fs::remove_file(self.path_for(key))
            && err.kind() != io::ErrorKind::NotFound
        {
            tracing::warn!(key, error = %err, "failed to remove persisted value");
        }
    }

    /// Whether a value is currently stored under `key`.
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.path_for(key).exists()
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}
