//! Theme store.
//!
//! A single dark/light flag persisted as a two-valued string. "Applying"
//! the theme resolves the style variables the view layer reads; `init`
//! applies without toggling and is meant to run once at startup so the
//! first paint already matches the persisted preference.

use serde::{Deserialize, Serialize};

use crate::storage::{StorageBridge, StorageError, keys};

/// Persisted theme preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Dark,
    Light,
}

impl ThemeMode {
    /// The persisted string form.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }
}

/// Resolved style variables for the current mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemeVariables {
    pub text_primary: &'static str,
    pub surface: &'static str,
}

const DARK_VARIABLES: ThemeVariables = ThemeVariables {
    text_primary: "#f5f5f5",
    surface: "#0a0a0a",
};

const LIGHT_VARIABLES: ThemeVariables = ThemeVariables {
    text_primary: "#1a1a1a",
    surface: "#ffffff",
};

/// Theme preference container.
#[derive(Debug)]
pub struct ThemeStore {
    dark_mode: bool,
    applied: Option<ThemeVariables>,
    storage: StorageBridge,
}

impl ThemeStore {
    /// Restore the persisted preference. Anything other than an explicit
    /// `"light"` (including an absent or unreadable value) means dark.
    #[must_use]
    pub fn load(storage: StorageBridge) -> Self {
        let dark_mode = storage
            .load::<String>(keys::THEME)
            .is_none_or(|stored| stored != "light");
        Self {
            dark_mode,
            applied: None,
            storage,
        }
    }

    /// Flip the mode, persist it, and re-apply the style variables.
    ///
    /// # Errors
    ///
    /// Returns an error if persisting the preference fails.
    pub fn toggle(&mut self) -> Result<(), StorageError> {
        self.dark_mode = !self.dark_mode;
        self.storage.save(keys::THEME, self.mode().as_str())?;
        self.apply();
        Ok(())
    }

    /// Apply the current mode's variables without toggling. Run once at
    /// startup, before the first read of [`Self::variables`].
    pub fn init(&mut self) {
        self.apply();
    }

    /// The current mode.
    #[must_use]
    pub const fn mode(&self) -> ThemeMode {
        if self.dark_mode {
            ThemeMode::Dark
        } else {
            ThemeMode::Light
        }
    }

    /// Whether dark mode is active.
    #[must_use]
    pub const fn is_dark_mode(&self) -> bool {
        self.dark_mode
    }

    /// The applied style variables; `None` until [`Self::init`] or
    /// [`Self::toggle`] has run.
    #[must_use]
    pub const fn variables(&self) -> Option<&ThemeVariables> {
        self.applied.as_ref()
    }

    fn apply(&mut self) {
        let variables = if self.dark_mode {
            DARK_VARIABLES
        } else {
            LIGHT_VARIABLES
        };
        tracing::debug!(mode = self.mode().as_str(), "applying theme variables");
        self.applied = Some(variables);
    }
}
