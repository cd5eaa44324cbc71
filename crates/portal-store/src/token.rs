//! Bearer token persistence.
//!
//! Priority on load: the `token` blob, then the `PORTAL_AUTH__TOKEN` env var.

use crate::error::StoreError;
use crate::local::{LocalStorage, keys};

pub const TOKEN_ENV_VAR: &str = "PORTAL_AUTH__TOKEN";

/// Where the active token came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenSource {
    File,
    Env,
}

impl TokenSource {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::File => "file",
            Self::Env => "env",
        }
    }
}

#[derive(Debug, Clone)]
pub struct TokenStore {
    storage: LocalStorage,
}

impl TokenStore {
    #[must_use]
    pub const fn new(storage: LocalStorage) -> Self {
        Self { storage }
    }

    /// # Errors
    ///
    /// Returns `StoreError::Validation` for a blank token, or a storage error.
    pub fn store(&self, token: &str) -> Result<(), StoreError> {
        let token = token.trim();
        if token.is_empty() {
            return Err(StoreError::Validation("token must not be empty".into()));
        }
        self.storage.set_json(keys::TOKEN, token)
    }

    #[must_use]
    pub fn load(&self) -> Option<String> {
        self.load_with_source().map(|(token, _)| token)
    }

    #[must_use]
    pub fn load_with_source(&self) -> Option<(String, TokenSource)> {
        match self.storage.get_json::<String>(keys::TOKEN) {
            Ok(Some(token)) if !token.is_empty() => return Some((token, TokenSource::File)),
            Ok(_) => {}
            Err(error) => tracing::warn!(%error, "ignoring unreadable token blob"),
        }
        std::env::var(TOKEN_ENV_VAR)
            .ok()
            .filter(|t| !t.is_empty())
            .map(|t| (t, TokenSource::Env))
    }

    /// # Errors
    ///
    /// Returns `StoreError::Io` if the token blob cannot be removed.
    pub fn clear(&self) -> Result<(), StoreError> {
        self.storage.remove_item(keys::TOKEN)
    }
}
