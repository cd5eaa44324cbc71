//! Chat session snapshots under `msdf-chat-session`.

use portal_core::entities::ChatSessionRecord;

use crate::error::StoreError;
use crate::local::{LocalStorage, keys};

pub struct SessionStore {
    storage: LocalStorage,
}

impl SessionStore {
    #[must_use]
    pub const fn new(storage: LocalStorage) -> Self {
        Self { storage }
    }

    /// # Errors
    ///
    /// Returns `StoreError::Json` if the snapshot is corrupt.
    pub fn load(&self) -> Result<Option<ChatSessionRecord>, StoreError> {
        self.storage.get_json(keys::CHAT_SESSION)
    }

    /// # Errors
    ///
    /// Returns a storage error if the snapshot cannot be written.
    pub fn save(&self, record: &ChatSessionRecord) -> Result<(), StoreError> {
        self.storage.set_json(keys::CHAT_SESSION, record)
    }

    /// # Errors
    ///
    /// Returns `StoreError::Io` if the snapshot cannot be removed.
    pub fn clear(&self) -> Result<(), StoreError> {
        self.storage.remove_item(keys::CHAT_SESSION)
    }
}
