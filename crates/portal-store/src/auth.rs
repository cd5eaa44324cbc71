//! Mock QID/email login backed by the `msdf-user` blob.

use portal_core::entities::User;
use portal_core::ids::{PREFIX_USER, generate_id};

use crate::error::StoreError;
use crate::local::{LocalStorage, keys};

const DEMO_NAME_AR: &str = "مواطن تجريبي";
const DEMO_NAME_EN: &str = "Demo Citizen";

pub struct AuthStore {
    storage: LocalStorage,
}

impl AuthStore {
    #[must_use]
    pub const fn new(storage: LocalStorage) -> Self {
        Self { storage }
    }

    /// Log in with a QID and email. Both must be non-blank; no credential
    /// check is performed. The demo profile carries the supplied QID/email.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Validation` for blank input, or a storage error.
    pub fn login(&self, qid: &str, email: &str) -> Result<User, StoreError> {
        let (qid, email) = (qid.trim(), email.trim());
        if qid.is_empty() || email.is_empty() {
            return Err(StoreError::Validation(
                "QID and email are both required".into(),
            ));
        }
        let user = User {
            id: generate_id(PREFIX_USER),
            qid: qid.to_string(),
            email: email.to_string(),
            name_ar: DEMO_NAME_AR.to_string(),
            name_en: Some(DEMO_NAME_EN.to_string()),
            phone: None,
        };
        self.storage.set_json(keys::USER, &user)?;
        tracing::debug!(id = %user.id, "logged in");
        Ok(user)
    }

    /// # Errors
    ///
    /// Returns `StoreError::Io` if the user blob cannot be removed.
    pub fn logout(&self) -> Result<(), StoreError> {
        self.storage.remove_item(keys::USER)
    }

    /// # Errors
    ///
    /// Returns `StoreError::Json` if the stored user is corrupt.
    pub fn current_user(&self) -> Result<Option<User>, StoreError> {
        self.storage.get_json(keys::USER)
    }

    /// # Errors
    ///
    /// Returns `StoreError::Json` if the stored user is corrupt.
    pub fn is_authenticated(&self) -> Result<bool, StoreError> {
        Ok(self.current_user()?.is_some())
    }
}
