//! Case repository: creation, status timeline, messages, and documents.
//!
//! The whole collection lives in memory and is rewritten to the `msdf-cases`
//! blob after every mutation. New cases are inserted at the front. A failed
//! write leaves the in-memory collection as it was before the call. The
//! selected case id is kept under `msdf-current-case`.

use chrono::{DateTime, Utc};

use portal_core::entities::{
    Case, ChatMessage, NewDocument, NewMessage, StatusUpdate, UploadedDocument,
};
use portal_core::enums::CaseStatus;
use portal_core::i18n::CASE_RECEIVED_NOTE;
use portal_core::ids::{PREFIX_CASE, PREFIX_DOCUMENT, PREFIX_MESSAGE, generate_case_number, generate_id};

use crate::error::StoreError;
use crate::local::{LocalStorage, keys};

/// Owner recorded on cases created without a logged-in user.
pub const ANONYMOUS_USER_ID: &str = "user-1";

const DEFAULT_CURRENCY: &str = "QAR";

/// Dashboard filter. Empty filter matches every case.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CaseFilter {
    pub status: Option<CaseStatus>,
    pub search: Option<String>,
}

impl CaseFilter {
    #[must_use]
    pub fn matches(&self, case: &Case) -> bool {
        let status_ok = self.status.is_none_or(|status| case.status == status);
        let search_ok = self
            .search
            .as_deref()
            .filter(|q| !q.trim().is_empty())
            .is_none_or(|q| case.matches_search(q.trim()));
        status_ok && search_ok
    }
}

pub struct CaseStore {
    storage: LocalStorage,
    cases: Vec<Case>,
    current: Option<String>,
    user_id: String,
}

impl CaseStore {
    /// Load the collection from storage, seeding an empty one on first use.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Json` if the stored collection is corrupt.
    pub fn open(storage: LocalStorage) -> Result<Self, StoreError> {
        let cases = storage.get_json::<Vec<Case>>(keys::CASES)?.unwrap_or_default();
        let current = storage
            .get_json::<String>(keys::CURRENT_CASE)?
            .filter(|id| cases.iter().any(|c| &c.id == id));
        tracing::debug!(count = cases.len(), current = ?current, "loaded cases");
        Ok(Self {
            storage,
            cases,
            current,
            user_id: ANONYMOUS_USER_ID.to_string(),
        })
    }

    /// Owner for cases created from now on.
    #[must_use]
    pub fn with_user_id(mut self, user_id: impl Into<String>) -> Self {
        self.user_id = user_id.into();
        self
    }

    fn persist(&self) -> Result<(), StoreError> {
        self.storage.set_json(keys::CASES, &self.cases)
    }

    fn persist_current(&self) -> Result<(), StoreError> {
        match &self.current {
            Some(id) => self.storage.set_json(keys::CURRENT_CASE, id),
            None => self.storage.remove_item(keys::CURRENT_CASE),
        }
    }

    /// Apply `change` to a copy of the case, swap it in, and persist. The
    /// original is restored if the write fails.
    fn update_case<R>(
        &mut self,
        case_id: &str,
        change: impl FnOnce(&mut Case) -> R,
    ) -> Result<R, StoreError> {
        let index = self
            .cases
            .iter()
            .position(|c| c.id == case_id)
            .ok_or_else(|| StoreError::case_not_found(case_id))?;

        let mut updated = self.cases[index].clone();
        let output = change(&mut updated);
        let previous = std::mem::replace(&mut self.cases[index], updated);

        if let Err(error) = self.persist() {
            self.cases[index] = previous;
            return Err(error);
        }
        Ok(output)
    }

    /// Draw case numbers from `generate` until one is not already taken.
    fn unique_case_number(&self, mut generate: impl FnMut() -> String) -> String {
        loop {
            let number = generate();
            if self.cases.iter().all(|c| c.case_number != number) {
                return number;
            }
            tracing::debug!(%number, "case number collision; drawing again");
        }
    }

    /// Create a `new` case with a single "request received" history entry.
    /// The case becomes the current case.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Validation` for a blank service type, or a storage
    /// error if persisting fails.
    pub fn create_case(
        &mut self,
        service_type: &str,
        service_name_ar: &str,
    ) -> Result<Case, StoreError> {
        if service_type.trim().is_empty() {
            return Err(StoreError::Validation("service type must not be empty".into()));
        }
        let now = Utc::now();
        let case = Case {
            id: generate_id(PREFIX_CASE),
            case_number: self.unique_case_number(generate_case_number),
            service_type: service_type.to_string(),
            service_name_ar: service_name_ar.to_string(),
            submission_date: now.date_naive(),
            status: CaseStatus::New,
            estimated_price: 0.0,
            currency: DEFAULT_CURRENCY.to_string(),
            user_id: self.user_id.clone(),
            documents: Vec::new(),
            messages: Vec::new(),
            status_history: vec![StatusUpdate {
                status: CaseStatus::New,
                timestamp: now,
                note: Some(CASE_RECEIVED_NOTE.to_string()),
            }],
        };

        self.cases.insert(0, case.clone());
        if let Err(error) = self.persist() {
            self.cases.remove(0);
            return Err(error);
        }
        self.current = Some(case.id.clone());
        self.persist_current()?;
        tracing::debug!(id = %case.id, number = %case.case_number, "created case");
        Ok(case)
    }

    /// Append a history entry and set `status`. Any transition is accepted;
    /// moves off the forward lifecycle are logged.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` for an unknown id.
    pub fn update_case_status(
        &mut self,
        case_id: &str,
        status: CaseStatus,
        note: Option<&str>,
    ) -> Result<Case, StoreError> {
        self.update_case(case_id, |case| {
            if !case.status.can_transition_to(status) {
                tracing::warn!(
                    case = %case.case_number,
                    from = %case.status,
                    to = %status,
                    "status change outside the forward lifecycle"
                );
            }
            let timestamp = next_timestamp(case.status_history.last().map(|h| h.timestamp));
            case.status_history.push(StatusUpdate {
                status,
                timestamp,
                note: note.map(String::from),
            });
            case.status = status;
            case.clone()
        })
    }

    /// # Errors
    ///
    /// Returns `StoreError::NotFound` for an unknown id.
    pub fn add_message(
        &mut self,
        case_id: &str,
        message: NewMessage,
    ) -> Result<ChatMessage, StoreError> {
        let message = ChatMessage {
            id: generate_id(PREFIX_MESSAGE),
            role: message.role,
            content: message.content,
            timestamp: Utc::now(),
            attachments: message.attachments,
        };
        self.update_case(case_id, |case| case.messages.push(message.clone()))?;
        Ok(message)
    }

    /// # Errors
    ///
    /// Returns `StoreError::NotFound` for an unknown id.
    pub fn add_document(
        &mut self,
        case_id: &str,
        document: NewDocument,
    ) -> Result<UploadedDocument, StoreError> {
        let document = UploadedDocument {
            id: generate_id(PREFIX_DOCUMENT),
            name: document.name,
            mime_type: document.mime_type,
            size: document.size,
            url: document.url,
            uploaded_at: Utc::now(),
        };
        self.update_case(case_id, |case| case.documents.push(document.clone()))?;
        Ok(document)
    }

    #[must_use]
    pub fn get_case(&self, case_id: &str) -> Option<&Case> {
        self.cases.iter().find(|c| c.id == case_id)
    }

    /// Lookup by id or by case number.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` when neither matches.
    pub fn require_case(&self, id_or_number: &str) -> Result<&Case, StoreError> {
        self.cases
            .iter()
            .find(|c| c.id == id_or_number || c.case_number == id_or_number)
            .ok_or_else(|| StoreError::case_not_found(id_or_number))
    }

    /// All cases, newest first.
    #[must_use]
    pub fn list(&self) -> &[Case] {
        &self.cases
    }

    #[must_use]
    pub fn filter(&self, filter: &CaseFilter) -> Vec<&Case> {
        self.cases.iter().filter(|c| filter.matches(c)).collect()
    }

    #[must_use]
    pub fn current_case(&self) -> Option<&Case> {
        self.current.as_deref().and_then(|id| self.get_case(id))
    }

    /// Select the current case by id or number, or clear the selection with
    /// `None`. The selection is persisted.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` for an unknown id, or a storage error.
    pub fn set_current_case(&mut self, case_id: Option<&str>) -> Result<(), StoreError> {
        let selected = match case_id {
            Some(id) => Some(self.require_case(id)?.id.clone()),
            None => None,
        };
        let previous = std::mem::replace(&mut self.current, selected);
        if let Err(error) = self.persist_current() {
            self.current = previous;
            return Err(error);
        }
        Ok(())
    }
}

/// `now`, but never earlier than the previous history entry.
fn next_timestamp(previous: Option<DateTime<Utc>>) -> DateTime<Utc> {
    let now = Utc::now();
    previous.map_or(now, |prev| now.max(prev))
}
