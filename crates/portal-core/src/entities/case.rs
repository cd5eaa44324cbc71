use chrono::{DateTime, NaiveDate, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::{ChatMessage, UploadedDocument};
use crate::enums::CaseStatus;

/// A citizen's service request.
///
/// `status` always equals the status of the last `status_history` entry.
/// History is append-only and ordered by timestamp.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Case {
    pub id: String,
    pub case_number: String,
    pub service_type: String,
    pub service_name_ar: String,
    pub submission_date: NaiveDate,
    pub status: CaseStatus,
    pub estimated_price: f64,
    pub currency: String,
    pub user_id: String,
    pub documents: Vec<UploadedDocument>,
    pub messages: Vec<ChatMessage>,
    pub status_history: Vec<StatusUpdate>,
}

impl Case {
    /// Status recorded by the most recent history entry.
    #[must_use]
    pub fn latest_status(&self) -> Option<CaseStatus> {
        self.status_history.last().map(|entry| entry.status)
    }

    /// Whether `status` agrees with the history log.
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        self.latest_status() == Some(self.status)
            && self
                .status_history
                .windows(2)
                .all(|pair| pair[0].timestamp <= pair[1].timestamp)
    }

    /// Case-insensitive case number match, or substring match on the Arabic
    /// service name (Arabic has no case to fold).
    #[must_use]
    pub fn matches_search(&self, query: &str) -> bool {
        let needle = query.to_lowercase();
        self.case_number.to_lowercase().contains(&needle) || self.service_name_ar.contains(query)
    }
}

/// One entry in a case's status timeline.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct StatusUpdate {
    pub status: CaseStatus,
    pub timestamp: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}
