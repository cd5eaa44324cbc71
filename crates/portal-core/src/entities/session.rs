use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::{ChatMessage, UploadedDocument};
use crate::enums::ConversationState;

/// Persisted snapshot of a chat intake session.
///
/// `state` is whatever the server last reported. `document_history` lists
/// sent files newest first.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ChatSessionRecord {
    pub session_id: String,
    pub state: ConversationState,
    #[serde(default)]
    pub messages: Vec<ChatMessage>,
    #[serde(default)]
    pub document_history: Vec<UploadedDocument>,
}
