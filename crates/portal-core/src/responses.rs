//! CLI response types returned as JSON by `portal` commands.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::{Case, ChatMessage, UploadedDocument, User};
use crate::enums::{ConversationState, UiStage};

/// Response from `portal case list`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct CaseListResponse {
    pub cases: Vec<Case>,
    pub total: u32,
}

/// Response from `portal chat send` and `portal chat show`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ChatExchangeResponse {
    pub session_id: String,
    pub state: ConversationState,
    pub stage: UiStage,
    pub messages: Vec<ChatMessage>,
    pub document_history: Vec<UploadedDocument>,
    /// Welcome text, present only before the first exchange.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub greeting: Option<String>,
}

/// Response from `portal auth status`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct AuthStatusResponse {
    pub authenticated: bool,
    pub user: Option<User>,
    pub has_token: bool,
    /// `file` or `env` when a token is present.
    pub token_source: Option<String>,
}

/// Response from `portal chat reset` and `portal auth logout`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ActionResponse {
    pub ok: bool,
    pub detail: String,
}
