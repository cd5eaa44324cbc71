//! Chat intake transport.
//!
//! One exchange = one multipart `POST` carrying `sessionId`, `Message`, and a
//! repeated `Attachments` file part. The reply is `{sessionId, state,
//! message}`; the state is server-authoritative and mirrored as-is.

use std::future::Future;
use std::path::Path;

use reqwest::multipart::{Form, Part};
use serde::Deserialize;

use portal_core::enums::ConversationState;

use crate::error::ClientError;
use crate::{ApiClient, RequestOptions};

pub const FIELD_SESSION_ID: &str = "sessionId";
pub const FIELD_MESSAGE: &str = "Message";
pub const FIELD_ATTACHMENTS: &str = "Attachments";

/// A file to upload with a chat message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatAttachment {
    pub file_name: String,
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

impl ChatAttachment {
    /// Read a file and guess its MIME type from the extension.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Attachment`] if the file cannot be read.
    pub fn from_path(path: &Path) -> Result<Self, ClientError> {
        let bytes = std::fs::read(path)
            .map_err(|e| ClientError::Attachment(format!("read {}: {e}", path.display())))?;
        let file_name = path
            .file_name()
            .map_or_else(|| "attachment".to_string(), |n| n.to_string_lossy().into_owned());
        let mime_type = mime_guess::from_path(path)
            .first_or_octet_stream()
            .essence_str()
            .to_string();
        Ok(Self {
            file_name,
            mime_type,
            bytes,
        })
    }

    #[must_use]
    pub fn size(&self) -> u64 {
        self.bytes.len() as u64
    }

    fn into_part(self) -> Result<Part, ClientError> {
        Part::bytes(self.bytes)
            .file_name(self.file_name)
            .mime_str(&self.mime_type)
            .map_err(|e| ClientError::Attachment(format!("invalid MIME type: {e}")))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatRequest {
    pub session_id: String,
    pub message: String,
    pub attachments: Vec<ChatAttachment>,
}

impl ChatRequest {
    /// Build the multipart body.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Attachment`] if a part cannot be encoded.
    pub fn into_form(self) -> Result<Form, ClientError> {
        let mut form = Form::new()
            .text(FIELD_SESSION_ID, self.session_id)
            .text(FIELD_MESSAGE, self.message);
        for attachment in self.attachments {
            form = form.part(FIELD_ATTACHMENTS, attachment.into_part()?);
        }
        Ok(form)
    }
}

/// Parsed chat reply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatReply {
    /// May be empty when the server omits it.
    pub session_id: String,
    pub state: ConversationState,
    pub message: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawChatReply {
    #[serde(default)]
    session_id: Option<String>,
    #[serde(default)]
    state: Option<String>,
    #[serde(default)]
    message: Option<serde_json::Value>,
}

impl From<RawChatReply> for ChatReply {
    fn from(raw: RawChatReply) -> Self {
        let state = raw.state.as_deref().map_or_else(ConversationState::default, |s| {
            if !ConversationState::is_known(s) {
                tracing::warn!(state = s, "unknown conversation state; showing greeting");
            }
            ConversationState::from_wire(s)
        });
        let message = match raw.message {
            Some(serde_json::Value::String(text)) => text,
            Some(other) => other.to_string(),
            None => String::new(),
        };
        Self {
            session_id: raw.session_id.unwrap_or_default(),
            state,
            message,
        }
    }
}

/// Parse a chat reply body leniently.
///
/// # Errors
///
/// Returns [`ClientError::Parse`] if the body is not a JSON object.
pub fn parse_reply(body: &str) -> Result<ChatReply, ClientError> {
    serde_json::from_str::<RawChatReply>(body)
        .map(ChatReply::from)
        .map_err(|e| ClientError::Parse(format!("chat response: {e}")))
}

/// Sends one chat exchange to the backend.
pub trait ChatTransport {
    fn send_message(
        &self,
        request: ChatRequest,
    ) -> impl Future<Output = Result<ChatReply, ClientError>> + Send;
}

impl ChatTransport for ApiClient {
    async fn send_message(&self, request: ChatRequest) -> Result<ChatReply, ClientError> {
        let url = self.config().chat_url()?;
        tracing::debug!(
            %url,
            session = %request.session_id,
            attachments = request.attachments.len(),
            "sending chat message"
        );
        let form = request.into_form()?;
        let builder = self
            .post(
                &url,
                RequestOptions {
                    explicit_content_type: true,
                    ..RequestOptions::default()
                },
            )
            .multipart(form);
        let resp = self.send(builder).await?;
        let body = resp.text().await?;
        parse_reply(&body)
    }
}
