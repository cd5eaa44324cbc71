//! Chat session controller.

use std::path::Path;

use chrono::Utc;

use portal_client::{ChatRequest, ChatTransport};
use portal_core::entities::{ChatMessage, ChatSessionRecord, UploadedDocument};
use portal_core::enums::{ConversationState, Language, MessageRole, UiStage};
use portal_core::i18n;
use portal_core::ids::{PREFIX_MESSAGE, generate_id, generate_session_id};
use portal_store::SessionStore;

use crate::attachments::PendingAttachment;
use crate::error::ChatError;

/// Result of [`ChatSession::send`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SendOutcome {
    /// Blank text and nothing attached; nothing happened.
    Skipped,
    /// The backend replied and the agent message was appended.
    Replied,
}

pub struct ChatSession<T> {
    transport: T,
    session_id: String,
    state: ConversationState,
    messages: Vec<ChatMessage>,
    pending: Vec<PendingAttachment>,
    document_history: Vec<UploadedDocument>,
    typing: bool,
}

impl<T: ChatTransport> ChatSession<T> {
    /// Start a fresh session with a new random session id.
    pub fn new(transport: T) -> Self {
        Self::from_record(transport, ChatSessionRecord {
            session_id: generate_session_id(),
            ..ChatSessionRecord::default()
        })
    }

    /// Resume from a persisted snapshot. Pending attachments are never
    /// persisted, so a resumed session starts with none.
    pub fn from_record(transport: T, record: ChatSessionRecord) -> Self {
        Self {
            transport,
            session_id: record.session_id,
            state: record.state,
            messages: record.messages,
            pending: Vec::new(),
            document_history: record.document_history,
            typing: false,
        }
    }

    /// Resume the stored session, or start a new one.
    ///
    /// # Errors
    ///
    /// Returns [`ChatError::Store`] if the snapshot is unreadable.
    pub fn resume(transport: T, store: &SessionStore) -> Result<Self, ChatError> {
        Ok(match store.load()? {
            Some(record) => Self::from_record(transport, record),
            None => Self::new(transport),
        })
    }

    #[must_use]
    pub fn to_record(&self) -> ChatSessionRecord {
        ChatSessionRecord {
            session_id: self.session_id.clone(),
            state: self.state,
            messages: self.messages.clone(),
            document_history: self.document_history.clone(),
        }
    }

    /// # Errors
    ///
    /// Returns [`ChatError::Store`] if the snapshot cannot be written.
    pub fn save(&self, store: &SessionStore) -> Result<(), ChatError> {
        store.save(&self.to_record())?;
        Ok(())
    }

    pub fn session_id(&self) -> &str {
        &self.session_id
    }

    pub const fn state(&self) -> ConversationState {
        self.state
    }

    pub const fn stage(&self) -> UiStage {
        self.state.ui_stage()
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    /// Sent documents, newest first.
    pub fn document_history(&self) -> &[UploadedDocument] {
        &self.document_history
    }

    pub fn pending(&self) -> impl Iterator<Item = &UploadedDocument> {
        self.pending.iter().map(|p| &p.document)
    }

    pub const fn is_typing(&self) -> bool {
        self.typing
    }

    /// Localized welcome, shown only before the first exchange.
    pub fn greeting(&self, language: Language) -> Option<&'static str> {
        self.messages.is_empty().then(|| i18n::greeting(language))
    }

    /// Queue a file for the next message.
    ///
    /// # Errors
    ///
    /// Returns [`ChatError::UnsupportedType`], [`ChatError::TooLarge`], or
    /// [`ChatError::Attachment`] if the file cannot be read.
    pub fn attach(&mut self, path: &Path) -> Result<&UploadedDocument, ChatError> {
        let pending = PendingAttachment::from_path(path)?;
        tracing::debug!(name = %pending.document.name, size = pending.document.size, "attached");
        self.pending.push(pending);
        Ok(&self.pending[self.pending.len() - 1].document)
    }

    /// Drop an unsent attachment.
    ///
    /// # Errors
    ///
    /// Returns [`ChatError::NoSuchAttachment`] for an out-of-range index.
    pub fn remove_attachment(&mut self, index: usize) -> Result<UploadedDocument, ChatError> {
        if index >= self.pending.len() {
            return Err(ChatError::NoSuchAttachment(index));
        }
        Ok(self.pending.remove(index).document)
    }

    /// Send `text` plus any pending attachments.
    ///
    /// The user message is appended and the pending list cleared before the
    /// request goes out. On failure the user message stays, no agent message
    /// is added, and state and session id are unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`ChatError::Exchange`] if the backend call fails.
    pub async fn send(&mut self, text: &str) -> Result<SendOutcome, ChatError> {
        if text.trim().is_empty() && self.pending.is_empty() {
            return Ok(SendOutcome::Skipped);
        }

        let (documents, payloads): (Vec<_>, Vec<_>) = std::mem::take(&mut self.pending)
            .into_iter()
            .map(|p| (p.document, p.payload))
            .unzip();

        self.messages.push(ChatMessage {
            id: generate_id(PREFIX_MESSAGE),
            role: MessageRole::User,
            content: text.to_string(),
            timestamp: Utc::now(),
            attachments: documents.clone(),
        });

        let request = ChatRequest {
            session_id: self.session_id.clone(),
            message: text.to_string(),
            attachments: payloads,
        };

        self.typing = true;
        let result = self.transport.send_message(request).await;
        self.typing = false;

        let reply = match result {
            Ok(reply) => reply,
            Err(error) => {
                tracing::error!(%error, session = %self.session_id, "chat exchange failed");
                return Err(error.into());
            }
        };

        if !reply.session_id.is_empty() && reply.session_id != self.session_id {
            tracing::debug!(old = %self.session_id, new = %reply.session_id, "server reassigned session");
            self.session_id = reply.session_id;
        }
        self.state = reply.state;
        self.messages.push(ChatMessage {
            id: generate_id(PREFIX_MESSAGE),
            role: MessageRole::Agent,
            content: reply.message,
            timestamp: Utc::now(),
            attachments: Vec::new(),
        });
        let mut history = documents;
        history.append(&mut self.document_history);
        self.document_history = history;

        Ok(SendOutcome::Replied)
    }

    /// Forget the conversation and start over with a new session id.
    pub fn reset(&mut self) {
        self.session_id = generate_session_id();
        self.state = ConversationState::default();
        self.messages.clear();
        self.pending.clear();
        self.document_history.clear();
        self.typing = false;
    }
}

#[cfg(test)]
mod tests {
    use std::future::Future;
    use std::sync::Mutex;

    use pretty_assertions::assert_eq;
    use portal_client::{ChatReply, ClientError};

    use super::*;
    use crate::attachments::MAX_ATTACHMENT_BYTES;

    /// Replies with a fixed state, or fails every call.
    struct FakeTransport {
        reply: Option<ChatReply>,
        seen: Mutex<Vec<ChatRequest>>,
    }

    impl FakeTransport {
        fn replying(state: ConversationState, message: &str) -> Self {
            Self {
                reply: Some(ChatReply {
                    session_id: String::new(),
                    state,
                    message: message.to_string(),
                }),
                seen: Mutex::new(Vec::new()),
            }
        }

        fn failing() -> Self {
            Self {
                reply: None,
                seen: Mutex::new(Vec::new()),
            }
        }
    }

    impl ChatTransport for FakeTransport {
        fn send_message(
            &self,
            request: ChatRequest,
        ) -> impl Future<Output = Result<ChatReply, ClientError>> + Send {
            self.seen.lock().unwrap().push(request);
            let result = self.reply.clone().ok_or(ClientError::Api {
                status: 502,
                message: "bad gateway".into(),
            });
            async move { result }
        }
    }

    fn write_file(dir: &tempfile::TempDir, name: &str, bytes: &[u8]) -> std::path::PathBuf {
        let path = dir.path().join(name);
        std::fs::write(&path, bytes).unwrap();
        path
    }

    #[tokio::test]
    async fn completed_reply_maps_to_complete_stage() {
        let mut session =
            ChatSession::new(FakeTransport::replying(ConversationState::Completed, "done"));
        assert_eq!(session.stage(), UiStage::Greeting);

        let outcome = session.send("confirm").await.unwrap();
        assert_eq!(outcome, SendOutcome::Replied);
        assert_eq!(session.state(), ConversationState::Completed);
        assert_eq!(session.stage(), UiStage::Complete);
        assert_eq!(session.stage().as_str(), "complete");
        assert!(!session.is_typing());

        let roles: Vec<MessageRole> = session.messages().iter().map(|m| m.role).collect();
        assert_eq!(roles, vec![MessageRole::User, MessageRole::Agent]);
        assert_eq!(session.messages()[1].content, "done");
    }

    #[tokio::test]
    async fn failed_exchange_keeps_user_message_only() {
        let mut session = ChatSession::new(FakeTransport::failing());
        let session_id = session.session_id().to_string();

        let err = session.send("hello").await.unwrap_err();
        assert!(matches!(err, ChatError::Exchange(_)));

        assert_eq!(session.messages().len(), 1);
        assert_eq!(session.messages()[0].role, MessageRole::User);
        assert_eq!(session.messages()[0].content, "hello");
        assert_eq!(session.state(), ConversationState::AwaitingGreeting);
        assert_eq!(session.session_id(), session_id);
        assert!(!session.is_typing());
    }

    #[tokio::test]
    async fn blank_send_without_attachments_is_a_noop() {
        let mut session =
            ChatSession::new(FakeTransport::replying(ConversationState::AwaitingDetails, "x"));
        assert_eq!(session.send("   ").await.unwrap(), SendOutcome::Skipped);
        assert!(session.messages().is_empty());
        assert!(session.transport.seen.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn attachments_ride_along_and_enter_history() {
        let dir = tempfile::tempdir().unwrap();
        let id_card = write_file(&dir, "id-card.png", b"png-bytes");
        let salary = write_file(&dir, "salary.pdf", b"%PDF");

        let mut session = ChatSession::new(FakeTransport::replying(
            ConversationState::AwaitingConfirmation,
            "received",
        ));
        session.attach(&id_card).unwrap();
        session.attach(&salary).unwrap();

        assert_eq!(session.send("").await.unwrap(), SendOutcome::Replied);
        assert_eq!(session.pending().count(), 0);

        let user = &session.messages()[0];
        let names: Vec<&str> = user.attachments.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names, vec!["id-card.png", "salary.pdf"]);

        let history: Vec<&str> = session
            .document_history()
            .iter()
            .map(|d| d.name.as_str())
            .collect();
        assert_eq!(history, vec!["id-card.png", "salary.pdf"]);

        let seen = session.transport.seen.lock().unwrap();
        assert_eq!(seen[0].attachments.len(), 2);
        assert_eq!(seen[0].attachments[1].mime_type, "application/pdf");
    }

    #[tokio::test]
    async fn newer_documents_come_first() {
        let dir = tempfile::tempdir().unwrap();
        let first = write_file(&dir, "first.pdf", b"1");
        let second = write_file(&dir, "second.jpg", b"2");

        let mut session =
            ChatSession::new(FakeTransport::replying(ConversationState::AwaitingDocuments, "ok"));
        session.attach(&first).unwrap();
        session.send("one").await.unwrap();
        session.attach(&second).unwrap();
        session.send("two").await.unwrap();

        assert_eq!(session.document_history()[0].name, "second.jpg");
        assert_eq!(session.document_history()[0].mime_type, "image/jpeg");
        assert_eq!(session.document_history()[1].name, "first.pdf");
    }

    #[tokio::test]
    async fn server_session_id_is_adopted() {
        let mut transport = FakeTransport::replying(ConversationState::AwaitingServiceSelection, "hi");
        if let Some(reply) = transport.reply.as_mut() {
            reply.session_id = "server-issued".into();
        }
        let mut session = ChatSession::new(transport);
        session.send("hello").await.unwrap();
        assert_eq!(session.session_id(), "server-issued");
    }

    #[test]
    fn rejects_unsupported_type() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(&dir, "notes.txt", b"text");
        let mut session = ChatSession::new(FakeTransport::failing());
        assert!(matches!(
            session.attach(&path),
            Err(ChatError::UnsupportedType { ref mime_type, .. }) if mime_type == "text/plain"
        ));
        assert_eq!(session.pending().count(), 0);
    }

    #[test]
    fn rejects_oversized_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("scan.pdf");
        let file = std::fs::File::create(&path).unwrap();
        file.set_len(MAX_ATTACHMENT_BYTES + 1).unwrap();

        let mut session = ChatSession::new(FakeTransport::failing());
        assert!(matches!(
            session.attach(&path),
            Err(ChatError::TooLarge { size, .. }) if size == MAX_ATTACHMENT_BYTES + 1
        ));
    }

    #[test]
    fn remove_attachment_by_index() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(&dir, "id.png", b"png");
        let mut session = ChatSession::new(FakeTransport::failing());
        session.attach(&path).unwrap();

        assert!(matches!(
            session.remove_attachment(3),
            Err(ChatError::NoSuchAttachment(3))
        ));
        let removed = session.remove_attachment(0).unwrap();
        assert_eq!(removed.name, "id.png");
        assert_eq!(session.pending().count(), 0);
    }

    #[tokio::test]
    async fn greeting_only_before_first_exchange() {
        let mut session =
            ChatSession::new(FakeTransport::replying(ConversationState::AwaitingDetails, "ok"));
        assert!(session.greeting(Language::En).unwrap().starts_with("Welcome"));
        session.send("hi").await.unwrap();
        assert_eq!(session.greeting(Language::En), None);
    }

    #[tokio::test]
    async fn snapshot_survives_save_and_resume() {
        let dir = tempfile::tempdir().unwrap();
        let store = SessionStore::new(portal_store::LocalStorage::open(dir.path()).unwrap());

        let mut session =
            ChatSession::new(FakeTransport::replying(ConversationState::AwaitingDetails, "tell me more"));
        session.send("family support").await.unwrap();
        session.save(&store).unwrap();

        let resumed = ChatSession::resume(FakeTransport::failing(), &store).unwrap();
        assert_eq!(resumed.to_record(), session.to_record());
        assert_eq!(resumed.stage(), UiStage::Details);
    }

    #[test]
    fn reset_starts_over() {
        let mut session = ChatSession::from_record(
            FakeTransport::failing(),
            ChatSessionRecord {
                session_id: "old".into(),
                state: ConversationState::Completed,
                ..ChatSessionRecord::default()
            },
        );
        session.reset();
        assert_ne!(session.session_id(), "old");
        assert_eq!(session.state(), ConversationState::AwaitingGreeting);
    }
}
