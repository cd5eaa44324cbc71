//! # portal-chat
//!
//! The chat intake session: message log, pending (unsent) attachments,
//! sent-document history, and the server-reported conversation state.
//!
//! The session never validates state transitions. Whatever state the backend
//! returns is adopted and mapped 1:1 to a [`UiStage`](portal_core::enums::UiStage).

mod attachments;
mod error;
mod session;

pub use attachments::{ACCEPTED_MIME_TYPES, MAX_ATTACHMENT_BYTES, PendingAttachment};
pub use error::ChatError;
pub use session::{ChatSession, SendOutcome};
