use thiserror::Error;

use portal_client::ClientError;
use portal_store::StoreError;

#[derive(Debug, Error)]
pub enum ChatError {
    /// File type outside the accepted set (PDF, PNG, JPEG).
    #[error("unsupported attachment type for {name}: {mime_type} (accepted: PDF, PNG, JPG)")]
    UnsupportedType { name: String, mime_type: String },

    #[error("attachment {name} is {size} bytes, over the {limit} byte limit")]
    TooLarge { name: String, size: u64, limit: u64 },

    #[error("{0}")]
    Attachment(String),

    #[error("no pending attachment at index {0}")]
    NoSuchAttachment(usize),

    /// The exchange with the chat backend failed. The user's message is kept.
    #[error("chat exchange failed: {0}")]
    Exchange(#[from] ClientError),

    #[error(transparent)]
    Store(#[from] StoreError),
}
