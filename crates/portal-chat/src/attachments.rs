//! Attachment validation for the chat dropzone.

use std::path::Path;

use chrono::Utc;

use portal_client::ChatAttachment;
use portal_core::entities::UploadedDocument;
use portal_core::ids::{PREFIX_DOCUMENT, generate_id};

use crate::error::ChatError;

pub const ACCEPTED_MIME_TYPES: [&str; 3] = ["application/pdf", "image/png", "image/jpeg"];

/// 10 MiB.
pub const MAX_ATTACHMENT_BYTES: u64 = 10 * 1024 * 1024;

/// A validated file waiting to be sent, with the metadata shown to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingAttachment {
    pub document: UploadedDocument,
    pub(crate) payload: ChatAttachment,
}

impl PendingAttachment {
    /// Read and validate a file.
    ///
    /// Size is checked from metadata before the file is read.
    pub(crate) fn from_path(path: &Path) -> Result<Self, ChatError> {
        let name = path
            .file_name()
            .map_or_else(|| path.display().to_string(), |n| n.to_string_lossy().into_owned());

        if let Ok(meta) = std::fs::metadata(path) {
            check_size(&name, meta.len())?;
        }
        let payload =
            ChatAttachment::from_path(path).map_err(|e| ChatError::Attachment(e.to_string()))?;
        check_size(&name, payload.size())?;
        if !ACCEPTED_MIME_TYPES.contains(&payload.mime_type.as_str()) {
            return Err(ChatError::UnsupportedType {
                name,
                mime_type: payload.mime_type,
            });
        }

        let document = UploadedDocument {
            id: generate_id(PREFIX_DOCUMENT),
            name: payload.file_name.clone(),
            mime_type: payload.mime_type.clone(),
            size: payload.size(),
            url: path.display().to_string(),
            uploaded_at: Utc::now(),
        };
        Ok(Self { document, payload })
    }
}

fn check_size(name: &str, size: u64) -> Result<(), ChatError> {
    if size > MAX_ATTACHMENT_BYTES {
        return Err(ChatError::TooLarge {
            name: name.to_string(),
            size,
            limit: MAX_ATTACHMENT_BYTES,
        });
    }
    Ok(())
}
