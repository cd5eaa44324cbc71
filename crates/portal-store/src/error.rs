//! Storage error types for portal-store.

use thiserror::Error;

/// Errors from local storage and the stores built on it.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Reading, writing, or renaming a blob failed.
    #[error("Storage I/O error at {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// A stored blob could not be (de)serialized.
    #[error("Corrupt or unserializable data under key '{key}': {source}")]
    Json {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    /// Entity lookup returned no result.
    #[error("{entity_type} not found: {id}")]
    NotFound { entity_type: String, id: String },

    /// Input rejected before touching storage.
    #[error("Validation error: {0}")]
    Validation(String),
}

impl StoreError {
    pub(crate) fn io(path: &std::path::Path, source: std::io::Error) -> Self {
        Self::Io {
            path: path.display().to_string(),
            source,
        }
    }

    pub(crate) fn json(key: &str, source: serde_json::Error) -> Self {
        Self::Json {
            key: key.to_string(),
            source,
        }
    }

    pub(crate) fn case_not_found(id: &str) -> Self {
        Self::NotFound {
            entity_type: "Case".to_string(),
            id: id.to_string(),
        }
    }
}
