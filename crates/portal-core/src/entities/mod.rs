//! Entity structs for all portal domain objects.
//!
//! Each entity is persisted as part of a flat JSON blob in the local store, so
//! field names follow the store's camelCase layout. All structs derive
//! `Serialize`, `Deserialize`, and `JsonSchema` for JSON roundtrip and schema
//! validation.

mod case;
mod catalog;
mod document;
mod message;
mod session;
mod user;

pub use case::{Case, StatusUpdate};
pub use catalog::{Service, Step};
pub use document::{NewDocument, UploadedDocument, format_file_size};
pub use message::{ChatMessage, NewMessage};
pub use session::ChatSessionRecord;
pub use user::User;
