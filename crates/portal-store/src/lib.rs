//! # portal-store
//!
//! Local persistence for the e-services portal: flat JSON blobs under fixed
//! keys (the analogue of browser local storage), and the case, auth, token,
//! and chat-session stores built on top of them.

pub mod auth;
pub mod cases;
pub mod error;
pub mod local;
pub mod sessions;
pub mod token;

pub use auth::AuthStore;
pub use cases::{CaseFilter, CaseStore};
pub use error::StoreError;
pub use local::LocalStorage;
pub use sessions::SessionStore;
pub use token::{TokenSource, TokenStore};
