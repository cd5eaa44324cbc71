mod auth;
mod case;
mod catalog;
mod chat;

pub use auth::{AuthCommands, TokenCommands};
pub use case::CaseCommands;
pub use catalog::CatalogCommands;
pub use chat::ChatCommands;
