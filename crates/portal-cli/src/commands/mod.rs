pub mod auth;
pub mod case;
pub mod catalog;
pub mod chat;
pub mod dispatch;
pub mod shared;
