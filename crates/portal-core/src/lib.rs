//! # portal-core
//!
//! Core types and ID generation for the e-services portal.
//!
//! This crate provides the foundational types shared across all portal crates:
//! - Entity structs for cases, chat messages, documents, users, and the service catalog
//! - Case status and conversation state enums
//! - ID prefix constants and case number generation
//! - Arabic/English translation tables
//! - CLI response types

pub mod entities;
pub mod enums;
pub mod i18n;
pub mod ids;
pub mod responses;
