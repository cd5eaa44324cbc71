//! Prefixed identifiers and case numbers.
//!
//! Ids are `{prefix}-{8 hex}` where the hex comes from a v4 UUID. Case numbers
//! follow the ministry format `MSDF-{year}-{6 digits}`.

use chrono::{Datelike, Utc};
use uuid::Uuid;

pub const PREFIX_CASE: &str = "cas";
pub const PREFIX_MESSAGE: &str = "msg";
pub const PREFIX_DOCUMENT: &str = "doc";
pub const PREFIX_USER: &str = "usr";

pub const ALL_PREFIXES: [&str; 4] = [PREFIX_CASE, PREFIX_MESSAGE, PREFIX_DOCUMENT, PREFIX_USER];

const CASE_NUMBER_PREFIX: &str = "MSDF";

/// Generate `{prefix}-xxxxxxxx`.
#[must_use]
pub fn generate_id(prefix: &str) -> String {
    let simple = Uuid::new_v4().simple().to_string();
    format!("{prefix}-{}", &simple[..8])
}

/// Generate a fresh session id for the chat backend (full UUID, opaque).
#[must_use]
pub fn generate_session_id() -> String {
    Uuid::new_v4().to_string()
}

/// Generate `MSDF-YYYY-NNNNNN` for the current year.
#[must_use]
pub fn generate_case_number() -> String {
    let serial = Uuid::new_v4().as_u128() % 1_000_000;
    format_case_number(Utc::now().year(), serial)
}

#[must_use]
pub fn format_case_number(year: i32, serial: u128) -> String {
    format!("{CASE_NUMBER_PREFIX}-{year}-{serial:06}")
}

/// Whether `id` has a known prefix followed by 8 lowercase hex chars.
#[must_use]
pub fn is_valid_id(id: &str) -> bool {
    let Some((prefix, rest)) = id.split_once('-') else {
        return false;
    };
    ALL_PREFIXES.contains(&prefix)
        && rest.len() == 8
        && rest.chars().all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_ids_have_prefix_and_hex_suffix() {
        for prefix in ALL_PREFIXES {
            let id = generate_id(prefix);
            assert!(id.starts_with(&format!("{prefix}-")));
            assert!(is_valid_id(&id), "{id}");
        }
    }

    #[test]
    fn ids_are_unique() {
        assert_ne!(generate_id(PREFIX_CASE), generate_id(PREFIX_CASE));
    }

    #[test]
    fn rejects_malformed_ids() {
        assert!(!is_valid_id("cas"));
        assert!(!is_valid_id("xyz-1234abcd"));
        assert!(!is_valid_id("cas-1234ABCD"));
        assert!(!is_valid_id("cas-123"));
    }

    #[test]
    fn case_number_format() {
        assert_eq!(format_case_number(2024, 42), "MSDF-2024-000042");
        let generated = generate_case_number();
        let parts: Vec<&str> = generated.split('-').collect();
        assert_eq!(parts.len(), 3);
        assert_eq!(parts[0], "MSDF");
        assert_eq!(parts[1].len(), 4);
        assert_eq!(parts[2].len(), 6);
        assert!(parts[2].chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn session_id_is_uuid() {
        assert!(Uuid::parse_str(&generate_session_id()).is_ok());
    }
}
