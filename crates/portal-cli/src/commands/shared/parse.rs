use serde::de::DeserializeOwned;

/// Parse a `snake_case` enum value using serde-deserialization.
///
/// Hyphens are accepted in place of underscores, so `under-review` works.
pub fn parse_enum<T>(raw: &str, field: &str) -> anyhow::Result<T>
where
    T: DeserializeOwned,
{
    let normalized = raw.trim().to_ascii_lowercase().replace('-', "_");
    serde_json::from_value(serde_json::Value::String(normalized))
        .map_err(|error| anyhow::anyhow!("invalid {field} '{raw}': {error}"))
}

#[cfg(test)]
mod tests {
    use portal_core::enums::{CaseStatus, MessageRole};

    use super::parse_enum;

    #[test]
    fn parses_snake_case_enum() {
        let status: CaseStatus = parse_enum("completed", "status").expect("status should parse");
        assert_eq!(status, CaseStatus::Completed);
    }

    #[test]
    fn parses_hyphenated_alias() {
        let status: CaseStatus = parse_enum("under-review", "status").expect("status should parse");
        assert_eq!(status, CaseStatus::UnderReview);
    }

    #[test]
    fn parses_case_insensitively() {
        let role: MessageRole = parse_enum("Agent", "role").expect("role should parse");
        assert_eq!(role, MessageRole::Agent);
    }

    #[test]
    fn errors_on_invalid_enum() {
        let err = parse_enum::<CaseStatus>("done", "status").expect_err("should fail");
        assert!(err.to_string().contains("invalid status 'done'"));
    }
}
