//! Shared HTTP response helpers.
//!
//! Centralizes status-code checks (401 → [`ClientError::Unauthorized`],
//! non-success → [`ClientError::Api`]) so endpoint modules stay focused on
//! request construction and response mapping.

use crate::error::ClientError;

/// Check an HTTP response for error statuses.
///
/// Returns the response unchanged on success.
pub async fn check_response(resp: reqwest::Response) -> Result<reqwest::Response, ClientError> {
    if resp.status() == reqwest::StatusCode::UNAUTHORIZED {
        return Err(ClientError::Unauthorized);
    }
    if !resp.status().is_success() {
        return Err(ClientError::Api {
            status: resp.status().as_u16(),
            message: error_message(resp).await,
        });
    }
    Ok(resp)
}

/// Prefer a JSON `message`/`error` field, else the raw body.
async fn error_message(resp: reqwest::Response) -> String {
    let body = resp.text().await.unwrap_or_default();
    serde_json::from_str::<serde_json::Value>(&body)
        .ok()
        .and_then(|v| {
            ["message", "error", "title"]
                .iter()
                .find_map(|k| v.get(*k).and_then(|m| m.as_str()).map(String::from))
        })
        .unwrap_or(body)
}
