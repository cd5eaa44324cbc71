//! Client error types.

use thiserror::Error;

/// Errors from the portal HTTP client and chat transport.
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP transport error (connect, timeout, body read).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered 401. The stored token has been cleared.
    #[error("unauthorized: session expired, run `portal auth login` and set a new token")]
    Unauthorized,

    /// Server returned a non-success status code.
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Error message or response body.
        message: String,
    },

    /// Failed to parse a server response.
    #[error("parse error: {0}")]
    Parse(String),

    /// An attachment could not be read or encoded.
    #[error("attachment error: {0}")]
    Attachment(String),

    /// Endpoint URL could not be built from configuration.
    #[error(transparent)]
    Config(#[from] portal_config::ConfigError),
}

impl ClientError {
    /// Transport failures are the only errors worth a retry by the user.
    #[must_use]
    pub const fn is_transport(&self) -> bool {
        matches!(self, Self::Http(_))
    }
}
