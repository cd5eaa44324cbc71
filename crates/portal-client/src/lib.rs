//! # portal-client
//!
//! HTTP client for the e-services portal backend.
//!
//! Every request passes through [`ApiClient`]'s interceptor pair:
//! - **request**: default `Content-Type: application/json` unless the body
//!   sets its own, `Authorization: Bearer {token}` unless auth is skipped,
//!   and `X-Api-Subscription-Key` when configured.
//! - **response**: a 401 clears the stored token and surfaces
//!   [`ClientError::Unauthorized`]; other failures map to [`ClientError::Api`].
//!
//! Endpoints:
//! - chat intake (`POST /api/msdf/MsdfChat`, multipart) via [`ChatTransport`]
//! - catalog overview (`GET /administration-dashboard/overview`)

pub mod catalog;
pub mod chat;

mod error;
mod http;

pub use chat::{ChatAttachment, ChatReply, ChatRequest, ChatTransport};
pub use error::ClientError;

use portal_config::ApiConfig;
use portal_store::TokenStore;
use reqwest::header::CONTENT_TYPE;

/// Header carrying the API gateway subscription key.
pub const SUBSCRIPTION_KEY_HEADER: &str = "X-Api-Subscription-Key";

const DEFAULT_CONTENT_TYPE: &str = "application/json";

/// Per-request interceptor switches.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RequestOptions {
    /// Do not attach the bearer token.
    pub skip_auth: bool,
    /// The body sets its own content type (multipart); skip the JSON default.
    pub explicit_content_type: bool,
}

/// HTTP client for the portal backend.
pub struct ApiClient {
    http: reqwest::Client,
    config: ApiConfig,
    tokens: TokenStore,
}

impl ApiClient {
    /// Build a client from the `api` config section.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Http`] if the underlying `reqwest::Client`
    /// cannot be built.
    pub fn new(config: ApiConfig, tokens: TokenStore) -> Result<Self, ClientError> {
        let mut builder =
            reqwest::Client::builder().user_agent(concat!("portal/", env!("CARGO_PKG_VERSION")));
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            http: builder.build()?,
            config,
            tokens,
        })
    }

    #[must_use]
    pub const fn config(&self) -> &ApiConfig {
        &self.config
    }

    #[must_use]
    pub const fn tokens(&self) -> &TokenStore {
        &self.tokens
    }

    /// Request interceptor.
    fn intercept(
        &self,
        mut builder: reqwest::RequestBuilder,
        options: RequestOptions,
    ) -> reqwest::RequestBuilder {
        if !options.explicit_content_type {
            builder = builder.header(CONTENT_TYPE, DEFAULT_CONTENT_TYPE);
        }
        if !options.skip_auth {
            if let Some(token) = self.tokens.load() {
                builder = builder.bearer_auth(token);
            }
        }
        if self.config.has_subscription_key() {
            builder = builder.header(SUBSCRIPTION_KEY_HEADER, &self.config.subscription_key);
        }
        builder
    }

    pub(crate) fn get(&self, url: &str, options: RequestOptions) -> reqwest::RequestBuilder {
        self.intercept(self.http.get(url), options)
    }

    pub(crate) fn post(&self, url: &str, options: RequestOptions) -> reqwest::RequestBuilder {
        self.intercept(self.http.post(url), options)
    }

    /// Send a prepared request through the response interceptor.
    pub(crate) async fn send(
        &self,
        builder: reqwest::RequestBuilder,
    ) -> Result<reqwest::Response, ClientError> {
        let resp = builder.send().await?;
        if resp.status() == reqwest::StatusCode::UNAUTHORIZED {
            tracing::warn!("unauthorized response; clearing stored token");
            if let Err(error) = self.tokens.clear() {
                tracing::warn!(%error, "failed to clear stored token");
            }
        }
        http::check_response(resp).await
    }
}
