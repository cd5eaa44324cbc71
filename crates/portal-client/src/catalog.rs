//! Catalog reads from the administration overview endpoint.
//!
//! The endpoint wraps its payload as `{"result": ...}`. `result` may be a
//! single item or a list; both decode to a `Vec`.

use serde::Deserialize;
use serde::de::DeserializeOwned;

use portal_core::entities::{Case, Service, Step};

use crate::error::ClientError;
use crate::{ApiClient, RequestOptions};

#[derive(Deserialize)]
struct Envelope<T> {
    result: OneOrMany<T>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum OneOrMany<T> {
    Many(Vec<T>),
    One(T),
}

impl<T> From<OneOrMany<T>> for Vec<T> {
    fn from(value: OneOrMany<T>) -> Self {
        match value {
            OneOrMany::Many(items) => items,
            OneOrMany::One(item) => vec![item],
        }
    }
}

/// Decode an overview envelope body.
pub(crate) fn parse_envelope<T: DeserializeOwned>(body: &str) -> Result<Vec<T>, ClientError> {
    serde_json::from_str::<Envelope<T>>(body)
        .map(|envelope| envelope.result.into())
        .map_err(|e| ClientError::Parse(format!("overview response: {e}")))
}

impl ApiClient {
    async fn fetch_overview<T: DeserializeOwned>(&self) -> Result<Vec<T>, ClientError> {
        let url = self.config().overview_url()?;
        tracing::debug!(%url, "fetching overview");
        let resp = self.send(self.get(&url, RequestOptions::default())).await?;
        let body = resp.text().await?;
        parse_envelope(&body)
    }

    /// # Errors
    ///
    /// Returns [`ClientError`] on transport failure, a non-success status, or
    /// an unparseable body.
    pub async fn fetch_services(&self) -> Result<Vec<Service>, ClientError> {
        self.fetch_overview().await
    }

    /// # Errors
    ///
    /// Returns [`ClientError`] on transport failure, a non-success status, or
    /// an unparseable body.
    pub async fn fetch_steps(&self) -> Result<Vec<Step>, ClientError> {
        self.fetch_overview().await
    }

    /// # Errors
    ///
    /// Returns [`ClientError`] on transport failure, a non-success status, or
    /// an unparseable body.
    pub async fn fetch_cases(&self) -> Result<Vec<Case>, ClientError> {
        self.fetch_overview().await
    }
}
