//! Chat backend / portal API configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::ConfigError;

fn default_chat_path() -> String {
    "/api/msdf/MsdfChat".to_string()
}

fn default_overview_path() -> String {
    "/administration-dashboard/overview".to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiConfig {
    /// Backend origin, e.g. `https://portal.example.qa`.
    #[serde(default)]
    pub base_url: String,

    /// Sent as `X-Api-Subscription-Key` on every request.
    #[serde(default)]
    pub subscription_key: String,

    #[serde(default = "default_chat_path")]
    pub chat_path: String,

    #[serde(default = "default_overview_path")]
    pub overview_path: String,

    /// Request timeout. Unset means no timeout.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            subscription_key: String::new(),
            chat_path: default_chat_path(),
            overview_path: default_overview_path(),
            timeout_secs: None,
        }
    }
}

impl ApiConfig {
    pub fn is_configured(&self) -> bool {
        !self.base_url.is_empty()
    }

    pub fn has_subscription_key(&self) -> bool {
        !self.subscription_key.is_empty()
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }

    /// Join `base_url` and `path` with exactly one slash between them.
    pub fn endpoint(&self, path: &str) -> Result<String, ConfigError> {
        if !self.is_configured() {
            return Err(ConfigError::MissingBaseUrl);
        }
        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(ConfigError::InvalidBaseUrl {
                value: self.base_url.clone(),
            });
        }
        Ok(format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        ))
    }

    pub fn chat_url(&self) -> Result<String, ConfigError> {
        self.endpoint(&self.chat_path)
    }

    pub fn overview_url(&self) -> Result<String, ConfigError> {
        self.endpoint(&self.overview_path)
    }
}
