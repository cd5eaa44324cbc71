//! Errors raised while loading or reading portal settings.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    /// A config file or `PORTAL_*` variable could not be merged or parsed.
    #[error("cannot load portal config: {0}")]
    Load(#[from] figment::Error),

    /// The `[api]` section has no `base_url`.
    #[error("api.base_url is not set; add it to .portal/config.toml or export PORTAL_API__BASE_URL")]
    MissingBaseUrl,

    #[error("api.base_url must start with http:// or https://, got '{value}'")]
    InvalidBaseUrl { value: String },

    /// `storage.data_dir` is empty and the platform has no data directory.
    #[error("no platform data directory; set storage.data_dir or PORTAL_STORAGE__DATA_DIR")]
    NoDataDir,
}
