//! Local data directory configuration.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::ConfigError;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct StorageConfig {
    /// Directory holding the JSON blobs. Empty means the platform data dir.
    #[serde(default)]
    pub data_dir: String,
}

impl StorageConfig {
    /// Configured directory, or `{platform data dir}/portal`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NoDataDir`] when `data_dir` is empty and the
    /// platform reports no data directory.
    pub fn resolved_data_dir(&self) -> Result<PathBuf, ConfigError> {
        self.resolve_with(dirs::data_dir())
    }

    fn resolve_with(&self, platform_dir: Option<PathBuf>) -> Result<PathBuf, ConfigError> {
        if !self.data_dir.is_empty() {
            return Ok(PathBuf::from(&self.data_dir));
        }
        platform_dir
            .map(|dir| dir.join("portal"))
            .ok_or(ConfigError::NoDataDir)
    }
}
