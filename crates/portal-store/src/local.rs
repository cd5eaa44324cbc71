//! Key/value JSON blobs on disk, the CLI analogue of browser local storage.
//!
//! Each key maps to `{data_dir}/{key}.json`. Writes go to a sibling temp file
//! first and are renamed into place so a crash never leaves a half-written
//! blob. On unix, blobs are created with mode 0600.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::StoreError;

/// Fixed storage keys shared with the web portal.
pub mod keys {
    pub const USER: &str = "msdf-user";
    pub const CASES: &str = "msdf-cases";
    pub const TOKEN: &str = "token";
    pub const CHAT_SESSION: &str = "msdf-chat-session";
    pub const CURRENT_CASE: &str = "msdf-current-case";
}

#[derive(Debug, Clone)]
pub struct LocalStorage {
    dir: PathBuf,
}

impl LocalStorage {
    /// Open (and create if needed) a storage directory.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Io` if the directory cannot be created.
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let dir = dir.into();
        fs::create_dir_all(&dir).map_err(|e| StoreError::io(&dir, e))?;
        Ok(Self { dir })
    }

    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }

    /// Raw blob contents, `None` when the key was never written.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Io` for read failures other than "not found".
    pub fn get_item(&self, key: &str) -> Result<Option<String>, StoreError> {
        let path = self.path_for(key);
        match fs::read_to_string(&path) {
            Ok(raw) => Ok(Some(raw)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StoreError::io(&path, e)),
        }
    }

    /// Replace the blob under `key`.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Io` if the temp file cannot be written or renamed.
    pub fn set_item(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let path = self.path_for(key);
        let tmp = self.dir.join(format!(".{key}.json.tmp"));
        fs::write(&tmp, value).map_err(|e| StoreError::io(&tmp, e))?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            if let Err(e) = fs::set_permissions(&tmp, fs::Permissions::from_mode(0o600)) {
                tracing::warn!("failed to chmod 0600 {}: {e}", tmp.display());
            }
        }

        fs::rename(&tmp, &path).map_err(|e| StoreError::io(&path, e))?;
        tracing::debug!(key, bytes = value.len(), "storage write");
        Ok(())
    }

    /// Delete the blob under `key`. Missing keys are not an error.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Io` if an existing blob cannot be removed.
    pub fn remove_item(&self, key: &str) -> Result<(), StoreError> {
        let path = self.path_for(key);
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StoreError::io(&path, e)),
        }
    }

    /// Deserialize the blob under `key`.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Json` if the blob exists but does not parse as `T`.
    pub fn get_json<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, StoreError> {
        self.get_item(key)?
            .map(|raw| serde_json::from_str(&raw).map_err(|e| StoreError::json(key, e)))
            .transpose()
    }

    /// Serialize `value` and store it under `key`.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Json` or `StoreError::Io`.
    pub fn set_json<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> Result<(), StoreError> {
        let raw = serde_json::to_string(value).map_err(|e| StoreError::json(key, e))?;
        self.set_item(key, &raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn storage() -> (tempfile::TempDir, LocalStorage) {
        let dir = tempfile::tempdir().unwrap();
        let storage = LocalStorage::open(dir.path().join("data")).unwrap();
        (dir, storage)
    }

    #[test]
    fn missing_key_reads_as_none() {
        let (_dir, storage) = storage();
        assert_eq!(storage.get_item(keys::USER).unwrap(), None);
        assert!(storage.get_json::<Vec<String>>(keys::CASES).unwrap().is_none());
    }

    #[test]
    fn set_then_get_and_remove() {
        let (_dir, storage) = storage();
        storage.set_item(keys::TOKEN, "\"abc\"").unwrap();
        assert_eq!(storage.get_item(keys::TOKEN).unwrap().as_deref(), Some("\"abc\""));

        storage.remove_item(keys::TOKEN).unwrap();
        assert_eq!(storage.get_item(keys::TOKEN).unwrap(), None);
        storage.remove_item(keys::TOKEN).unwrap();
    }

    #[test]
    fn write_leaves_no_temp_file() {
        let (_dir, storage) = storage();
        storage.set_json(keys::CASES, &vec!["a", "b"]).unwrap();
        let names: Vec<String> = fs::read_dir(storage.dir())
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["msdf-cases.json".to_string()]);
    }

    #[test]
    fn corrupt_blob_is_a_json_error() {
        let (_dir, storage) = storage();
        storage.set_item(keys::CASES, "{not json").unwrap();
        let err = storage.get_json::<Vec<String>>(keys::CASES).unwrap_err();
        assert!(matches!(err, StoreError::Json { ref key, .. } if key == keys::CASES));
    }

    #[cfg(unix)]
    #[test]
    fn blobs_are_owner_only() {
        use std::os::unix::fs::PermissionsExt;
        let (_dir, storage) = storage();
        storage.set_item(keys::TOKEN, "\"secret\"").unwrap();
        let mode = fs::metadata(storage.dir().join("token.json"))
            .unwrap()
            .permissions()
            .mode();
        assert_eq!(mode & 0o777, 0o600);
    }
}
