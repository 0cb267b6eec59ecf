use std::collections::BTreeMap;
use std::io::ErrorKind;
use std::path::PathBuf;

use thiserror::Error;
use tokio::sync::Mutex;

#[derive(Error, Debug, PartialEq)]
pub enum StorageError {
    #[error("storage.io_error")]
    IoError,
    #[error("storage.corrupted")]
    Corrupted,
}

/// Configuration for the local key-value store
pub struct LocalStorageConfig {
    pub path: PathBuf,
}

impl LocalStorageConfig {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

/// String-keyed store of string values kept in a single JSON object file,
/// the on-disk counterpart of browser local storage.
///
/// Every write replaces the whole file through a temporary file and a rename,
/// so readers see either the previous or the new content.
pub struct LocalStorage {
    path: PathBuf,
    lock: Mutex<()>,
}

/// Opens the store, creating the parent directory when missing
pub async fn open_local_storage(config: &LocalStorageConfig) -> Result<LocalStorage, StorageError> {
    if let Some(parent) = config.path.parent()
        && !parent.as_os_str().is_empty()
    {
        tokio::fs::create_dir_all(parent)
            .await
            .map_err(|_| StorageError::IoError)?;
    }

    Ok(LocalStorage {
        path: config.path.clone(),
        lock: Mutex::new(()),
    })
}

impl LocalStorage {
    pub async fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        let _guard = self.lock.lock().await;
        let items = self.read_all().await?;
        Ok(items.get(key).cloned())
    }

    pub async fn set_item(&self, key: &str, value: String) -> Result<(), StorageError> {
        let _guard = self.lock.lock().await;
        let mut items = self.read_or_reset().await?;
        items.insert(key.to_string(), value);
        self.write_all(&items).await
    }

    async fn read_all(&self) -> Result<BTreeMap<String, String>, StorageError> {
        match tokio::fs::read_to_string(&self.path).await {
            Ok(raw) if raw.trim().is_empty() => Ok(BTreeMap::new()),
            Ok(raw) => serde_json::from_str(&raw).map_err(|_| StorageError::Corrupted),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(BTreeMap::new()),
            Err(_) => Err(StorageError::IoError),
        }
    }

    // An unreadable file must not block writes forever.
    async fn read_or_reset(&self) -> Result<BTreeMap<String, String>, StorageError> {
        match self.read_all().await {
            Err(StorageError::Corrupted) => {
                tracing::warn!(
                    path = %self.path.display(),
                    "local storage file is corrupted, overwriting it"
                );
                Ok(BTreeMap::new())
            }
            other => other,
        }
    }

    async fn write_all(&self, items: &BTreeMap<String, String>) -> Result<(), StorageError> {
        let raw = serde_json::to_string(items).map_err(|_| StorageError::IoError)?;
        let tmp_path = self.path.with_extension("json.tmp");

        tokio::fs::write(&tmp_path, raw)
            .await
            .map_err(|_| StorageError::IoError)?;
        tokio::fs::rename(&tmp_path, &self.path)
            .await
            .map_err(|_| StorageError::IoError)
    }
}
