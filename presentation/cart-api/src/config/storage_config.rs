use std::env;
use std::path::PathBuf;
use std::sync::Arc;

use persistence::cart::repository::DEFAULT_CART_KEY;
use persistence::local_storage::{LocalStorage, LocalStorageConfig, open_local_storage};

/// Where the cart snapshot lives.
#[derive(Debug, Clone)]
pub struct StorageConfig {
    pub path: PathBuf,
    pub key: String,
}

impl StorageConfig {
    /// Environment variables:
    /// - CART_STORAGE_PATH: JSON file backing local storage
    ///   (default: ".storage/local-storage.json")
    /// - CART_STORAGE_KEY: Key of the cart snapshot (default: "@RocketShoes:cart")
    pub fn from_env() -> Self {
        let path = env::var("CART_STORAGE_PATH")
            .unwrap_or_else(|_| ".storage/local-storage.json".to_string());
        let key = env::var("CART_STORAGE_KEY").unwrap_or_else(|_| DEFAULT_CART_KEY.to_string());

        Self {
            path: PathBuf::from(path),
            key,
        }
    }
}

/// Open the local storage file described by the configuration
///
/// # Errors
/// Returns error if the storage directory cannot be created
pub async fn init_local_storage(config: &StorageConfig) -> anyhow::Result<Arc<LocalStorage>> {
    let storage = open_local_storage(&LocalStorageConfig::new(config.path.clone())).await?;
    Ok(Arc::new(storage))
}
