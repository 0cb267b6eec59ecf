use std::sync::Arc;

use async_trait::async_trait;

use business::domain::cart::model::Cart;
use business::domain::cart::repository::CartRepository;
use business::domain::errors::RepositoryError;

use super::entity::{deserialize_cart, serialize_cart};
use crate::local_storage::{LocalStorage, StorageError};

/// Key the storefront has always used for the cart snapshot.
pub const DEFAULT_CART_KEY: &str = "@RocketShoes:cart";

pub struct CartRepositoryLocalStorage {
    storage: Arc<LocalStorage>,
    key: String,
}

impl CartRepositoryLocalStorage {
    pub fn new(storage: Arc<LocalStorage>, key: impl Into<String>) -> Self {
        Self {
            storage,
            key: key.into(),
        }
    }
}

fn to_repository_error(err: StorageError) -> RepositoryError {
    match err {
        StorageError::Corrupted => RepositoryError::CorruptedSnapshot,
        StorageError::IoError => RepositoryError::Persistence,
    }
}

#[async_trait]
impl CartRepository for CartRepositoryLocalStorage {
    async fn load(&self) -> Result<Option<Cart>, RepositoryError> {
        let raw = self
            .storage
            .get_item(&self.key)
            .await
            .map_err(to_repository_error)?;

        match raw {
            Some(raw) => deserialize_cart(&raw)
                .map(Some)
                .map_err(|_| RepositoryError::CorruptedSnapshot),
            None => Ok(None),
        }
    }

    async fn save(&self, cart: &Cart) -> Result<(), RepositoryError> {
        let raw = serialize_cart(cart).map_err(|_| RepositoryError::Persistence)?;

        self.storage
            .set_item(&self.key, raw)
            .await
            .map_err(to_repository_error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::local_storage::{LocalStorageConfig, open_local_storage};
    use business::domain::cart::model::CartLine;
    use business::domain::shared::value_objects::ProductId;

    async fn repository_in(dir: &tempfile::TempDir) -> (Arc<LocalStorage>, CartRepositoryLocalStorage) {
        let config = LocalStorageConfig::new(dir.path().join("local-storage.json"));
        let storage = Arc::new(open_local_storage(&config).await.unwrap());
        let repository = CartRepositoryLocalStorage::new(storage.clone(), DEFAULT_CART_KEY);
        (storage, repository)
    }

    fn cart() -> Cart {
        Cart::from_repository(vec![
            CartLine {
                id: ProductId::new(1),
                title: "Tênis de Caminhada Leve Confortável".to_string(),
                price: 179.9,
                image_url: "https://example.com/tenis1.jpg".to_string(),
                amount: 2,
            },
            CartLine {
                id: ProductId::new(3),
                title: "Tênis Adidas Duramo Lite 2.0".to_string(),
                price: 219.9,
                image_url: "https://example.com/tenis3.jpg".to_string(),
                amount: 1,
            },
        ])
    }

    #[tokio::test]
    async fn should_load_nothing_before_first_save() {
        let dir = tempfile::tempdir().unwrap();
        let (_, repository) = repository_in(&dir).await;

        assert!(repository.load().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn should_load_what_was_saved() {
        let dir = tempfile::tempdir().unwrap();
        let (_, repository) = repository_in(&dir).await;

        repository.save(&cart()).await.unwrap();

        assert_eq!(repository.load().await.unwrap(), Some(cart()));
    }

    #[tokio::test]
    async fn should_restore_cart_after_restart() {
        let dir = tempfile::tempdir().unwrap();
        {
            let (_, repository) = repository_in(&dir).await;
            repository.save(&cart()).await.unwrap();
        }

        let (_, restarted) = repository_in(&dir).await;

        assert_eq!(restarted.load().await.unwrap(), Some(cart()));
    }

    #[tokio::test]
    async fn should_overwrite_snapshot_wholesale() {
        let dir = tempfile::tempdir().unwrap();
        let (_, repository) = repository_in(&dir).await;
        repository.save(&cart()).await.unwrap();

        repository.save(&Cart::new()).await.unwrap();

        assert_eq!(repository.load().await.unwrap(), Some(Cart::new()));
    }

    #[tokio::test]
    async fn should_flag_unreadable_snapshot_as_corrupted() {
        let dir = tempfile::tempdir().unwrap();
        let (storage, repository) = repository_in(&dir).await;
        storage
            .set_item(DEFAULT_CART_KEY, "not a cart".to_string())
            .await
            .unwrap();

        let result = repository.load().await;

        assert!(matches!(result, Err(RepositoryError::CorruptedSnapshot)));
    }
}
