use async_trait::async_trait;

use crate::domain::errors::RepositoryError;

use super::model::Cart;

/// Durable home of the cart snapshot.
///
/// The snapshot is always written wholesale; there are no partial updates.
#[async_trait]
pub trait CartRepository: Send + Sync {
    /// Returns `None` when no snapshot has been stored yet.
    async fn load(&self) -> Result<Option<Cart>, RepositoryError>;
    async fn save(&self, cart: &Cart) -> Result<(), RepositoryError>;
}
