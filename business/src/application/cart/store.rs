use std::sync::Arc;

use tokio::sync::{Mutex, MutexGuard, watch};

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::Cart;
use crate::domain::cart::repository::CartRepository;
use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;

/// Owner of the shopper's cart for the lifetime of a session.
///
/// Holds the in-memory cart, mirrors it to the repository and publishes every
/// committed cart to subscribers. Mutations go through [`CartStore::begin`],
/// which hands out one transaction at a time, so overlapping operations are
/// applied one after the other instead of overwriting each other.
pub struct CartStore {
    repository: Arc<dyn CartRepository>,
    logger: Arc<dyn Logger>,
    writer: Mutex<()>,
    state: watch::Sender<Cart>,
}

impl CartStore {
    /// Restores the cart from the repository, or starts empty when there is
    /// no usable snapshot.
    pub async fn load(
        repository: Arc<dyn CartRepository>,
        logger: Arc<dyn Logger>,
    ) -> Result<Self, CartError> {
        let cart = match repository.load().await {
            Ok(Some(cart)) => {
                logger.info(&format!("Restored cart with {} lines", cart.len()));
                cart
            }
            Ok(None) => {
                logger.info("No stored cart found, starting empty");
                Cart::new()
            }
            Err(RepositoryError::CorruptedSnapshot) => {
                logger.warn("Stored cart could not be read, starting empty");
                Cart::new()
            }
            Err(err) => {
                logger.error(&format!("Failed to load stored cart: {}", err));
                return Err(err.into());
            }
        };

        let (state, _) = watch::channel(cart);
        Ok(Self {
            repository,
            logger,
            writer: Mutex::new(()),
            state,
        })
    }

    pub fn snapshot(&self) -> Cart {
        self.state.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<Cart> {
        self.state.subscribe()
    }

    /// Waits for exclusive write access and returns a working copy of the
    /// current cart.
    pub async fn begin(&self) -> CartTransaction<'_> {
        let guard = self.writer.lock().await;
        let cart = self.snapshot();
        CartTransaction {
            store: self,
            _guard: guard,
            cart,
        }
    }
}

/// Exclusive working copy of the cart.
///
/// Dropping it without calling [`CartTransaction::commit`] discards every
/// change, leaving memory and storage as they were.
pub struct CartTransaction<'a> {
    store: &'a CartStore,
    _guard: MutexGuard<'a, ()>,
    cart: Cart,
}

impl CartTransaction<'_> {
    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn cart_mut(&mut self) -> &mut Cart {
        &mut self.cart
    }

    /// Persists the working copy, then publishes it as the current cart.
    /// A failed save publishes nothing.
    pub async fn commit(self) -> Result<Cart, CartError> {
        if let Err(err) = self.store.repository.save(&self.cart).await {
            self.store
                .logger
                .error(&format!("Failed to persist cart: {}", err));
            return Err(err.into());
        }

        self.store.state.send_replace(self.cart.clone());
        self.store
            .logger
            .debug(&format!("Cart committed with {} lines", self.cart.len()));
        Ok(self.cart)
    }
}
