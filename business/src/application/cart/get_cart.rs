use std::sync::Arc;

use tokio::sync::watch;

use crate::application::cart::store::CartStore;
use crate::domain::cart::model::Cart;
use crate::domain::cart::use_cases::get_cart::GetCartUseCase;

pub struct GetCartUseCaseImpl {
    pub store: Arc<CartStore>,
}

impl GetCartUseCase for GetCartUseCaseImpl {
    fn execute(&self) -> Cart {
        self.store.snapshot()
    }

    fn subscribe(&self) -> watch::Receiver<Cart> {
        self.store.subscribe()
    }
}
