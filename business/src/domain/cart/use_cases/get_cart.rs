use tokio::sync::watch;

use crate::domain::cart::model::Cart;

pub trait GetCartUseCase: Send + Sync {
    /// Current cart snapshot.
    fn execute(&self) -> Cart;

    /// Receiver that observes every committed cart.
    fn subscribe(&self) -> watch::Receiver<Cart>;
}
