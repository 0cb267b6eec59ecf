use business::domain::logger::Logger;
use tracing::{debug, error, info, warn};

/// Routes use case logging into `tracing` under the `cart` target.
pub struct TracingLogger;

impl Logger for TracingLogger {
    fn info(&self, message: &str) {
        info!(target: "cart", "{}", message);
    }
    fn warn(&self, message: &str) {
        warn!(target: "cart", "{}", message);
    }
    fn error(&self, message: &str) {
        error!(target: "cart", "{}", message);
    }
    fn debug(&self, message: &str) {
        debug!(target: "cart", "{}", message);
    }
}
