use std::time::Duration;

use reqwest::Client;
use url::Url;

use business::domain::shared::value_objects::ProductId;

/// Shared HTTP client configuration for the catalog API.
pub struct CatalogClient {
    pub client: Client,
    pub base_url: Url,
}

impl CatalogClient {
    /// The timeout bounds every request, so a hung catalog surfaces as a
    /// failed lookup instead of a pending operation.
    pub fn new(base_url: Url, timeout: Duration) -> Self {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_default();

        Self { client, base_url }
    }

    /// Returns the stock endpoint URL for a product.
    pub fn stock_url(&self, product_id: ProductId) -> String {
        self.endpoint("stock", product_id)
    }

    /// Returns the product details endpoint URL.
    pub fn product_url(&self, product_id: ProductId) -> String {
        self.endpoint("products", product_id)
    }

    fn endpoint(&self, resource: &str, product_id: ProductId) -> String {
        format!(
            "{}/{}/{}",
            self.base_url.as_str().trim_end_matches('/'),
            resource,
            product_id
        )
    }
}
