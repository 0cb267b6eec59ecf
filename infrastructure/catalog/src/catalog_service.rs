use async_trait::async_trait;
use reqwest::StatusCode;
use serde::Deserialize;

use business::domain::catalog::errors::CatalogError;
use business::domain::catalog::model::{Product, StockInfo};
use business::domain::catalog::services::CatalogService;
use business::domain::shared::value_objects::ProductId;

use crate::client::CatalogClient;

#[derive(Deserialize)]
struct StockResponse {
    amount: i64,
}

impl StockResponse {
    // Negative stock means nothing is available.
    fn into_domain(self, product_id: ProductId) -> StockInfo {
        StockInfo {
            id: product_id,
            amount: u32::try_from(self.amount.max(0)).unwrap_or(u32::MAX),
        }
    }
}

#[derive(Deserialize)]
struct ProductResponse {
    id: u64,
    title: String,
    price: f64,
    image: String,
}

impl ProductResponse {
    fn into_domain(self) -> Product {
        Product {
            id: ProductId::new(self.id),
            title: self.title,
            price: self.price,
            image_url: self.image,
        }
    }
}

pub struct CatalogServiceHttp {
    client: CatalogClient,
}

impl CatalogServiceHttp {
    pub fn new(client: CatalogClient) -> Self {
        Self { client }
    }

    fn error_for_status(status: StatusCode) -> CatalogError {
        if status == StatusCode::NOT_FOUND {
            CatalogError::NotFound
        } else {
            CatalogError::Unavailable
        }
    }

    async fn fetch<T: serde::de::DeserializeOwned>(&self, url: &str) -> Result<T, CatalogError> {
        let response = self
            .client
            .client
            .get(url)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|_| CatalogError::Unavailable)?;

        if !response.status().is_success() {
            return Err(Self::error_for_status(response.status()));
        }

        response
            .json::<T>()
            .await
            .map_err(|_| CatalogError::MalformedResponse)
    }
}

#[async_trait]
impl CatalogService for CatalogServiceHttp {
    async fn get_stock(&self, product_id: ProductId) -> Result<StockInfo, CatalogError> {
        let data: StockResponse = self.fetch(&self.client.stock_url(product_id)).await?;

        Ok(data.into_domain(product_id))
    }

    async fn get_product(&self, product_id: ProductId) -> Result<Product, CatalogError> {
        let data: ProductResponse = self.fetch(&self.client.product_url(product_id)).await?;

        if data.id != product_id.value() {
            return Err(CatalogError::MalformedResponse);
        }

        Ok(data.into_domain())
    }
}
