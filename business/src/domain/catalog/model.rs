use crate::domain::shared::value_objects::ProductId;

/// Product details as published by the catalog. Carries no quantity.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: ProductId,
    pub title: String,
    pub price: f64,
    pub image_url: String,
}

/// Available quantity for a product at the moment it was fetched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StockInfo {
    pub id: ProductId,
    pub amount: u32,
}
