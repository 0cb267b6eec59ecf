use std::sync::Arc;

use poem_openapi::{OpenApi, param::Path, payload::Json};

use business::domain::cart::use_cases::add_product::{AddProductParams, AddProductUseCase};
use business::domain::cart::use_cases::get_cart::GetCartUseCase;
use business::domain::cart::use_cases::remove_product::{
    RemoveProductParams, RemoveProductUseCase,
};
use business::domain::cart::use_cases::update_amount::{
    UpdateProductAmountParams, UpdateProductAmountUseCase,
};
use business::domain::shared::value_objects::ProductId;

use crate::api::cart::dto::{CartMutationResponse, CartResponse, UpdateAmountRequest};
use crate::api::cart::error_mapper::CartFailure;
use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::notice::{CartOperation, Notice};
use crate::api::tags::ApiTags;

pub struct CartApi {
    get_cart_use_case: Arc<dyn GetCartUseCase>,
    add_product_use_case: Arc<dyn AddProductUseCase>,
    remove_product_use_case: Arc<dyn RemoveProductUseCase>,
    update_amount_use_case: Arc<dyn UpdateProductAmountUseCase>,
}

impl CartApi {
    pub fn new(
        get_cart_use_case: Arc<dyn GetCartUseCase>,
        add_product_use_case: Arc<dyn AddProductUseCase>,
        remove_product_use_case: Arc<dyn RemoveProductUseCase>,
        update_amount_use_case: Arc<dyn UpdateProductAmountUseCase>,
    ) -> Self {
        Self {
            get_cart_use_case,
            add_product_use_case,
            remove_product_use_case,
            update_amount_use_case,
        }
    }
}

/// Shopping cart API
///
/// Endpoints backing the storefront cart: read it, add a unit of a product,
/// remove a product and set a product's quantity.
#[OpenApi]
impl CartApi {
    /// Get the cart
    ///
    /// Returns the current cart lines in the order they were first added.
    #[oai(path = "/cart", method = "get", tag = "ApiTags::Cart")]
    async fn get_cart(&self) -> Json<CartResponse> {
        Json(self.get_cart_use_case.execute().into())
    }

    /// Add one unit of a product
    ///
    /// Appends the product with amount 1, or adds one unit to its line,
    /// when the catalog has enough stock.
    #[oai(
        path = "/cart/items/:product_id",
        method = "post",
        tag = "ApiTags::Cart"
    )]
    async fn add_product(&self, product_id: Path<u64>) -> AddProductResponse {
        let params = AddProductParams {
            product_id: ProductId::new(product_id.0),
        };

        match self.add_product_use_case.execute(params).await {
            Ok(cart) => AddProductResponse::Ok(Json(CartMutationResponse {
                cart: cart.into(),
                notice: None,
            })),
            Err(err) => {
                let (status, json) =
                    CartFailure::new(CartOperation::Add, err).into_error_response();
                match status.as_u16() {
                    409 => AddProductResponse::Conflict(json),
                    502 => AddProductResponse::BadGateway(json),
                    _ => AddProductResponse::InternalError(json),
                }
            }
        }
    }

    /// Remove a product
    ///
    /// Deletes the product's line from the cart.
    #[oai(
        path = "/cart/items/:product_id",
        method = "delete",
        tag = "ApiTags::Cart"
    )]
    async fn remove_product(&self, product_id: Path<u64>) -> RemoveProductResponse {
        let params = RemoveProductParams {
            product_id: ProductId::new(product_id.0),
        };

        match self.remove_product_use_case.execute(params).await {
            Ok(removed) => RemoveProductResponse::Ok(Json(CartMutationResponse {
                notice: Some(Notice::removed(&removed.line.title)),
                cart: removed.cart.into(),
            })),
            Err(err) => {
                let (status, json) =
                    CartFailure::new(CartOperation::Remove, err).into_error_response();
                match status.as_u16() {
                    404 => RemoveProductResponse::NotFound(json),
                    _ => RemoveProductResponse::InternalError(json),
                }
            }
        }
    }

    /// Set a product's quantity
    ///
    /// Sets the amount of an existing line to exactly the requested value.
    /// Zero or negative amounts, and products not in the cart, leave the
    /// cart unchanged.
    #[oai(
        path = "/cart/items/:product_id/amount",
        method = "put",
        tag = "ApiTags::Cart"
    )]
    async fn update_amount(
        &self,
        product_id: Path<u64>,
        body: Json<UpdateAmountRequest>,
    ) -> UpdateAmountResponse {
        let params = UpdateProductAmountParams {
            product_id: ProductId::new(product_id.0),
            amount: body.0.amount,
        };

        match self.update_amount_use_case.execute(params).await {
            Ok(cart) => UpdateAmountResponse::Ok(Json(CartMutationResponse {
                cart: cart.into(),
                notice: None,
            })),
            Err(err) => {
                let (status, json) =
                    CartFailure::new(CartOperation::UpdateAmount, err).into_error_response();
                match status.as_u16() {
                    409 => UpdateAmountResponse::Conflict(json),
                    502 => UpdateAmountResponse::BadGateway(json),
                    _ => UpdateAmountResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum AddProductResponse {
    #[oai(status = 200)]
    Ok(Json<CartMutationResponse>),
    #[oai(status = 409)]
    Conflict(Json<ErrorResponse>),
    #[oai(status = 502)]
    BadGateway(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum RemoveProductResponse {
    #[oai(status = 200)]
    Ok(Json<CartMutationResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum UpdateAmountResponse {
    #[oai(status = 200)]
    Ok(Json<CartMutationResponse>),
    #[oai(status = 409)]
    Conflict(Json<ErrorResponse>),
    #[oai(status = 502)]
    BadGateway(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
