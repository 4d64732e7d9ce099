use std::sync::Arc;

use poem_openapi::{OpenApi, param::Path, payload::Json};

use business::domain::cart::use_cases::add_item::{AddCartItemParams, AddCartItemUseCase};
use business::domain::cart::use_cases::clear::ClearCartUseCase;
use business::domain::cart::use_cases::get_summary::GetCartSummaryUseCase;
use business::domain::cart::use_cases::remove_item::{RemoveCartItemParams, RemoveCartItemUseCase};
use business::domain::cart::use_cases::update_quantity::{
    UpdateCartQuantityParams, UpdateCartQuantityUseCase,
};
use business::domain::shared::value_objects::CustomerId;

use crate::api::cart::dto::{
    AddCartItemRequest, CartItemResponse, CartSummaryResponse, ClearCartResponse,
    UpdateCartQuantityRequest,
};
use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::tags::ApiTags;

pub struct CartApi {
    add_item_use_case: Arc<dyn AddCartItemUseCase>,
    update_quantity_use_case: Arc<dyn UpdateCartQuantityUseCase>,
    remove_item_use_case: Arc<dyn RemoveCartItemUseCase>,
    get_summary_use_case: Arc<dyn GetCartSummaryUseCase>,
    clear_use_case: Arc<dyn ClearCartUseCase>,
}

impl CartApi {
    pub fn new(
        add_item_use_case: Arc<dyn AddCartItemUseCase>,
        update_quantity_use_case: Arc<dyn UpdateCartQuantityUseCase>,
        remove_item_use_case: Arc<dyn RemoveCartItemUseCase>,
        get_summary_use_case: Arc<dyn GetCartSummaryUseCase>,
        clear_use_case: Arc<dyn ClearCartUseCase>,
    ) -> Self {
        Self {
            add_item_use_case,
            update_quantity_use_case,
            remove_item_use_case,
            get_summary_use_case,
            clear_use_case,
        }
    }
}

/// Shopping cart API
///
/// Endpoints for managing a customer's cart. All paths are scoped by the
/// customer identifier.
#[OpenApi]
impl CartApi {
    /// Get the cart
    ///
    /// Returns the cart's line items together with subtotal, tax, shipping,
    /// and total.
    #[oai(
        path = "/customers/:customer_id/cart",
        method = "get",
        tag = "ApiTags::Cart"
    )]
    async fn get_summary(&self, customer_id: Path<String>) -> GetCartResponse {
        match self
            .get_summary_use_case
            .execute(CustomerId::new(customer_id.0))
            .await
        {
            Ok(summary) => GetCartResponse::Ok(Json(summary.into())),
            Err(err) => {
                let (_status, json) = err.into_error_response();
                GetCartResponse::InternalError(json)
            }
        }
    }

    /// Add a product to the cart
    ///
    /// Adds the requested quantity of a product. If the product is already
    /// in the cart, its line quantity is incremented instead of a second
    /// line being created.
    #[oai(
        path = "/customers/:customer_id/cart/items",
        method = "post",
        tag = "ApiTags::Cart"
    )]
    async fn add_item(
        &self,
        customer_id: Path<String>,
        body: Json<AddCartItemRequest>,
    ) -> AddCartItemResponse {
        let params = AddCartItemParams {
            customer_id: CustomerId::new(customer_id.0),
            product_id: body.0.product_id,
            quantity: body.0.quantity,
        };

        match self.add_item_use_case.execute(params).await {
            Ok(item) => AddCartItemResponse::Created(Json(item.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => AddCartItemResponse::BadRequest(json),
                    404 => AddCartItemResponse::NotFound(json),
                    409 => AddCartItemResponse::Conflict(json),
                    _ => AddCartItemResponse::InternalError(json),
                }
            }
        }
    }

    /// Set a line item's quantity
    ///
    /// Sets the quantity of a cart line. A quantity of zero removes the
    /// line entirely.
    #[oai(
        path = "/customers/:customer_id/cart/items/:product_id",
        method = "put",
        tag = "ApiTags::Cart"
    )]
    async fn update_quantity(
        &self,
        customer_id: Path<String>,
        product_id: Path<u32>,
        body: Json<UpdateCartQuantityRequest>,
    ) -> UpdateCartQuantityResponse {
        let params = UpdateCartQuantityParams {
            customer_id: CustomerId::new(customer_id.0),
            product_id: product_id.0,
            quantity: body.0.quantity,
        };

        match self.update_quantity_use_case.execute(params).await {
            Ok(Some(item)) => UpdateCartQuantityResponse::Ok(Json(item.into())),
            Ok(None) => UpdateCartQuantityResponse::NoContent,
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => UpdateCartQuantityResponse::BadRequest(json),
                    404 => UpdateCartQuantityResponse::NotFound(json),
                    _ => UpdateCartQuantityResponse::InternalError(json),
                }
            }
        }
    }

    /// Remove a line item
    ///
    /// Removes a product from the cart regardless of quantity.
    #[oai(
        path = "/customers/:customer_id/cart/items/:product_id",
        method = "delete",
        tag = "ApiTags::Cart"
    )]
    async fn remove_item(
        &self,
        customer_id: Path<String>,
        product_id: Path<u32>,
    ) -> RemoveCartItemResponse {
        let params = RemoveCartItemParams {
            customer_id: CustomerId::new(customer_id.0),
            product_id: product_id.0,
        };

        match self.remove_item_use_case.execute(params).await {
            Ok(()) => RemoveCartItemResponse::NoContent,
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => RemoveCartItemResponse::NotFound(json),
                    _ => RemoveCartItemResponse::InternalError(json),
                }
            }
        }
    }

    /// Empty the cart
    ///
    /// Removes every line item from the customer's cart.
    #[oai(
        path = "/customers/:customer_id/cart",
        method = "delete",
        tag = "ApiTags::Cart"
    )]
    async fn clear(&self, customer_id: Path<String>) -> ClearCartApiResponse {
        match self
            .clear_use_case
            .execute(CustomerId::new(customer_id.0))
            .await
        {
            Ok(count) => ClearCartApiResponse::Ok(Json(ClearCartResponse { count })),
            Err(err) => {
                let (_status, json) = err.into_error_response();
                ClearCartApiResponse::InternalError(json)
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetCartResponse {
    #[oai(status = 200)]
    Ok(Json<CartSummaryResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum AddCartItemResponse {
    #[oai(status = 201)]
    Created(Json<CartItemResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 409)]
    Conflict(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum UpdateCartQuantityResponse {
    #[oai(status = 200)]
    Ok(Json<CartItemResponse>),
    #[oai(status = 204)]
    NoContent,
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum RemoveCartItemResponse {
    #[oai(status = 204)]
    NoContent,
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum ClearCartApiResponse {
    #[oai(status = 200)]
    Ok(Json<ClearCartResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
