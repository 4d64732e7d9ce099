use std::sync::Arc;

use poem_openapi::{OpenApi, param::Path, payload::Json};

use business::domain::order::model::{OrderStatus, PaymentMethod, ShippingAddress};
use business::domain::order::use_cases::get_all::GetAllOrdersUseCase;
use business::domain::order::use_cases::get_by_id::{GetOrderByIdParams, GetOrderByIdUseCase};
use business::domain::order::use_cases::place::{PlaceOrderParams, PlaceOrderUseCase};
use business::domain::order::use_cases::update_status::{
    UpdateOrderStatusParams, UpdateOrderStatusUseCase,
};
use business::domain::shared::value_objects::CustomerId;

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::order::dto::{OrderResponse, PlaceOrderRequest, UpdateOrderStatusRequest};
use crate::api::tags::ApiTags;

pub struct OrderApi {
    place_use_case: Arc<dyn PlaceOrderUseCase>,
    get_all_use_case: Arc<dyn GetAllOrdersUseCase>,
    get_by_id_use_case: Arc<dyn GetOrderByIdUseCase>,
    update_status_use_case: Arc<dyn UpdateOrderStatusUseCase>,
}

impl OrderApi {
    pub fn new(
        place_use_case: Arc<dyn PlaceOrderUseCase>,
        get_all_use_case: Arc<dyn GetAllOrdersUseCase>,
        get_by_id_use_case: Arc<dyn GetOrderByIdUseCase>,
        update_status_use_case: Arc<dyn UpdateOrderStatusUseCase>,
    ) -> Self {
        Self {
            place_use_case,
            get_all_use_case,
            get_by_id_use_case,
            update_status_use_case,
        }
    }
}

/// Order API
///
/// Checkout and order history, scoped by customer.
#[OpenApi]
impl OrderApi {
    /// Place an order
    ///
    /// Checks out the customer's cart: authorizes payment, snapshots the
    /// cart into an order, and empties the cart. The cart must not be
    /// empty.
    #[oai(
        path = "/customers/:customer_id/orders",
        method = "post",
        tag = "ApiTags::Orders"
    )]
    async fn place(
        &self,
        customer_id: Path<String>,
        body: Json<PlaceOrderRequest>,
    ) -> PlaceOrderResponse {
        let payment_method = match body.0.payment_method.parse::<PaymentMethod>() {
            Ok(method) => method,
            Err(_) => {
                return PlaceOrderResponse::BadRequest(Json(ErrorResponse {
                    name: "ValidationError".to_string(),
                    message: "order.unknown_payment_method".to_string(),
                }));
            }
        };

        let address = body.0.shipping_address;
        let shipping_address = match ShippingAddress::new(
            address.first_name,
            address.last_name,
            address.address,
            address.city,
            address.state,
            address.zip_code,
            address.country,
        ) {
            Ok(parsed) => parsed,
            Err(err) => {
                let (_status, json) = err.into_error_response();
                return PlaceOrderResponse::BadRequest(json);
            }
        };

        let params = PlaceOrderParams {
            customer_id: CustomerId::new(customer_id.0),
            shipping_address,
            payment_method,
        };

        match self.place_use_case.execute(params).await {
            Ok(order) => PlaceOrderResponse::Created(Json(order.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => PlaceOrderResponse::BadRequest(json),
                    402 => PlaceOrderResponse::PaymentRequired(json),
                    _ => PlaceOrderResponse::InternalError(json),
                }
            }
        }
    }

    /// List orders
    ///
    /// Returns the customer's order history, newest first.
    #[oai(
        path = "/customers/:customer_id/orders",
        method = "get",
        tag = "ApiTags::Orders"
    )]
    async fn get_all(&self, customer_id: Path<String>) -> GetAllOrdersResponse {
        match self
            .get_all_use_case
            .execute(CustomerId::new(customer_id.0))
            .await
        {
            Ok(orders) => {
                let responses: Vec<OrderResponse> =
                    orders.into_iter().map(|o| o.into()).collect();
                GetAllOrdersResponse::Ok(Json(responses))
            }
            Err(err) => {
                let (_status, json) = err.into_error_response();
                GetAllOrdersResponse::InternalError(json)
            }
        }
    }

    /// Get an order
    ///
    /// Returns one order for tracking.
    #[oai(
        path = "/customers/:customer_id/orders/:order_id",
        method = "get",
        tag = "ApiTags::Orders"
    )]
    async fn get_by_id(
        &self,
        customer_id: Path<String>,
        order_id: Path<String>,
    ) -> GetOrderResponse {
        let params = GetOrderByIdParams {
            customer_id: CustomerId::new(customer_id.0),
            order_id: order_id.0,
        };

        match self.get_by_id_use_case.execute(params).await {
            Ok(order) => GetOrderResponse::Ok(Json(order.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => GetOrderResponse::NotFound(json),
                    _ => GetOrderResponse::InternalError(json),
                }
            }
        }
    }

    /// Update an order's status
    ///
    /// Applies the fulfilment status reported by the (simulated) carrier.
    #[oai(
        path = "/customers/:customer_id/orders/:order_id/status",
        method = "put",
        tag = "ApiTags::Orders"
    )]
    async fn update_status(
        &self,
        customer_id: Path<String>,
        order_id: Path<String>,
        body: Json<UpdateOrderStatusRequest>,
    ) -> UpdateOrderStatusResponse {
        let status = match body.0.status.parse::<OrderStatus>() {
            Ok(parsed) => parsed,
            Err(_) => {
                return UpdateOrderStatusResponse::BadRequest(Json(ErrorResponse {
                    name: "ValidationError".to_string(),
                    message: "order.unknown_status".to_string(),
                }));
            }
        };

        let params = UpdateOrderStatusParams {
            customer_id: CustomerId::new(customer_id.0),
            order_id: order_id.0,
            status,
        };

        match self.update_status_use_case.execute(params).await {
            Ok(order) => UpdateOrderStatusResponse::Ok(Json(order.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => UpdateOrderStatusResponse::BadRequest(json),
                    404 => UpdateOrderStatusResponse::NotFound(json),
                    _ => UpdateOrderStatusResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum PlaceOrderResponse {
    #[oai(status = 201)]
    Created(Json<OrderResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 402)]
    PaymentRequired(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetAllOrdersResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<OrderResponse>>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetOrderResponse {
    #[oai(status = 200)]
    Ok(Json<OrderResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum UpdateOrderStatusResponse {
    #[oai(status = 200)]
    Ok(Json<OrderResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
