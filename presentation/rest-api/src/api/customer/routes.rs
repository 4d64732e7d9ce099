use std::sync::Arc;

use poem_openapi::{OpenApi, param::Path, payload::Json};

use business::domain::customer::use_cases::register::{
    RegisterCustomerParams, RegisterCustomerUseCase,
};
use business::domain::customer::use_cases::update_profile::{
    UpdateCustomerProfileParams, UpdateCustomerProfileUseCase,
};
use business::domain::shared::value_objects::CustomerId;

use crate::api::customer::dto::{
    CustomerResponse, RegisterCustomerRequest, UpdateCustomerProfileRequest,
};
use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::tags::ApiTags;

pub struct CustomerApi {
    register_use_case: Arc<dyn RegisterCustomerUseCase>,
    update_profile_use_case: Arc<dyn UpdateCustomerProfileUseCase>,
}

impl CustomerApi {
    pub fn new(
        register_use_case: Arc<dyn RegisterCustomerUseCase>,
        update_profile_use_case: Arc<dyn UpdateCustomerProfileUseCase>,
    ) -> Self {
        Self {
            register_use_case,
            update_profile_use_case,
        }
    }
}

/// Customer account API
#[OpenApi]
impl CustomerApi {
    /// Register a customer
    ///
    /// Creates a consumer account. When the address is left blank and
    /// coordinates are provided, the address is resolved by reverse
    /// geocoding (falling back to the rendered coordinates).
    #[oai(path = "/customers", method = "post", tag = "ApiTags::Customers")]
    async fn register(&self, body: Json<RegisterCustomerRequest>) -> RegisterCustomerResponse {
        let params = RegisterCustomerParams {
            name: body.0.name,
            email: body.0.email,
            password: body.0.password,
            confirm_password: body.0.confirm_password,
            phone: body.0.phone,
            address: body.0.address,
            city: body.0.city,
            zip_code: body.0.zip_code,
            latitude: body.0.latitude,
            longitude: body.0.longitude,
        };

        match self.register_use_case.execute(params).await {
            Ok(customer) => RegisterCustomerResponse::Created(Json(customer.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => RegisterCustomerResponse::BadRequest(json),
                    _ => RegisterCustomerResponse::InternalError(json),
                }
            }
        }
    }

    /// Update a customer profile
    ///
    /// Replaces the editable profile fields; identity and registration date
    /// are preserved.
    #[oai(path = "/customers/:id", method = "put", tag = "ApiTags::Customers")]
    async fn update_profile(
        &self,
        id: Path<String>,
        body: Json<UpdateCustomerProfileRequest>,
    ) -> UpdateCustomerResponse {
        let params = UpdateCustomerProfileParams {
            id: CustomerId::new(id.0),
            name: body.0.name,
            email: body.0.email,
            phone: body.0.phone,
            address: body.0.address,
            city: body.0.city,
            zip_code: body.0.zip_code,
        };

        match self.update_profile_use_case.execute(params).await {
            Ok(customer) => UpdateCustomerResponse::Ok(Json(customer.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => UpdateCustomerResponse::BadRequest(json),
                    404 => UpdateCustomerResponse::NotFound(json),
                    _ => UpdateCustomerResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum RegisterCustomerResponse {
    #[oai(status = 201)]
    Created(Json<CustomerResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum UpdateCustomerResponse {
    #[oai(status = 200)]
    Ok(Json<CustomerResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
