use std::sync::Arc;

use poem_openapi::{OpenApi, param::Path, payload::Json};

use business::domain::industry::use_cases::register::{
    RegisterIndustryParams, RegisterIndustryUseCase,
};
use business::domain::industry::use_cases::update_profile::{
    UpdateIndustryProfileParams, UpdateIndustryProfileUseCase,
};
use business::domain::pickup::model::WasteType;
use business::domain::shared::value_objects::IndustryId;

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::industry::dto::{
    IndustryResponse, RegisterIndustryRequest, UpdateIndustryProfileRequest,
};
use crate::api::tags::ApiTags;

pub struct IndustryApi {
    register_use_case: Arc<dyn RegisterIndustryUseCase>,
    update_profile_use_case: Arc<dyn UpdateIndustryProfileUseCase>,
}

impl IndustryApi {
    pub fn new(
        register_use_case: Arc<dyn RegisterIndustryUseCase>,
        update_profile_use_case: Arc<dyn UpdateIndustryProfileUseCase>,
    ) -> Self {
        Self {
            register_use_case,
            update_profile_use_case,
        }
    }
}

fn parse_waste_types(raw: &[String]) -> Result<Vec<WasteType>, Json<ErrorResponse>> {
    raw.iter()
        .map(|w| w.parse::<WasteType>())
        .collect::<Result<Vec<_>, _>>()
        .map_err(|_| {
            Json(ErrorResponse {
                name: "ValidationError".to_string(),
                message: "pickup.unknown_waste_type".to_string(),
            })
        })
}

/// Industry account API
#[OpenApi]
impl IndustryApi {
    /// Register an industry
    ///
    /// Creates an industrial account with its declared waste types. When
    /// the address is left blank and coordinates are provided, the address
    /// is resolved by reverse geocoding (falling back to the rendered
    /// coordinates).
    #[oai(path = "/industries", method = "post", tag = "ApiTags::Industries")]
    async fn register(&self, body: Json<RegisterIndustryRequest>) -> RegisterIndustryResponse {
        let waste_types = match parse_waste_types(&body.0.waste_types) {
            Ok(parsed) => parsed,
            Err(json) => return RegisterIndustryResponse::BadRequest(json),
        };

        let params = RegisterIndustryParams {
            industry_name: body.0.industry_name,
            contact_person: body.0.contact_person,
            email: body.0.email,
            password: body.0.password,
            confirm_password: body.0.confirm_password,
            phone: body.0.phone,
            waste_types,
            address: body.0.address,
            latitude: body.0.latitude,
            longitude: body.0.longitude,
            description: body.0.description,
        };

        match self.register_use_case.execute(params).await {
            Ok(industry) => RegisterIndustryResponse::Created(Json(industry.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => RegisterIndustryResponse::BadRequest(json),
                    _ => RegisterIndustryResponse::InternalError(json),
                }
            }
        }
    }

    /// Update an industry profile
    ///
    /// Replaces the editable profile fields, including the declared waste
    /// types; identity and registration date are preserved.
    #[oai(path = "/industries/:id", method = "put", tag = "ApiTags::Industries")]
    async fn update_profile(
        &self,
        id: Path<String>,
        body: Json<UpdateIndustryProfileRequest>,
    ) -> UpdateIndustryResponse {
        let waste_types = match parse_waste_types(&body.0.waste_types) {
            Ok(parsed) => parsed,
            Err(json) => return UpdateIndustryResponse::BadRequest(json),
        };

        let params = UpdateIndustryProfileParams {
            id: IndustryId::new(id.0),
            industry_name: body.0.industry_name,
            contact_person: body.0.contact_person,
            email: body.0.email,
            phone: body.0.phone,
            waste_types,
            address: body.0.address,
            description: body.0.description,
        };

        match self.update_profile_use_case.execute(params).await {
            Ok(industry) => UpdateIndustryResponse::Ok(Json(industry.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => UpdateIndustryResponse::BadRequest(json),
                    404 => UpdateIndustryResponse::NotFound(json),
                    _ => UpdateIndustryResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum RegisterIndustryResponse {
    #[oai(status = 201)]
    Created(Json<IndustryResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum UpdateIndustryResponse {
    #[oai(status = 200)]
    Ok(Json<IndustryResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
