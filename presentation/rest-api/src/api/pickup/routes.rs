use std::sync::Arc;

use poem_openapi::{OpenApi, param::Path, payload::Json};

use business::domain::pickup::model::{PickupStatus, WasteType};
use business::domain::pickup::use_cases::cancel::{
    CancelPickupRequestParams, CancelPickupRequestUseCase,
};
use business::domain::pickup::use_cases::create::{
    CreatePickupRequestParams, CreatePickupRequestUseCase,
};
use business::domain::pickup::use_cases::get_all::GetAllPickupRequestsUseCase;
use business::domain::pickup::use_cases::update_status::{
    UpdatePickupStatusParams, UpdatePickupStatusUseCase,
};
use business::domain::shared::value_objects::IndustryId;

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::pickup::dto::{
    CreatePickupRequestRequest, PickupRequestResponse, UpdatePickupStatusRequest,
};
use crate::api::tags::ApiTags;

pub struct PickupApi {
    create_use_case: Arc<dyn CreatePickupRequestUseCase>,
    get_all_use_case: Arc<dyn GetAllPickupRequestsUseCase>,
    cancel_use_case: Arc<dyn CancelPickupRequestUseCase>,
    update_status_use_case: Arc<dyn UpdatePickupStatusUseCase>,
}

impl PickupApi {
    pub fn new(
        create_use_case: Arc<dyn CreatePickupRequestUseCase>,
        get_all_use_case: Arc<dyn GetAllPickupRequestsUseCase>,
        cancel_use_case: Arc<dyn CancelPickupRequestUseCase>,
        update_status_use_case: Arc<dyn UpdatePickupStatusUseCase>,
    ) -> Self {
        Self {
            create_use_case,
            get_all_use_case,
            cancel_use_case,
            update_status_use_case,
        }
    }
}

/// Waste pickup request API
///
/// Endpoints for submitting and tracking waste collection requests, scoped
/// by industry.
#[OpenApi]
impl PickupApi {
    /// Submit a pickup request
    ///
    /// Creates a pending request for the given waste type and amount. The
    /// waste type must be one the industry declared at registration.
    #[oai(
        path = "/industries/:industry_id/pickup-requests",
        method = "post",
        tag = "ApiTags::PickupRequests"
    )]
    async fn create(
        &self,
        industry_id: Path<String>,
        body: Json<CreatePickupRequestRequest>,
    ) -> CreatePickupResponse {
        let waste_type = match body.0.waste_type.parse::<WasteType>() {
            Ok(parsed) => parsed,
            Err(_) => {
                return CreatePickupResponse::BadRequest(Json(ErrorResponse {
                    name: "ValidationError".to_string(),
                    message: "pickup.unknown_waste_type".to_string(),
                }));
            }
        };

        let params = CreatePickupRequestParams {
            industry_id: IndustryId::new(industry_id.0),
            waste_type,
            amount_kg: body.0.amount_kg,
            notes: body.0.notes,
        };

        match self.create_use_case.execute(params).await {
            Ok(request) => CreatePickupResponse::Created(Json(request.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => CreatePickupResponse::BadRequest(json),
                    404 => CreatePickupResponse::NotFound(json),
                    _ => CreatePickupResponse::InternalError(json),
                }
            }
        }
    }

    /// List pickup requests
    ///
    /// Returns the industry's requests, newest first.
    #[oai(
        path = "/industries/:industry_id/pickup-requests",
        method = "get",
        tag = "ApiTags::PickupRequests"
    )]
    async fn get_all(&self, industry_id: Path<String>) -> GetAllPickupsResponse {
        match self
            .get_all_use_case
            .execute(IndustryId::new(industry_id.0))
            .await
        {
            Ok(requests) => {
                let responses: Vec<PickupRequestResponse> =
                    requests.into_iter().map(|r| r.into()).collect();
                GetAllPickupsResponse::Ok(Json(responses))
            }
            Err(err) => {
                let (_status, json) = err.into_error_response();
                GetAllPickupsResponse::InternalError(json)
            }
        }
    }

    /// Cancel a pickup request
    ///
    /// Withdraws a request that is still pending or assigned. Requests
    /// already picked up cannot be cancelled.
    #[oai(
        path = "/industries/:industry_id/pickup-requests/:request_id",
        method = "delete",
        tag = "ApiTags::PickupRequests"
    )]
    async fn cancel(
        &self,
        industry_id: Path<String>,
        request_id: Path<String>,
    ) -> CancelPickupResponse {
        let params = CancelPickupRequestParams {
            industry_id: IndustryId::new(industry_id.0),
            request_id: request_id.0,
        };

        match self.cancel_use_case.execute(params).await {
            Ok(()) => CancelPickupResponse::NoContent,
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => CancelPickupResponse::NotFound(json),
                    409 => CancelPickupResponse::Conflict(json),
                    _ => CancelPickupResponse::InternalError(json),
                }
            }
        }
    }

    /// Update a pickup request's status
    ///
    /// Applies the status reported by the (simulated) collection
    /// dispatcher.
    #[oai(
        path = "/industries/:industry_id/pickup-requests/:request_id/status",
        method = "put",
        tag = "ApiTags::PickupRequests"
    )]
    async fn update_status(
        &self,
        industry_id: Path<String>,
        request_id: Path<String>,
        body: Json<UpdatePickupStatusRequest>,
    ) -> UpdatePickupStatusResponse {
        let status = match body.0.status.parse::<PickupStatus>() {
            Ok(parsed) => parsed,
            Err(_) => {
                return UpdatePickupStatusResponse::BadRequest(Json(ErrorResponse {
                    name: "ValidationError".to_string(),
                    message: "pickup.unknown_status".to_string(),
                }));
            }
        };

        let params = UpdatePickupStatusParams {
            industry_id: IndustryId::new(industry_id.0),
            request_id: request_id.0,
            status,
        };

        match self.update_status_use_case.execute(params).await {
            Ok(request) => UpdatePickupStatusResponse::Ok(Json(request.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => UpdatePickupStatusResponse::BadRequest(json),
                    404 => UpdatePickupStatusResponse::NotFound(json),
                    _ => UpdatePickupStatusResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum CreatePickupResponse {
    #[oai(status = 201)]
    Created(Json<PickupRequestResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetAllPickupsResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<PickupRequestResponse>>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum CancelPickupResponse {
    #[oai(status = 204)]
    NoContent,
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 409)]
    Conflict(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum UpdatePickupStatusResponse {
    #[oai(status = 200)]
    Ok(Json<PickupRequestResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
