use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::industry::repository::IndustryRepository;
use crate::domain::logger::Logger;
use crate::domain::pickup::errors::PickupError;
use crate::domain::pickup::model::PickupRequest;
use crate::domain::pickup::repository::PickupRequestRepository;
use crate::domain::pickup::use_cases::create::{
    CreatePickupRequestParams, CreatePickupRequestUseCase,
};

pub struct CreatePickupRequestUseCaseImpl {
    pub repository: Arc<dyn PickupRequestRepository>,
    pub industry_repository: Arc<dyn IndustryRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl CreatePickupRequestUseCase for CreatePickupRequestUseCaseImpl {
    async fn execute(
        &self,
        params: CreatePickupRequestParams,
    ) -> Result<PickupRequest, PickupError> {
        self.logger.info(&format!(
            "Creating pickup request ({} kg of {}) for industry {}",
            params.amount_kg, params.waste_type, params.industry_id
        ));

        let industry = self
            .industry_repository
            .get_by_id(&params.industry_id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => PickupError::IndustryNotFound,
                other => PickupError::Repository(other),
            })?;

        // Only waste types the industry declared at registration are
        // accepted.
        if !industry.handles_waste_type(params.waste_type) {
            return Err(PickupError::WasteTypeNotDeclared);
        }

        let request = PickupRequest::new(
            params.industry_id,
            params.waste_type,
            params.amount_kg,
            params.notes,
        )?;
        self.repository.save(&request).await?;

        self.logger
            .info(&format!("Pickup request {} created", request.id));
        Ok(request)
    }
}
