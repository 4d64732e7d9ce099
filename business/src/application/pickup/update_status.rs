use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::pickup::errors::PickupError;
use crate::domain::pickup::model::PickupRequest;
use crate::domain::pickup::repository::PickupRequestRepository;
use crate::domain::pickup::use_cases::update_status::{
    UpdatePickupStatusParams, UpdatePickupStatusUseCase,
};

pub struct UpdatePickupStatusUseCaseImpl {
    pub repository: Arc<dyn PickupRequestRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl UpdatePickupStatusUseCase for UpdatePickupStatusUseCaseImpl {
    async fn execute(
        &self,
        params: UpdatePickupStatusParams,
    ) -> Result<PickupRequest, PickupError> {
        self.logger.info(&format!(
            "Setting pickup request {} status to {}",
            params.request_id, params.status
        ));

        let mut request = self
            .repository
            .get_by_id(&params.request_id, &params.industry_id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => PickupError::NotFound,
                other => PickupError::Repository(other),
            })?;

        request.status = params.status;
        self.repository.save(&request).await?;

        Ok(request)
    }
}
