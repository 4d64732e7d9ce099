use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::pickup::errors::PickupError;
use crate::domain::pickup::repository::PickupRequestRepository;
use crate::domain::pickup::use_cases::cancel::{
    CancelPickupRequestParams, CancelPickupRequestUseCase,
};

pub struct CancelPickupRequestUseCaseImpl {
    pub repository: Arc<dyn PickupRequestRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl CancelPickupRequestUseCase for CancelPickupRequestUseCaseImpl {
    async fn execute(&self, params: CancelPickupRequestParams) -> Result<(), PickupError> {
        self.logger.info(&format!(
            "Cancelling pickup request {} for industry {}",
            params.request_id, params.industry_id
        ));

        let request = self
            .repository
            .get_by_id(&params.request_id, &params.industry_id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => PickupError::NotFound,
                other => PickupError::Repository(other),
            })?;

        if !request.is_cancellable() {
            return Err(PickupError::NotCancellable);
        }

        self.repository
            .delete(&params.request_id, &params.industry_id)
            .await?;

        self.logger
            .info(&format!("Pickup request {} cancelled", params.request_id));
        Ok(())
    }
}
