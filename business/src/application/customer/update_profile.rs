use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::customer::errors::CustomerError;
use crate::domain::customer::model::Customer;
use crate::domain::customer::repository::CustomerRepository;
use crate::domain::customer::use_cases::update_profile::{
    UpdateCustomerProfileParams, UpdateCustomerProfileUseCase,
};
use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;

pub struct UpdateCustomerProfileUseCaseImpl {
    pub repository: Arc<dyn CustomerRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl UpdateCustomerProfileUseCase for UpdateCustomerProfileUseCaseImpl {
    async fn execute(
        &self,
        params: UpdateCustomerProfileParams,
    ) -> Result<Customer, CustomerError> {
        self.logger
            .info(&format!("Updating profile of customer {}", params.id));

        let required = [
            &params.name,
            &params.email,
            &params.phone,
            &params.address,
            &params.city,
            &params.zip_code,
        ];
        if required.iter().any(|f| f.trim().is_empty()) {
            return Err(CustomerError::FieldEmpty);
        }

        let existing = self
            .repository
            .get_by_id(&params.id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => CustomerError::NotFound,
                other => CustomerError::Repository(other),
            })?;

        let updated = Customer::from_repository(
            existing.id,
            params.name,
            params.email,
            params.phone,
            params.address,
            params.city,
            params.zip_code,
            existing.latitude,
            existing.longitude,
            existing.password_digest,
            existing.registered_at,
        );

        self.repository.save(&updated).await?;

        Ok(updated)
    }
}
