use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::repository::CartRepository;
use crate::domain::cart::use_cases::clear::ClearCartUseCase;
use crate::domain::logger::Logger;
use crate::domain::shared::value_objects::CustomerId;

pub struct ClearCartUseCaseImpl {
    pub repository: Arc<dyn CartRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl ClearCartUseCase for ClearCartUseCaseImpl {
    async fn execute(&self, customer_id: CustomerId) -> Result<u64, CartError> {
        self.logger
            .info(&format!("Clearing cart for customer {}", customer_id));

        let count = self.repository.clear(&customer_id).await?;

        self.logger.info(&format!("Cleared {} cart lines", count));
        Ok(count)
    }
}
