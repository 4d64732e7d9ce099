use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::pickup::errors::PickupError;
use crate::domain::pickup::model::PickupRequest;
use crate::domain::pickup::repository::PickupRequestRepository;
use crate::domain::pickup::use_cases::get_all::GetAllPickupRequestsUseCase;
use crate::domain::shared::value_objects::IndustryId;

pub struct GetAllPickupRequestsUseCaseImpl {
    pub repository: Arc<dyn PickupRequestRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetAllPickupRequestsUseCase for GetAllPickupRequestsUseCaseImpl {
    async fn execute(&self, industry_id: IndustryId) -> Result<Vec<PickupRequest>, PickupError> {
        self.logger
            .debug(&format!("Fetching pickup requests for industry {}", industry_id));

        let requests = self.repository.get_all(&industry_id).await?;

        self.logger
            .info(&format!("Found {} pickup requests", requests.len()));
        Ok(requests)
    }
}

#[cfg(test)]
mod tests {
    use mockall::mock;

    use super::*;
    use crate::domain::errors::RepositoryError;
    use crate::domain::pickup::model::WasteType;

    mock! {
        pub PickupRepo {}

        #[async_trait]
        impl PickupRequestRepository for PickupRepo {
            async fn get_all(&self, industry_id: &IndustryId) -> Result<Vec<PickupRequest>, RepositoryError>;
            async fn get_by_id(&self, id: &str, industry_id: &IndustryId) -> Result<PickupRequest, RepositoryError>;
            async fn save(&self, request: &PickupRequest) -> Result<(), RepositoryError>;
            async fn delete(&self, id: &str, industry_id: &IndustryId) -> Result<(), RepositoryError>;
        }
    }

    mock! {
        pub Log {}

        impl Logger for Log {
            fn info(&self, message: &str);
            fn warn(&self, message: &str);
            fn error(&self, message: &str);
            fn debug(&self, message: &str);
        }
    }

    fn mock_logger() -> Arc<dyn Logger> {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().returning(|_| ());
        logger.expect_error().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        Arc::new(logger)
    }

    #[tokio::test]
    async fn should_return_industry_requests() {
        let mut repo = MockPickupRepo::new();
        repo.expect_get_all().returning(|industry_id| {
            Ok(vec![
                PickupRequest::new(industry_id.clone(), WasteType::Plastic, 50, None).unwrap(),
                PickupRequest::new(industry_id.clone(), WasteType::Organic, 30, None).unwrap(),
            ])
        });

        let use_case = GetAllPickupRequestsUseCaseImpl {
            repository: Arc::new(repo),
            logger: mock_logger(),
        };

        let requests = use_case.execute(IndustryId::new("ind-1")).await.unwrap();

        assert_eq!(requests.len(), 2);
    }
}
