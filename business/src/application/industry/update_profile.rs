use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::industry::errors::IndustryError;
use crate::domain::industry::model::IndustryUser;
use crate::domain::industry::repository::IndustryRepository;
use crate::domain::industry::use_cases::update_profile::{
    UpdateIndustryProfileParams, UpdateIndustryProfileUseCase,
};
use crate::domain::logger::Logger;

pub struct UpdateIndustryProfileUseCaseImpl {
    pub repository: Arc<dyn IndustryRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl UpdateIndustryProfileUseCase for UpdateIndustryProfileUseCaseImpl {
    async fn execute(
        &self,
        params: UpdateIndustryProfileParams,
    ) -> Result<IndustryUser, IndustryError> {
        self.logger
            .info(&format!("Updating profile of industry {}", params.id));

        let required = [
            &params.industry_name,
            &params.contact_person,
            &params.email,
            &params.phone,
            &params.address,
        ];
        if required.iter().any(|f| f.trim().is_empty()) {
            return Err(IndustryError::FieldEmpty);
        }

        if params.waste_types.is_empty() {
            return Err(IndustryError::NoWasteTypes);
        }

        let existing = self
            .repository
            .get_by_id(&params.id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => IndustryError::NotFound,
                other => IndustryError::Repository(other),
            })?;

        let updated = IndustryUser::from_repository(
            existing.id,
            params.industry_name,
            params.contact_person,
            params.email,
            params.phone,
            params.waste_types,
            params.address,
            existing.latitude,
            existing.longitude,
            params.description.filter(|d| !d.trim().is_empty()),
            existing.password_digest,
            existing.registered_at,
        );

        self.repository.save(&updated).await?;

        Ok(updated)
    }
}

#[cfg(test)]
mod tests {
    use mockall::mock;

    use super::*;
    use crate::domain::industry::model::NewIndustryProps;
    use crate::domain::pickup::model::WasteType;
    use crate::domain::shared::value_objects::{IndustryId, PasswordDigest};

    mock! {
        pub IndustryRepo {}

        #[async_trait]
        impl IndustryRepository for IndustryRepo {
            async fn get_by_id(&self, id: &IndustryId) -> Result<IndustryUser, RepositoryError>;
            async fn save(&self, industry: &IndustryUser) -> Result<(), RepositoryError>;
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

    fn existing_industry() -> IndustryUser {
        IndustryUser::new(NewIndustryProps {
            industry_name: "Cascade Bottling Co".to_string(),
            contact_person: "Mike Chen".to_string(),
            email: "ops@cascadebottling.example".to_string(),
            phone: "555-0177".to_string(),
            waste_types: vec![WasteType::Plastic],
            address: "400 Industrial Way".to_string(),
            latitude: None,
            longitude: None,
            description: None,
            password_digest: PasswordDigest::from_raw("hunter2"),
        })
        .unwrap()
    }

    #[tokio::test]
    async fn should_update_declared_waste_types() {
        let original = existing_industry();
        let original_id = original.id.clone();

        let mut repo = MockIndustryRepo::new();
        let fetched = original.clone();
        repo.expect_get_by_id()
            .returning(move |_| Ok(fetched.clone()));
        repo.expect_save().returning(|_| Ok(()));

        let use_case = UpdateIndustryProfileUseCaseImpl {
            repository: Arc::new(repo),
            logger: mock_logger(),
        };

        let updated = use_case
            .execute(UpdateIndustryProfileParams {
                id: original_id.clone(),
                industry_name: "Cascade Bottling Co".to_string(),
                contact_person: "Mike Chen".to_string(),
                email: "ops@cascadebottling.example".to_string(),
                phone: "555-0177".to_string(),
                waste_types: vec![WasteType::Plastic, WasteType::Glass, WasteType::Metal],
                address: "400 Industrial Way".to_string(),
                description: None,
            })
            .await
            .unwrap();

        assert_eq!(updated.id, original_id);
        assert!(updated.handles_waste_type(WasteType::Metal));
    }

    #[tokio::test]
    async fn should_require_at_least_one_waste_type() {
        let use_case = UpdateIndustryProfileUseCaseImpl {
            repository: Arc::new(MockIndustryRepo::new()),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(UpdateIndustryProfileParams {
                id: IndustryId::new("ind-1"),
                industry_name: "Cascade Bottling Co".to_string(),
                contact_person: "Mike Chen".to_string(),
                email: "ops@cascadebottling.example".to_string(),
                phone: "555-0177".to_string(),
                waste_types: vec![],
                address: "400 Industrial Way".to_string(),
                description: None,
            })
            .await;

        assert!(matches!(result.unwrap_err(), IndustryError::NoWasteTypes));
    }
}
