use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::industry::errors::IndustryError;
use crate::domain::industry::model::{IndustryUser, NewIndustryProps};
use crate::domain::industry::repository::IndustryRepository;
use crate::domain::industry::use_cases::register::{RegisterIndustryParams, RegisterIndustryUseCase};
use crate::domain::logger::Logger;
use crate::domain::shared::services::LocationResolver;
use crate::domain::shared::value_objects::PasswordDigest;

pub struct RegisterIndustryUseCaseImpl {
    pub repository: Arc<dyn IndustryRepository>,
    pub location_resolver: Arc<dyn LocationResolver>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl RegisterIndustryUseCase for RegisterIndustryUseCaseImpl {
    async fn execute(&self, params: RegisterIndustryParams) -> Result<IndustryUser, IndustryError> {
        self.logger
            .info(&format!("Registering industry {}", params.industry_name));

        if params.password != params.confirm_password {
            return Err(IndustryError::PasswordMismatch);
        }

        let mut address = params.address;
        if address.trim().is_empty()
            && let (Some(lat), Some(lng)) = (params.latitude, params.longitude)
        {
            let resolved = self.location_resolver.reverse_lookup(lat, lng).await;
            self.logger.info(&format!(
                "Resolved industry address from coordinates (precise: {})",
                resolved.precise
            ));
            address = resolved.address;
        }

        let industry = IndustryUser::new(NewIndustryProps {
            industry_name: params.industry_name,
            contact_person: params.contact_person,
            email: params.email,
            phone: params.phone,
            waste_types: params.waste_types,
            address,
            latitude: params.latitude,
            longitude: params.longitude,
            description: params.description,
            password_digest: PasswordDigest::from_raw(&params.password),
        })?;

        self.repository.save(&industry).await?;

        self.logger
            .info(&format!("Industry registered with id {}", industry.id));
        Ok(industry)
    }
}

#[cfg(test)]
mod tests {
    use mockall::mock;

    use super::*;
    use crate::domain::errors::RepositoryError;
    use crate::domain::pickup::model::WasteType;
    use crate::domain::shared::services::ResolvedAddress;
    use crate::domain::shared::value_objects::IndustryId;

    mock! {
        pub IndustryRepo {}

        #[async_trait]
        impl IndustryRepository for IndustryRepo {
            async fn get_by_id(&self, id: &IndustryId) -> Result<IndustryUser, RepositoryError>;
            async fn save(&self, industry: &IndustryUser) -> Result<(), RepositoryError>;
        }
    }

    mock! {
        pub Resolver {}

        #[async_trait]
        impl LocationResolver for Resolver {
            async fn reverse_lookup(&self, latitude: f64, longitude: f64) -> ResolvedAddress;
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

    fn params() -> RegisterIndustryParams {
        RegisterIndustryParams {
            industry_name: "Cascade Bottling Co".to_string(),
            contact_person: "Mike Chen".to_string(),
            email: "ops@cascadebottling.example".to_string(),
            password: "hunter2".to_string(),
            confirm_password: "hunter2".to_string(),
            phone: "555-0177".to_string(),
            waste_types: vec![WasteType::Plastic, WasteType::Glass],
            address: "400 Industrial Way".to_string(),
            latitude: None,
            longitude: None,
            description: Some("Beverage bottling plant".to_string()),
        }
    }

    #[tokio::test]
    async fn should_register_industry() {
        let mut repo = MockIndustryRepo::new();
        repo.expect_save().returning(|_| Ok(()));

        let use_case = RegisterIndustryUseCaseImpl {
            repository: Arc::new(repo),
            location_resolver: Arc::new(MockResolver::new()),
            logger: mock_logger(),
        };

        let industry = use_case.execute(params()).await.unwrap();

        assert_eq!(industry.industry_name, "Cascade Bottling Co");
        assert!(industry.handles_waste_type(WasteType::Plastic));
    }

    #[tokio::test]
    async fn should_reject_mismatched_password_confirmation() {
        let use_case = RegisterIndustryUseCaseImpl {
            repository: Arc::new(MockIndustryRepo::new()),
            location_resolver: Arc::new(MockResolver::new()),
            logger: mock_logger(),
        };

        let mut mismatched = params();
        mismatched.confirm_password = "different".to_string();

        let result = use_case.execute(mismatched).await;

        assert!(matches!(result.unwrap_err(), IndustryError::PasswordMismatch));
    }

    #[tokio::test]
    async fn should_require_at_least_one_waste_type() {
        let use_case = RegisterIndustryUseCaseImpl {
            repository: Arc::new(MockIndustryRepo::new()),
            location_resolver: Arc::new(MockResolver::new()),
            logger: mock_logger(),
        };

        let mut invalid = params();
        invalid.waste_types.clear();

        let result = use_case.execute(invalid).await;

        assert!(matches!(result.unwrap_err(), IndustryError::NoWasteTypes));
    }

    #[tokio::test]
    async fn should_fall_back_to_coordinate_address() {
        let mut repo = MockIndustryRepo::new();
        repo.expect_save().returning(|_| Ok(()));

        let mut resolver = MockResolver::new();
        resolver
            .expect_reverse_lookup()
            .returning(|lat, lng| ResolvedAddress::from_coordinates(lat, lng));

        let use_case = RegisterIndustryUseCaseImpl {
            repository: Arc::new(repo),
            location_resolver: Arc::new(resolver),
            logger: mock_logger(),
        };

        let mut detected = params();
        detected.address = "".to_string();
        detected.latitude = Some(45.523064);
        detected.longitude = Some(-122.676483);

        let industry = use_case.execute(detected).await.unwrap();

        assert_eq!(industry.address, "Lat: 45.523064, Lng: -122.676483");
    }
}
