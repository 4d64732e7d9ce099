use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::customer::errors::CustomerError;
use crate::domain::customer::model::{Customer, NewCustomerProps};
use crate::domain::customer::repository::CustomerRepository;
use crate::domain::customer::use_cases::register::{RegisterCustomerParams, RegisterCustomerUseCase};
use crate::domain::logger::Logger;
use crate::domain::shared::services::LocationResolver;
use crate::domain::shared::value_objects::PasswordDigest;

pub struct RegisterCustomerUseCaseImpl {
    pub repository: Arc<dyn CustomerRepository>,
    pub location_resolver: Arc<dyn LocationResolver>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl RegisterCustomerUseCase for RegisterCustomerUseCaseImpl {
    async fn execute(&self, params: RegisterCustomerParams) -> Result<Customer, CustomerError> {
        self.logger
            .info(&format!("Registering customer {}", params.email));

        if params.password != params.confirm_password {
            return Err(CustomerError::PasswordMismatch);
        }

        // Detected coordinates stand in for a typed address when the field
        // was left blank.
        let mut address = params.address;
        if address.trim().is_empty()
            && let (Some(lat), Some(lng)) = (params.latitude, params.longitude)
        {
            let resolved = self.location_resolver.reverse_lookup(lat, lng).await;
            self.logger.info(&format!(
                "Resolved registration address from coordinates (precise: {})",
                resolved.precise
            ));
            address = resolved.address;
        }

        let customer = Customer::new(NewCustomerProps {
            name: params.name,
            email: params.email,
            phone: params.phone,
            address,
            city: params.city,
            zip_code: params.zip_code,
            latitude: params.latitude,
            longitude: params.longitude,
            password_digest: PasswordDigest::from_raw(&params.password),
        })?;

        self.repository.save(&customer).await?;

        self.logger
            .info(&format!("Customer registered with id {}", customer.id));
        Ok(customer)
    }
}

#[cfg(test)]
mod tests {
    use mockall::mock;

    use super::*;
    use crate::domain::errors::RepositoryError;
    use crate::domain::shared::services::ResolvedAddress;
    use crate::domain::shared::value_objects::CustomerId;

    mock! {
        pub CustomerRepo {}

        #[async_trait]
        impl CustomerRepository for CustomerRepo {
            async fn get_by_id(&self, id: &CustomerId) -> Result<Customer, RepositoryError>;
            async fn save(&self, customer: &Customer) -> Result<(), RepositoryError>;
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

    fn params() -> RegisterCustomerParams {
        RegisterCustomerParams {
            name: "Sarah Johnson".to_string(),
            email: "sarah@example.com".to_string(),
            password: "hunter2".to_string(),
            confirm_password: "hunter2".to_string(),
            phone: "555-0101".to_string(),
            address: "12 Garden Lane".to_string(),
            city: "Portland".to_string(),
            zip_code: "97201".to_string(),
            latitude: None,
            longitude: None,
        }
    }

    #[tokio::test]
    async fn should_register_customer_with_hashed_password() {
        let mut repo = MockCustomerRepo::new();
        repo.expect_save().returning(|_| Ok(()));

        let use_case = RegisterCustomerUseCaseImpl {
            repository: Arc::new(repo),
            location_resolver: Arc::new(MockResolver::new()),
            logger: mock_logger(),
        };

        let customer = use_case.execute(params()).await.unwrap();

        assert_eq!(customer.email, "sarah@example.com");
        assert_ne!(customer.password_digest.as_str(), "hunter2");
    }

    #[tokio::test]
    async fn should_reject_mismatched_password_confirmation() {
        let use_case = RegisterCustomerUseCaseImpl {
            repository: Arc::new(MockCustomerRepo::new()),
            location_resolver: Arc::new(MockResolver::new()),
            logger: mock_logger(),
        };

        let mut mismatched = params();
        mismatched.confirm_password = "hunter3".to_string();

        let result = use_case.execute(mismatched).await;

        assert!(matches!(result.unwrap_err(), CustomerError::PasswordMismatch));
    }

    #[tokio::test]
    async fn should_resolve_address_from_coordinates_when_blank() {
        let mut repo = MockCustomerRepo::new();
        repo.expect_save().returning(|_| Ok(()));

        let mut resolver = MockResolver::new();
        resolver.expect_reverse_lookup().returning(|_, _| ResolvedAddress {
            address: "12 Garden Lane, Portland, OR".to_string(),
            precise: true,
        });

        let use_case = RegisterCustomerUseCaseImpl {
            repository: Arc::new(repo),
            location_resolver: Arc::new(resolver),
            logger: mock_logger(),
        };

        let mut detected = params();
        detected.address = "".to_string();
        detected.latitude = Some(45.523064);
        detected.longitude = Some(-122.676483);

        let customer = use_case.execute(detected).await.unwrap();

        assert_eq!(customer.address, "12 Garden Lane, Portland, OR");
    }

    #[tokio::test]
    async fn should_reject_blank_required_field() {
        let use_case = RegisterCustomerUseCaseImpl {
            repository: Arc::new(MockCustomerRepo::new()),
            location_resolver: Arc::new(MockResolver::new()),
            logger: mock_logger(),
        };

        let mut invalid = params();
        invalid.phone = "".to_string();

        let result = use_case.execute(invalid).await;

        assert!(matches!(result.unwrap_err(), CustomerError::FieldEmpty));
    }
}
