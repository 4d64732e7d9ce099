use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::repository::CartRepository;
use crate::domain::cart::use_cases::remove_item::{RemoveCartItemParams, RemoveCartItemUseCase};
use crate::domain::logger::Logger;

pub struct RemoveCartItemUseCaseImpl {
    pub repository: Arc<dyn CartRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl RemoveCartItemUseCase for RemoveCartItemUseCaseImpl {
    async fn execute(&self, params: RemoveCartItemParams) -> Result<(), CartError> {
        self.logger.info(&format!(
            "Removing product {} from cart of customer {}",
            params.product_id, params.customer_id
        ));

        self.repository
            .find_item(&params.customer_id, params.product_id)
            .await?
            .ok_or(CartError::ItemNotFound)?;

        self.repository
            .remove_item(&params.customer_id, params.product_id)
            .await?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use bigdecimal::BigDecimal;
    use mockall::mock;

    use super::*;
    use crate::domain::cart::model::CartLineItem;
    use crate::domain::catalog::model::{Product, ProductCategory};
    use crate::domain::errors::RepositoryError;
    use crate::domain::shared::value_objects::CustomerId;

    mock! {
        pub CartRepo {}

        #[async_trait]
        impl CartRepository for CartRepo {
            async fn get_items(&self, customer_id: &CustomerId) -> Result<Vec<CartLineItem>, RepositoryError>;
            async fn find_item(&self, customer_id: &CustomerId, product_id: u32) -> Result<Option<CartLineItem>, RepositoryError>;
            async fn save_item(&self, customer_id: &CustomerId, item: &CartLineItem) -> Result<(), RepositoryError>;
            async fn remove_item(&self, customer_id: &CustomerId, product_id: u32) -> Result<(), RepositoryError>;
            async fn clear(&self, customer_id: &CustomerId) -> Result<u64, RepositoryError>;
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

    fn line(product_id: u32) -> CartLineItem {
        let product = Product {
            id: product_id,
            name: "Organic Compost".to_string(),
            short_description: "Premium organic compost for gardens".to_string(),
            description: "High-quality organic compost.".to_string(),
            price: BigDecimal::from(25),
            original_price: None,
            category: ProductCategory::Organic,
            rating: 4.8,
            review_count: 124,
            in_stock: true,
            is_on_sale: false,
            features: vec![],
            specifications: BTreeMap::new(),
        };
        CartLineItem::from_repository(product, 1)
    }

    #[tokio::test]
    async fn should_remove_existing_line() {
        let mut repo = MockCartRepo::new();
        repo.expect_find_item()
            .returning(|_, id| Ok(Some(line(id))));
        repo.expect_remove_item().returning(|_, _| Ok(()));

        let use_case = RemoveCartItemUseCaseImpl {
            repository: Arc::new(repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(RemoveCartItemParams {
                customer_id: CustomerId::new("test-customer"),
                product_id: 1,
            })
            .await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn should_reject_missing_line() {
        let mut repo = MockCartRepo::new();
        repo.expect_find_item().returning(|_, _| Ok(None));

        let use_case = RemoveCartItemUseCaseImpl {
            repository: Arc::new(repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(RemoveCartItemParams {
                customer_id: CustomerId::new("test-customer"),
                product_id: 1,
            })
            .await;

        assert!(matches!(result.unwrap_err(), CartError::ItemNotFound));
    }
}
