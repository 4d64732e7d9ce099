use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::CartSummary;
use crate::domain::cart::pricing;
use crate::domain::cart::repository::CartRepository;
use crate::domain::cart::use_cases::get_summary::GetCartSummaryUseCase;
use crate::domain::logger::Logger;
use crate::domain::shared::value_objects::CustomerId;

pub struct GetCartSummaryUseCaseImpl {
    pub repository: Arc<dyn CartRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetCartSummaryUseCase for GetCartSummaryUseCaseImpl {
    async fn execute(&self, customer_id: CustomerId) -> Result<CartSummary, CartError> {
        self.logger
            .debug(&format!("Summarizing cart for customer {}", customer_id));

        let items = self.repository.get_items(&customer_id).await?;
        let totals = pricing::quote(&items)?;

        Ok(CartSummary { items, totals })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;
    use std::str::FromStr;

    use bigdecimal::BigDecimal;
    use mockall::mock;

    use super::*;
    use crate::domain::cart::model::CartLineItem;
    use crate::domain::catalog::model::{Product, ProductCategory};
    use crate::domain::errors::RepositoryError;

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

    fn line(price: i64, quantity: u32) -> CartLineItem {
        let product = Product {
            id: quantity,
            name: "Recycled Plastic Planters".to_string(),
            short_description: "Durable planters from recycled plastic".to_string(),
            description: "Beautiful and durable planters.".to_string(),
            price: BigDecimal::from(price),
            original_price: None,
            category: ProductCategory::Plastic,
            rating: 4.6,
            review_count: 89,
            in_stock: true,
            is_on_sale: false,
            features: vec![],
            specifications: BTreeMap::new(),
        };
        CartLineItem::from_repository(product, quantity)
    }

    #[tokio::test]
    async fn should_return_items_with_totals() {
        let mut repo = MockCartRepo::new();
        repo.expect_get_items()
            .returning(|_| Ok(vec![line(25, 2), line(35, 1)]));

        let use_case = GetCartSummaryUseCaseImpl {
            repository: Arc::new(repo),
            logger: mock_logger(),
        };

        let summary = use_case
            .execute(CustomerId::new("test-customer"))
            .await
            .unwrap();

        assert_eq!(summary.items.len(), 2);
        assert_eq!(summary.totals.subtotal, BigDecimal::from(85));
        assert_eq!(summary.totals.total, BigDecimal::from_str("91.80").unwrap());
    }

    #[tokio::test]
    async fn should_summarize_empty_cart_with_flat_shipping() {
        let mut repo = MockCartRepo::new();
        repo.expect_get_items().returning(|_| Ok(vec![]));

        let use_case = GetCartSummaryUseCaseImpl {
            repository: Arc::new(repo),
            logger: mock_logger(),
        };

        let summary = use_case
            .execute(CustomerId::new("test-customer"))
            .await
            .unwrap();

        assert!(summary.items.is_empty());
        assert_eq!(summary.totals.total, BigDecimal::from_str("9.99").unwrap());
    }
}
