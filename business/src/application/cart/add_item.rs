use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::cart::errors::CartError;
use crate::domain::cart::model::CartLineItem;
use crate::domain::cart::repository::CartRepository;
use crate::domain::cart::use_cases::add_item::{AddCartItemParams, AddCartItemUseCase};
use crate::domain::catalog::repository::ProductCatalog;
use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;

pub struct AddCartItemUseCaseImpl {
    pub catalog: Arc<dyn ProductCatalog>,
    pub repository: Arc<dyn CartRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl AddCartItemUseCase for AddCartItemUseCaseImpl {
    async fn execute(&self, params: AddCartItemParams) -> Result<CartLineItem, CartError> {
        self.logger.info(&format!(
            "Adding product {} (x{}) to cart of customer {}",
            params.product_id, params.quantity, params.customer_id
        ));

        if params.quantity == 0 {
            return Err(CartError::InvalidLineItem);
        }

        let product = self
            .catalog
            .get_by_id(params.product_id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => CartError::ProductNotFound,
                other => CartError::Repository(other),
            })?;

        if !product.in_stock {
            return Err(CartError::OutOfStock);
        }

        // Merge into the existing line for this product, if any.
        let item = match self
            .repository
            .find_item(&params.customer_id, params.product_id)
            .await?
        {
            Some(existing) => {
                CartLineItem::from_repository(existing.product, existing.quantity + params.quantity)
            }
            None => CartLineItem::new(product, params.quantity)?,
        };

        self.repository.save_item(&params.customer_id, &item).await?;

        self.logger.info(&format!(
            "Cart line for product {} now at quantity {}",
            item.product.id, item.quantity
        ));
        Ok(item)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use bigdecimal::BigDecimal;
    use mockall::mock;

    use super::*;
    use crate::domain::catalog::model::{Product, ProductCategory};
    use crate::domain::shared::value_objects::CustomerId;

    mock! {
        pub Catalog {}

        #[async_trait]
        impl ProductCatalog for Catalog {
            async fn get_all(&self) -> Result<Vec<Product>, RepositoryError>;
            async fn get_by_id(&self, id: u32) -> Result<Product, RepositoryError>;
        }
    }

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

    fn product(id: u32, in_stock: bool) -> Product {
        Product {
            id,
            name: "Eco Tote Bags".to_string(),
            short_description: "Reusable bags from recycled textiles".to_string(),
            description: "Stylish and durable tote bags.".to_string(),
            price: BigDecimal::from(18),
            original_price: Some(BigDecimal::from(25)),
            category: ProductCategory::Textile,
            rating: 4.7,
            review_count: 156,
            in_stock,
            is_on_sale: true,
            features: vec![],
            specifications: BTreeMap::new(),
        }
    }

    fn test_customer_id() -> CustomerId {
        CustomerId::new("test-customer")
    }

    #[tokio::test]
    async fn should_append_new_line_for_first_add() {
        let mut catalog = MockCatalog::new();
        catalog
            .expect_get_by_id()
            .returning(|id| Ok(product(id, true)));

        let mut repo = MockCartRepo::new();
        repo.expect_find_item().returning(|_, _| Ok(None));
        repo.expect_save_item().returning(|_, _| Ok(()));

        let use_case = AddCartItemUseCaseImpl {
            catalog: Arc::new(catalog),
            repository: Arc::new(repo),
            logger: mock_logger(),
        };

        let item = use_case
            .execute(AddCartItemParams {
                customer_id: test_customer_id(),
                product_id: 6,
                quantity: 1,
            })
            .await
            .unwrap();

        assert_eq!(item.quantity, 1);
        assert_eq!(item.product.id, 6);
    }

    #[tokio::test]
    async fn should_increment_existing_line_instead_of_duplicating() {
        let mut catalog = MockCatalog::new();
        catalog
            .expect_get_by_id()
            .returning(|id| Ok(product(id, true)));

        let mut repo = MockCartRepo::new();
        repo.expect_find_item().returning(|_, _| {
            Ok(Some(CartLineItem::from_repository(product(6, true), 1)))
        });
        repo.expect_save_item().returning(|_, _| Ok(()));

        let use_case = AddCartItemUseCaseImpl {
            catalog: Arc::new(catalog),
            repository: Arc::new(repo),
            logger: mock_logger(),
        };

        let item = use_case
            .execute(AddCartItemParams {
                customer_id: test_customer_id(),
                product_id: 6,
                quantity: 1,
            })
            .await
            .unwrap();

        assert_eq!(item.quantity, 2);
    }

    #[tokio::test]
    async fn should_reject_unknown_product() {
        let mut catalog = MockCatalog::new();
        catalog
            .expect_get_by_id()
            .returning(|_| Err(RepositoryError::NotFound));

        let use_case = AddCartItemUseCaseImpl {
            catalog: Arc::new(catalog),
            repository: Arc::new(MockCartRepo::new()),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(AddCartItemParams {
                customer_id: test_customer_id(),
                product_id: 99,
                quantity: 1,
            })
            .await;

        assert!(matches!(result.unwrap_err(), CartError::ProductNotFound));
    }

    #[tokio::test]
    async fn should_reject_out_of_stock_product() {
        let mut catalog = MockCatalog::new();
        catalog
            .expect_get_by_id()
            .returning(|id| Ok(product(id, false)));

        let use_case = AddCartItemUseCaseImpl {
            catalog: Arc::new(catalog),
            repository: Arc::new(MockCartRepo::new()),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(AddCartItemParams {
                customer_id: test_customer_id(),
                product_id: 3,
                quantity: 1,
            })
            .await;

        assert!(matches!(result.unwrap_err(), CartError::OutOfStock));
    }

    #[tokio::test]
    async fn should_reject_zero_quantity() {
        let use_case = AddCartItemUseCaseImpl {
            catalog: Arc::new(MockCatalog::new()),
            repository: Arc::new(MockCartRepo::new()),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(AddCartItemParams {
                customer_id: test_customer_id(),
                product_id: 6,
                quantity: 0,
            })
            .await;

        assert!(matches!(result.unwrap_err(), CartError::InvalidLineItem));
    }
}
