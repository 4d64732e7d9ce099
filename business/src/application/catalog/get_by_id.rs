use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::catalog::errors::CatalogError;
use crate::domain::catalog::model::Product;
use crate::domain::catalog::repository::ProductCatalog;
use crate::domain::catalog::use_cases::get_by_id::GetProductByIdUseCase;
use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;

pub struct GetProductByIdUseCaseImpl {
    pub catalog: Arc<dyn ProductCatalog>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetProductByIdUseCase for GetProductByIdUseCaseImpl {
    async fn execute(&self, id: u32) -> Result<Product, CatalogError> {
        self.logger.debug(&format!("Fetching product {}", id));

        self.catalog.get_by_id(id).await.map_err(|e| match e {
            RepositoryError::NotFound => CatalogError::ProductNotFound,
            other => CatalogError::Repository(other),
        })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use bigdecimal::BigDecimal;
    use mockall::mock;

    use super::*;
    use crate::domain::catalog::model::ProductCategory;

    mock! {
        pub Catalog {}

        #[async_trait]
        impl ProductCatalog for Catalog {
            async fn get_all(&self) -> Result<Vec<Product>, RepositoryError>;
            async fn get_by_id(&self, id: u32) -> Result<Product, RepositoryError>;
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
    async fn should_return_product_when_found() {
        let mut catalog = MockCatalog::new();
        catalog.expect_get_by_id().returning(|id| {
            Ok(Product {
                id,
                name: "Recycled Glass Vases".to_string(),
                short_description: "Beautiful vases from recycled glass".to_string(),
                description: "Elegant vases handcrafted from recycled glass.".to_string(),
                price: BigDecimal::from(28),
                original_price: None,
                category: ProductCategory::Glass,
                rating: 4.5,
                review_count: 45,
                in_stock: true,
                is_on_sale: false,
                features: vec![],
                specifications: BTreeMap::new(),
            })
        });

        let use_case = GetProductByIdUseCaseImpl {
            catalog: Arc::new(catalog),
            logger: mock_logger(),
        };

        let product = use_case.execute(5).await.unwrap();
        assert_eq!(product.id, 5);
    }

    #[tokio::test]
    async fn should_map_missing_product_to_not_found() {
        let mut catalog = MockCatalog::new();
        catalog
            .expect_get_by_id()
            .returning(|_| Err(RepositoryError::NotFound));

        let use_case = GetProductByIdUseCaseImpl {
            catalog: Arc::new(catalog),
            logger: mock_logger(),
        };

        let result = use_case.execute(99).await;
        assert!(matches!(
            result.unwrap_err(),
            CatalogError::ProductNotFound
        ));
    }
}
