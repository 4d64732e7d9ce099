use async_trait::async_trait;

use business::domain::catalog::model::Product;
use business::domain::catalog::repository::ProductCatalog;
use business::domain::errors::RepositoryError;

use super::seed;

/// In-memory catalog adapter over the static seed data.
pub struct ProductCatalogInMemory {
    products: Vec<Product>,
}

impl ProductCatalogInMemory {
    pub fn new() -> Self {
        Self {
            products: seed::products(),
        }
    }
}

impl Default for ProductCatalogInMemory {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ProductCatalog for ProductCatalogInMemory {
    async fn get_all(&self) -> Result<Vec<Product>, RepositoryError> {
        Ok(self.products.clone())
    }

    async fn get_by_id(&self, id: u32) -> Result<Product, RepositoryError> {
        self.products
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or(RepositoryError::NotFound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn should_list_the_whole_catalog() {
        let catalog = ProductCatalogInMemory::new();

        let products = catalog.get_all().await.unwrap();

        assert_eq!(products.len(), 6);
    }

    #[tokio::test]
    async fn should_find_product_by_id() {
        let catalog = ProductCatalogInMemory::new();

        let product = catalog.get_by_id(4).await.unwrap();

        assert_eq!(product.name, "Recycled Paper Notebooks");
    }

    #[tokio::test]
    async fn should_report_unknown_product_as_not_found() {
        let catalog = ProductCatalogInMemory::new();

        let result = catalog.get_by_id(99).await;

        assert!(matches!(result.unwrap_err(), RepositoryError::NotFound));
    }
}
