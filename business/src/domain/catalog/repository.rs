use async_trait::async_trait;

use crate::domain::errors::RepositoryError;

use super::model::Product;

/// Read-only access to the product catalog.
#[async_trait]
pub trait ProductCatalog: Send + Sync {
    async fn get_all(&self) -> Result<Vec<Product>, RepositoryError>;
    async fn get_by_id(&self, id: u32) -> Result<Product, RepositoryError>;
}
