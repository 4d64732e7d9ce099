use async_trait::async_trait;

use crate::domain::catalog::errors::CatalogError;
use crate::domain::catalog::model::Product;

#[async_trait]
pub trait GetProductByIdUseCase: Send + Sync {
    async fn execute(&self, id: u32) -> Result<Product, CatalogError>;
}
