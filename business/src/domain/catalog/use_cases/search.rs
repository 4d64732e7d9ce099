use async_trait::async_trait;

use crate::domain::catalog::errors::CatalogError;
use crate::domain::catalog::model::{Product, ProductCategory};

pub struct SearchProductsParams {
    pub term: Option<String>,
    pub category: Option<ProductCategory>,
}

#[async_trait]
pub trait SearchProductsUseCase: Send + Sync {
    async fn execute(&self, params: SearchProductsParams) -> Result<Vec<Product>, CatalogError>;
}
