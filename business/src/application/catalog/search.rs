use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::catalog::errors::CatalogError;
use crate::domain::catalog::model::Product;
use crate::domain::catalog::repository::ProductCatalog;
use crate::domain::catalog::use_cases::search::{SearchProductsParams, SearchProductsUseCase};
use crate::domain::logger::Logger;

pub struct SearchProductsUseCaseImpl {
    pub catalog: Arc<dyn ProductCatalog>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl SearchProductsUseCase for SearchProductsUseCaseImpl {
    async fn execute(&self, params: SearchProductsParams) -> Result<Vec<Product>, CatalogError> {
        self.logger.debug("Searching catalog");

        let mut products = self.catalog.get_all().await?;

        if let Some(term) = params.term.as_deref().filter(|t| !t.trim().is_empty()) {
            products.retain(|p| p.matches_term(term));
        }
        if let Some(category) = params.category {
            products.retain(|p| p.category == category);
        }

        self.logger
            .info(&format!("Catalog search matched {} products", products.len()));
        Ok(products)
    }
}
