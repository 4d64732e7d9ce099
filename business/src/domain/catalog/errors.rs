#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("catalog.product_not_found")]
    ProductNotFound,
    #[error("catalog.unknown_category")]
    UnknownCategory,
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
