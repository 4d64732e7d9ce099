#[derive(Debug, thiserror::Error)]
pub enum CartError {
    #[error("cart.invalid_line_item")]
    InvalidLineItem,
    #[error("cart.product_not_found")]
    ProductNotFound,
    #[error("cart.out_of_stock")]
    OutOfStock,
    #[error("cart.item_not_found")]
    ItemNotFound,
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
