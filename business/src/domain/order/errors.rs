#[derive(Debug, thiserror::Error)]
pub enum OrderError {
    #[error("order.empty_cart")]
    EmptyCart,
    #[error("order.address_incomplete")]
    AddressIncomplete,
    #[error("order.payment_declined")]
    PaymentDeclined,
    #[error("order.not_found")]
    NotFound,
    #[error("order.unknown_status")]
    UnknownStatus,
    #[error("order.unknown_payment_method")]
    UnknownPaymentMethod,
    #[error("cart.invalid_line_item")]
    Cart(#[from] crate::domain::cart::errors::CartError),
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
