#[derive(Debug, thiserror::Error)]
pub enum CustomerError {
    #[error("customer.field_empty")]
    FieldEmpty,
    #[error("customer.password_mismatch")]
    PasswordMismatch,
    #[error("customer.not_found")]
    NotFound,
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
