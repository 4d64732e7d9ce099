#[derive(Debug, thiserror::Error)]
pub enum IndustryError {
    #[error("industry.field_empty")]
    FieldEmpty,
    #[error("industry.password_mismatch")]
    PasswordMismatch,
    #[error("industry.no_waste_types")]
    NoWasteTypes,
    #[error("industry.not_found")]
    NotFound,
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
