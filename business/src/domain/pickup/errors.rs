#[derive(Debug, thiserror::Error)]
pub enum PickupError {
    #[error("pickup.amount_not_positive")]
    AmountNotPositive,
    #[error("pickup.waste_type_not_declared")]
    WasteTypeNotDeclared,
    #[error("pickup.unknown_waste_type")]
    UnknownWasteType,
    #[error("pickup.unknown_status")]
    UnknownStatus,
    #[error("pickup.not_found")]
    NotFound,
    #[error("pickup.not_cancellable")]
    NotCancellable,
    #[error("pickup.industry_not_found")]
    IndustryNotFound,
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
