/// Repository errors shared by every domain area.
/// Use code-style identifiers for all error variants so the presentation
/// layer can translate them.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("repository.not_found")]
    NotFound,
    #[error("repository.persistence")]
    Persistence,
    #[error("repository.database_error")]
    DatabaseError,
}
