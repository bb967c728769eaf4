/// Errors raised by repository ports.
/// Variants render as code-style identifiers so the API can translate them.
#[derive(Debug, PartialEq, thiserror::Error)]
pub enum RepositoryError {
    #[error("repository.not_found")]
    NotFound,
    /// A unique constraint rejected the write (e.g. a recipe already favorited).
    #[error("repository.duplicated")]
    Duplicated,
    #[error("repository.database_error")]
    DatabaseError,
}
