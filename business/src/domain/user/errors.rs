#[derive(Debug, thiserror::Error)]
pub enum UserError {
    #[error("user.not_found")]
    NotFound,
    #[error("user.email_invalid")]
    EmailInvalid,
    #[error("user.username_invalid")]
    UsernameInvalid,
    #[error("user.username_taken")]
    UsernameTaken,
    #[error("user.name_too_long")]
    NameTooLong,
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
