#[derive(Debug, thiserror::Error)]
pub enum ShoppingCartError {
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
