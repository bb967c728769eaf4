#[derive(Debug, thiserror::Error)]
pub enum CollectionError {
    #[error("collection.recipe_not_found")]
    RecipeNotFound,
    #[error("collection.already_added")]
    AlreadyAdded,
    #[error("collection.not_in_collection")]
    NotInCollection,
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
