use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::errors::RepositoryError;
use crate::domain::shared::value_objects::UserId;

use super::model::RecipeCollection;

#[async_trait]
pub trait RecipeCollectionRepository: Send + Sync {
    /// Fails with `RepositoryError::Duplicated` when the recipe is already there.
    async fn add(
        &self,
        user_id: &UserId,
        recipe_id: Uuid,
        collection: RecipeCollection,
    ) -> Result<(), RepositoryError>;
    /// Returns whether a membership was removed.
    async fn remove(
        &self,
        user_id: &UserId,
        recipe_id: Uuid,
        collection: RecipeCollection,
    ) -> Result<bool, RepositoryError>;
    async fn recipe_ids(
        &self,
        user_id: &UserId,
        collection: RecipeCollection,
    ) -> Result<Vec<Uuid>, RepositoryError>;
}
