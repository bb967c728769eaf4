use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::collection::errors::CollectionError;
use crate::domain::collection::repository::RecipeCollectionRepository;
use crate::domain::collection::use_cases::remove::{
    RemoveFromCollectionParams, RemoveFromCollectionUseCase,
};
use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::recipe::repository::RecipeRepository;

pub struct RemoveFromCollectionUseCaseImpl {
    pub repository: Arc<dyn RecipeCollectionRepository>,
    pub recipe_repository: Arc<dyn RecipeRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl RemoveFromCollectionUseCase for RemoveFromCollectionUseCaseImpl {
    async fn execute(&self, params: RemoveFromCollectionParams) -> Result<(), CollectionError> {
        self.recipe_repository
            .get_by_id(params.recipe_id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => CollectionError::RecipeNotFound,
                other => CollectionError::Repository(other),
            })?;

        let removed = self
            .repository
            .remove(&params.user_id, params.recipe_id, params.collection)
            .await?;
        if !removed {
            return Err(CollectionError::NotInCollection);
        }

        self.logger.info(&format!(
            "Recipe {} removed from {} of {}",
            params.recipe_id, params.collection, params.user_id
        ));
        Ok(())
    }
}
