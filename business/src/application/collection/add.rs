use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::collection::errors::CollectionError;
use crate::domain::collection::repository::RecipeCollectionRepository;
use crate::domain::collection::use_cases::add::{AddToCollectionParams, AddToCollectionUseCase};
use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::recipe::model::RecipeSummary;
use crate::domain::recipe::repository::RecipeRepository;

pub struct AddToCollectionUseCaseImpl {
    pub repository: Arc<dyn RecipeCollectionRepository>,
    pub recipe_repository: Arc<dyn RecipeRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl AddToCollectionUseCase for AddToCollectionUseCaseImpl {
    async fn execute(
        &self,
        params: AddToCollectionParams,
    ) -> Result<RecipeSummary, CollectionError> {
        let recipe = self
            .recipe_repository
            .get_by_id(params.recipe_id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => CollectionError::RecipeNotFound,
                other => CollectionError::Repository(other),
            })?;

        self.repository
            .add(&params.user_id, recipe.id, params.collection)
            .await
            .map_err(|e| match e {
                RepositoryError::Duplicated => CollectionError::AlreadyAdded,
                other => CollectionError::Repository(other),
            })?;

        self.logger.info(&format!(
            "Recipe {} added to {} of {}",
            recipe.id, params.collection, params.user_id
        ));
        Ok(recipe.summary())
    }
}
