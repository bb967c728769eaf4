use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::collection::repository::RecipeCollectionRepository;
use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::recipe::errors::RecipeError;
use crate::domain::recipe::projection::{AnnotatedRecipe, ViewerCollections};
use crate::domain::recipe::repository::RecipeRepository;
use crate::domain::recipe::use_cases::get_by_id::{GetRecipeByIdParams, GetRecipeByIdUseCase};

pub struct GetRecipeByIdUseCaseImpl {
    pub repository: Arc<dyn RecipeRepository>,
    pub collection_repository: Arc<dyn RecipeCollectionRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetRecipeByIdUseCase for GetRecipeByIdUseCaseImpl {
    async fn execute(&self, params: GetRecipeByIdParams) -> Result<AnnotatedRecipe, RecipeError> {
        self.logger.debug(&format!("Getting recipe: {}", params.id));

        let recipe = self
            .repository
            .get_by_id(params.id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => RecipeError::NotFound,
                other => RecipeError::Repository(other),
            })?;

        let viewer =
            ViewerCollections::load(self.collection_repository.as_ref(), params.viewer.as_ref())
                .await?;

        Ok(AnnotatedRecipe::new(recipe, &viewer))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::collection::model::RecipeCollection;
    use crate::domain::recipe::model::{Recipe, RecipeSummary};
    use crate::domain::recipe::value_objects::RecipeQuery;
    use crate::domain::shared::value_objects::{Page, PageRequest, UserId};
    use chrono::Utc;
    use mockall::mock;
    use uuid::Uuid;

    mock! {
        pub RecipeRepo {}

        #[async_trait]
        impl RecipeRepository for RecipeRepo {
            async fn get_by_id(&self, id: Uuid) -> Result<Recipe, RepositoryError>;
            async fn list(&self, query: &RecipeQuery, page: &PageRequest) -> Result<Page<Recipe>, RepositoryError>;
            async fn save(&self, recipe: &Recipe) -> Result<(), RepositoryError>;
            async fn delete(&self, id: Uuid) -> Result<(), RepositoryError>;
            async fn get_summaries_by_author(&self, author: &UserId, limit: Option<i64>) -> Result<Vec<RecipeSummary>, RepositoryError>;
            async fn count_by_author(&self, author: &UserId) -> Result<u64, RepositoryError>;
        }
    }

    mock! {
        pub CollectionRepo {}

        #[async_trait]
        impl RecipeCollectionRepository for CollectionRepo {
            async fn add(&self, user_id: &UserId, recipe_id: Uuid, collection: RecipeCollection) -> Result<(), RepositoryError>;
            async fn remove(&self, user_id: &UserId, recipe_id: Uuid, collection: RecipeCollection) -> Result<bool, RepositoryError>;
            async fn recipe_ids(&self, user_id: &UserId, collection: RecipeCollection) -> Result<Vec<Uuid>, RepositoryError>;
        }
    }

    mock! {
        pub Log {}

        impl Logger for Log {
            fn info(&self, message: &str);
            fn warn(&self, message: &str);
            fn error(&self, message: &str);
            fn debug(&self, message: &str);
        }
    }

    fn mock_logger() -> Arc<dyn Logger> {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().returning(|_| ());
        logger.expect_error().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        Arc::new(logger)
    }

    fn stored_recipe(id: Uuid) -> Recipe {
        Recipe::from_repository(
            id,
            UserId::new("author"),
            "Salad".to_string(),
            "Chop.".to_string(),
            "salad.png".to_string(),
            5,
            vec![],
            vec![],
            Utc::now(),
        )
    }

    #[tokio::test]
    async fn should_annotate_recipe_for_viewer() {
        let id = Uuid::new_v4();
        let mut recipe_repo = MockRecipeRepo::new();
        recipe_repo
            .expect_get_by_id()
            .returning(|id| Ok(stored_recipe(id)));
        let mut collection_repo = MockCollectionRepo::new();
        collection_repo
            .expect_recipe_ids()
            .returning(move |_, collection| match collection {
                RecipeCollection::Favorites => Ok(vec![]),
                RecipeCollection::ShoppingCart => Ok(vec![id]),
            });

        let use_case = GetRecipeByIdUseCaseImpl {
            repository: Arc::new(recipe_repo),
            collection_repository: Arc::new(collection_repo),
            logger: mock_logger(),
        };

        let annotated = use_case
            .execute(GetRecipeByIdParams {
                viewer: Some(UserId::new("viewer")),
                id,
            })
            .await
            .unwrap();

        assert_eq!(annotated.recipe.id, id);
        assert!(!annotated.annotations.is_favorited);
        assert!(annotated.annotations.is_in_shopping_cart);
    }

    #[tokio::test]
    async fn should_skip_collection_lookup_for_anonymous_viewer() {
        let mut recipe_repo = MockRecipeRepo::new();
        recipe_repo
            .expect_get_by_id()
            .returning(|id| Ok(stored_recipe(id)));
        let mut collection_repo = MockCollectionRepo::new();
        collection_repo.expect_recipe_ids().never();

        let use_case = GetRecipeByIdUseCaseImpl {
            repository: Arc::new(recipe_repo),
            collection_repository: Arc::new(collection_repo),
            logger: mock_logger(),
        };

        let annotated = use_case
            .execute(GetRecipeByIdParams {
                viewer: None,
                id: Uuid::new_v4(),
            })
            .await
            .unwrap();

        assert!(!annotated.annotations.is_favorited);
        assert!(!annotated.annotations.is_in_shopping_cart);
    }

    #[tokio::test]
    async fn should_return_not_found_when_recipe_missing() {
        let mut recipe_repo = MockRecipeRepo::new();
        recipe_repo
            .expect_get_by_id()
            .returning(|_| Err(RepositoryError::NotFound));

        let use_case = GetRecipeByIdUseCaseImpl {
            repository: Arc::new(recipe_repo),
            collection_repository: Arc::new(MockCollectionRepo::new()),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(GetRecipeByIdParams {
                viewer: None,
                id: Uuid::new_v4(),
            })
            .await;

        assert!(matches!(result.unwrap_err(), RecipeError::NotFound));
    }
}
