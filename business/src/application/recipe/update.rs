use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::collection::repository::RecipeCollectionRepository;
use crate::domain::errors::RepositoryError;
use crate::domain::ingredient::repository::IngredientRepository;
use crate::domain::logger::Logger;
use crate::domain::recipe::errors::RecipeError;
use crate::domain::recipe::projection::{AnnotatedRecipe, ViewerCollections};
use crate::domain::recipe::repository::RecipeRepository;
use crate::domain::recipe::use_cases::update::{UpdateRecipeParams, UpdateRecipeUseCase};
use crate::domain::tag::repository::TagRepository;

pub struct UpdateRecipeUseCaseImpl {
    pub repository: Arc<dyn RecipeRepository>,
    pub tag_repository: Arc<dyn TagRepository>,
    pub ingredient_repository: Arc<dyn IngredientRepository>,
    pub collection_repository: Arc<dyn RecipeCollectionRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl UpdateRecipeUseCase for UpdateRecipeUseCaseImpl {
    async fn execute(&self, params: UpdateRecipeParams) -> Result<AnnotatedRecipe, RecipeError> {
        self.logger.info(&format!("Updating recipe: {}", params.id));

        let existing = self
            .repository
            .get_by_id(params.id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => RecipeError::NotFound,
                other => RecipeError::Repository(other),
            })?;

        if !existing.is_authored_by(&params.user_id) {
            self.logger.warn(&format!(
                "User {} is not allowed to edit recipe {}",
                params.user_id, params.id
            ));
            return Err(RecipeError::Forbidden);
        }

        params.draft.validate()?;

        let ingredient_ids: Vec<_> = params
            .draft
            .ingredients
            .iter()
            .map(|i| i.ingredient_id)
            .collect();
        let tags = self.tag_repository.get_by_ids(&params.draft.tag_ids).await?;
        let ingredients = self.ingredient_repository.get_by_ids(&ingredient_ids).await?;

        let updated = existing.revise(params.draft, &tags, &ingredients)?;
        self.repository.save(&updated).await?;

        let viewer =
            ViewerCollections::load(self.collection_repository.as_ref(), Some(&params.user_id))
                .await?;

        self.logger.info(&format!("Recipe updated: {}", updated.id));
        Ok(AnnotatedRecipe::new(updated, &viewer))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::collection::model::RecipeCollection;
    use crate::domain::ingredient::model::Ingredient;
    use crate::domain::recipe::model::{
        IngredientAmount, Recipe, RecipeDraft, RecipeIngredient, RecipeSummary,
    };
    use crate::domain::recipe::value_objects::RecipeQuery;
    use crate::domain::shared::value_objects::{Page, PageRequest, UserId};
    use crate::domain::tag::model::Tag;
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
        pub TagRepo {}

        #[async_trait]
        impl TagRepository for TagRepo {
            async fn get_all(&self) -> Result<Vec<Tag>, RepositoryError>;
            async fn get_by_id(&self, id: Uuid) -> Result<Tag, RepositoryError>;
            async fn get_by_ids(&self, ids: &[Uuid]) -> Result<Vec<Tag>, RepositoryError>;
        }
    }

    mock! {
        pub IngredientRepo {}

        #[async_trait]
        impl IngredientRepository for IngredientRepo {
            async fn search(&self, name: Option<String>) -> Result<Vec<Ingredient>, RepositoryError>;
            async fn get_by_id(&self, id: Uuid) -> Result<Ingredient, RepositoryError>;
            async fn get_by_ids(&self, ids: &[Uuid]) -> Result<Vec<Ingredient>, RepositoryError>;
            async fn count(&self) -> Result<u64, RepositoryError>;
            async fn save_all(&self, ingredients: &[Ingredient]) -> Result<u64, RepositoryError>;
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

    fn stored_recipe(id: Uuid, author: &str) -> Recipe {
        Recipe::from_repository(
            id,
            UserId::new(author),
            "Old name".to_string(),
            "Old text".to_string(),
            "old.png".to_string(),
            15,
            vec![],
            vec![RecipeIngredient {
                ingredient_id: Uuid::new_v4(),
                name: "Salt".to_string(),
                measurement_unit: "g".to_string(),
                amount: 1,
            }],
            Utc::now(),
        )
    }

    fn draft(tag_id: Uuid, ingredient_id: Uuid) -> RecipeDraft {
        RecipeDraft {
            name: "New name".to_string(),
            text: "New text".to_string(),
            image: "new.png".to_string(),
            cooking_time: 25,
            tag_ids: vec![tag_id],
            ingredients: vec![IngredientAmount {
                ingredient_id,
                amount: 150,
            }],
        }
    }

    fn use_case(
        recipe_repo: MockRecipeRepo,
        tag_repo: MockTagRepo,
        ingredient_repo: MockIngredientRepo,
        collection_repo: MockCollectionRepo,
    ) -> UpdateRecipeUseCaseImpl {
        UpdateRecipeUseCaseImpl {
            repository: Arc::new(recipe_repo),
            tag_repository: Arc::new(tag_repo),
            ingredient_repository: Arc::new(ingredient_repo),
            collection_repository: Arc::new(collection_repo),
            logger: mock_logger(),
        }
    }

    #[tokio::test]
    async fn should_replace_fields_and_lines_when_author_updates() {
        let (recipe_id, tag_id, ingredient_id) = (Uuid::new_v4(), Uuid::new_v4(), Uuid::new_v4());

        let mut recipe_repo = MockRecipeRepo::new();
        recipe_repo
            .expect_get_by_id()
            .returning(|id| Ok(stored_recipe(id, "author")));
        recipe_repo
            .expect_save()
            .withf(|recipe| recipe.name == "New name" && recipe.ingredients[0].name == "Rice")
            .times(1)
            .returning(|_| Ok(()));
        let mut tag_repo = MockTagRepo::new();
        tag_repo.expect_get_by_ids().returning(move |_| {
            Ok(vec![Tag::from_repository(
                tag_id,
                "Dinner".to_string(),
                "#8775D2".to_string(),
                "dinner".to_string(),
            )])
        });
        let mut ingredient_repo = MockIngredientRepo::new();
        ingredient_repo.expect_get_by_ids().returning(move |_| {
            Ok(vec![Ingredient::from_repository(
                ingredient_id,
                "Rice".to_string(),
                "g".to_string(),
            )])
        });
        let mut collection_repo = MockCollectionRepo::new();
        collection_repo
            .expect_recipe_ids()
            .returning(move |_, collection| match collection {
                RecipeCollection::Favorites => Ok(vec![recipe_id]),
                RecipeCollection::ShoppingCart => Ok(vec![]),
            });

        let updated = use_case(recipe_repo, tag_repo, ingredient_repo, collection_repo)
            .execute(UpdateRecipeParams {
                user_id: UserId::new("author"),
                id: recipe_id,
                draft: draft(tag_id, ingredient_id),
            })
            .await
            .unwrap();

        assert_eq!(updated.recipe.id, recipe_id);
        assert_eq!(updated.recipe.cooking_time, 25);
        assert_eq!(updated.recipe.ingredients.len(), 1);
        assert_eq!(updated.recipe.ingredients[0].amount, 150);
        assert!(updated.annotations.is_favorited);
        assert!(!updated.annotations.is_in_shopping_cart);
    }

    #[tokio::test]
    async fn should_forbid_update_by_other_user() {
        let mut recipe_repo = MockRecipeRepo::new();
        recipe_repo
            .expect_get_by_id()
            .returning(|id| Ok(stored_recipe(id, "author")));
        recipe_repo.expect_save().never();

        let result = use_case(
            recipe_repo,
            MockTagRepo::new(),
            MockIngredientRepo::new(),
            MockCollectionRepo::new(),
        )
        .execute(UpdateRecipeParams {
            user_id: UserId::new("intruder"),
            id: Uuid::new_v4(),
            draft: draft(Uuid::new_v4(), Uuid::new_v4()),
        })
        .await;

        assert!(matches!(result.unwrap_err(), RecipeError::Forbidden));
    }

    #[tokio::test]
    async fn should_return_not_found_when_recipe_missing() {
        let mut recipe_repo = MockRecipeRepo::new();
        recipe_repo
            .expect_get_by_id()
            .returning(|_| Err(RepositoryError::NotFound));

        let result = use_case(
            recipe_repo,
            MockTagRepo::new(),
            MockIngredientRepo::new(),
            MockCollectionRepo::new(),
        )
        .execute(UpdateRecipeParams {
            user_id: UserId::new("author"),
            id: Uuid::new_v4(),
            draft: draft(Uuid::new_v4(), Uuid::new_v4()),
        })
        .await;

        assert!(matches!(result.unwrap_err(), RecipeError::NotFound));
    }
}
