use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::ingredient::repository::IngredientRepository;
use crate::domain::logger::Logger;
use crate::domain::recipe::errors::RecipeError;
use crate::domain::recipe::model::Recipe;
use crate::domain::recipe::projection::{AnnotatedRecipe, ViewerCollections};
use crate::domain::recipe::repository::RecipeRepository;
use crate::domain::recipe::use_cases::create::{CreateRecipeParams, CreateRecipeUseCase};
use crate::domain::tag::repository::TagRepository;

pub struct CreateRecipeUseCaseImpl {
    pub repository: Arc<dyn RecipeRepository>,
    pub tag_repository: Arc<dyn TagRepository>,
    pub ingredient_repository: Arc<dyn IngredientRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl CreateRecipeUseCase for CreateRecipeUseCaseImpl {
    async fn execute(&self, params: CreateRecipeParams) -> Result<AnnotatedRecipe, RecipeError> {
        self.logger.info(&format!(
            "Creating recipe '{}' for author: {}",
            params.draft.name, params.author
        ));

        // Reject malformed payloads before touching the catalog.
        params.draft.validate()?;

        let ingredient_ids: Vec<_> = params
            .draft
            .ingredients
            .iter()
            .map(|i| i.ingredient_id)
            .collect();
        let tags = self.tag_repository.get_by_ids(&params.draft.tag_ids).await?;
        let ingredients = self.ingredient_repository.get_by_ids(&ingredient_ids).await?;

        let recipe = Recipe::new(params.author, params.draft, &tags, &ingredients)?;
        self.repository.save(&recipe).await?;

        self.logger.info(&format!("Recipe created: {}", recipe.id));
        Ok(AnnotatedRecipe::new(recipe, &ViewerCollections::anonymous()))
    }
}
