use async_trait::async_trait;

use crate::domain::recipe::errors::RecipeError;
use crate::domain::recipe::model::RecipeDraft;
use crate::domain::recipe::projection::AnnotatedRecipe;
use crate::domain::shared::value_objects::UserId;

pub struct CreateRecipeParams {
    pub author: UserId,
    pub draft: RecipeDraft,
}

#[async_trait]
pub trait CreateRecipeUseCase: Send + Sync {
    async fn execute(&self, params: CreateRecipeParams) -> Result<AnnotatedRecipe, RecipeError>;
}
