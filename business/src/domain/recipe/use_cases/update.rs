use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::recipe::errors::RecipeError;
use crate::domain::recipe::model::RecipeDraft;
use crate::domain::recipe::projection::AnnotatedRecipe;
use crate::domain::shared::value_objects::UserId;

pub struct UpdateRecipeParams {
    pub user_id: UserId,
    pub id: Uuid,
    pub draft: RecipeDraft,
}

#[async_trait]
pub trait UpdateRecipeUseCase: Send + Sync {
    async fn execute(&self, params: UpdateRecipeParams) -> Result<AnnotatedRecipe, RecipeError>;
}
