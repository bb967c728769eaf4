use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::recipe::errors::RecipeError;
use crate::domain::recipe::projection::AnnotatedRecipe;
use crate::domain::shared::value_objects::UserId;

pub struct GetRecipeByIdParams {
    pub viewer: Option<UserId>,
    pub id: Uuid,
}

#[async_trait]
pub trait GetRecipeByIdUseCase: Send + Sync {
    async fn execute(&self, params: GetRecipeByIdParams) -> Result<AnnotatedRecipe, RecipeError>;
}
