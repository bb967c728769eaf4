use async_trait::async_trait;

use crate::domain::recipe::errors::RecipeError;
use crate::domain::recipe::projection::AnnotatedRecipe;
use crate::domain::recipe::value_objects::RecipeFilter;
use crate::domain::shared::value_objects::{Page, PageRequest, UserId};

pub struct ListRecipesParams {
    pub viewer: Option<UserId>,
    pub filter: RecipeFilter,
    pub page: PageRequest,
}

#[async_trait]
pub trait ListRecipesUseCase: Send + Sync {
    async fn execute(
        &self,
        params: ListRecipesParams,
    ) -> Result<Page<AnnotatedRecipe>, RecipeError>;
}
