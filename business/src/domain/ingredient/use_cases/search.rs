use async_trait::async_trait;

use crate::domain::ingredient::errors::IngredientError;
use crate::domain::ingredient::model::Ingredient;

pub struct SearchIngredientsParams {
    pub search: Option<String>,
}

#[async_trait]
pub trait SearchIngredientsUseCase: Send + Sync {
    async fn execute(
        &self,
        params: SearchIngredientsParams,
    ) -> Result<Vec<Ingredient>, IngredientError>;
}
