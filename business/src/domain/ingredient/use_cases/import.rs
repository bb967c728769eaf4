use async_trait::async_trait;

use crate::domain::ingredient::errors::IngredientError;

/// One `(name, measurement_unit)` row of an ingredient catalog file.
#[derive(Debug, Clone)]
pub struct IngredientRow {
    pub name: String,
    pub measurement_unit: String,
}

pub struct ImportIngredientsParams {
    pub rows: Vec<IngredientRow>,
}

#[async_trait]
pub trait ImportIngredientsUseCase: Send + Sync {
    /// Returns the number of ingredients inserted.
    async fn execute(&self, params: ImportIngredientsParams) -> Result<u64, IngredientError>;
}
