use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::errors::RepositoryError;

use super::model::Ingredient;

#[async_trait]
pub trait IngredientRepository: Send + Sync {
    /// Case-insensitive substring search on the name, ordered by name.
    /// `None` lists the whole catalog.
    async fn search(&self, name: Option<String>) -> Result<Vec<Ingredient>, RepositoryError>;
    async fn get_by_id(&self, id: Uuid) -> Result<Ingredient, RepositoryError>;
    /// Returns the ingredients that exist among `ids`; unknown ids are skipped.
    async fn get_by_ids(&self, ids: &[Uuid]) -> Result<Vec<Ingredient>, RepositoryError>;
    async fn count(&self) -> Result<u64, RepositoryError>;
    /// Inserts all ingredients in one transaction and returns the number written.
    async fn save_all(&self, ingredients: &[Ingredient]) -> Result<u64, RepositoryError>;
}
