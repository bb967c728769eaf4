use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::errors::RepositoryError;
use crate::domain::shared::value_objects::{Page, PageRequest, UserId};

use super::model::{Recipe, RecipeSummary};
use super::value_objects::RecipeQuery;

#[async_trait]
pub trait RecipeRepository: Send + Sync {
    async fn get_by_id(&self, id: Uuid) -> Result<Recipe, RepositoryError>;
    /// Newest first.
    async fn list(
        &self,
        query: &RecipeQuery,
        page: &PageRequest,
    ) -> Result<Page<Recipe>, RepositoryError>;
    /// Upserts the recipe and replaces its tag and ingredient relations atomically.
    async fn save(&self, recipe: &Recipe) -> Result<(), RepositoryError>;
    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError>;
    /// Newest first, truncated to `limit` when given.
    async fn get_summaries_by_author(
        &self,
        author: &UserId,
        limit: Option<i64>,
    ) -> Result<Vec<RecipeSummary>, RepositoryError>;
    async fn count_by_author(&self, author: &UserId) -> Result<u64, RepositoryError>;
}
