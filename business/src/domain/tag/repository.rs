use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::errors::RepositoryError;

use super::model::Tag;

#[async_trait]
pub trait TagRepository: Send + Sync {
    async fn get_all(&self) -> Result<Vec<Tag>, RepositoryError>;
    async fn get_by_id(&self, id: Uuid) -> Result<Tag, RepositoryError>;
    /// Returns the tags that exist among `ids`; unknown ids are skipped.
    async fn get_by_ids(&self, ids: &[Uuid]) -> Result<Vec<Tag>, RepositoryError>;
}
