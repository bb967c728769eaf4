use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::tag::errors::TagError;
use crate::domain::tag::model::Tag;

pub struct GetTagByIdParams {
    pub id: Uuid,
}

#[async_trait]
pub trait GetTagByIdUseCase: Send + Sync {
    async fn execute(&self, params: GetTagByIdParams) -> Result<Tag, TagError>;
}
