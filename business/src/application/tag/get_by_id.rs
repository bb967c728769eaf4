use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::tag::errors::TagError;
use crate::domain::tag::model::Tag;
use crate::domain::tag::repository::TagRepository;
use crate::domain::tag::use_cases::get_by_id::{GetTagByIdParams, GetTagByIdUseCase};

pub struct GetTagByIdUseCaseImpl {
    pub repository: Arc<dyn TagRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetTagByIdUseCase for GetTagByIdUseCaseImpl {
    async fn execute(&self, params: GetTagByIdParams) -> Result<Tag, TagError> {
        self.logger.debug(&format!("Getting tag: {}", params.id));
        self.repository
            .get_by_id(params.id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => TagError::NotFound,
                other => TagError::Repository(other),
            })
    }
}
