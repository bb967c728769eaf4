use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::subscription::errors::SubscriptionError;
use crate::domain::subscription::repository::SubscriptionRepository;
use crate::domain::subscription::use_cases::unsubscribe::{UnsubscribeParams, UnsubscribeUseCase};
use crate::domain::user::repository::UserRepository;

pub struct UnsubscribeUseCaseImpl {
    pub repository: Arc<dyn SubscriptionRepository>,
    pub user_repository: Arc<dyn UserRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl UnsubscribeUseCase for UnsubscribeUseCaseImpl {
    async fn execute(&self, params: UnsubscribeParams) -> Result<(), SubscriptionError> {
        self.user_repository
            .get_by_id(&params.author_id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => SubscriptionError::AuthorNotFound,
                other => SubscriptionError::Repository(other),
            })?;

        let removed = self
            .repository
            .unsubscribe(&params.user_id, &params.author_id)
            .await?;
        if !removed {
            return Err(SubscriptionError::NotSubscribed);
        }

        self.logger.info(&format!(
            "{} unsubscribed from {}",
            params.user_id, params.author_id
        ));
        Ok(())
    }
}
