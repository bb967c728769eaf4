use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::subscription::repository::SubscriptionRepository;
use crate::domain::user::errors::UserError;
use crate::domain::user::model::ProfileView;
use crate::domain::user::repository::UserRepository;
use crate::domain::user::use_cases::get_profile::{GetProfileParams, GetProfileUseCase};

pub struct GetProfileUseCaseImpl {
    pub repository: Arc<dyn UserRepository>,
    pub subscription_repository: Arc<dyn SubscriptionRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetProfileUseCase for GetProfileUseCaseImpl {
    async fn execute(&self, params: GetProfileParams) -> Result<ProfileView, UserError> {
        self.logger.debug(&format!("Getting profile: {}", params.id));

        let profile = self
            .repository
            .get_by_id(&params.id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => UserError::NotFound,
                other => UserError::Repository(other),
            })?;

        let is_subscribed = match params.viewer {
            Some(viewer) if viewer != params.id => {
                self.subscription_repository
                    .is_subscribed(&viewer, &params.id)
                    .await?
            }
            _ => false,
        };

        Ok(ProfileView {
            profile,
            is_subscribed,
        })
    }
}
