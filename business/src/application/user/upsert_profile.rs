use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::user::errors::UserError;
use crate::domain::user::model::UserProfile;
use crate::domain::user::repository::UserRepository;
use crate::domain::user::use_cases::upsert_profile::{UpsertProfileParams, UpsertProfileUseCase};

pub struct UpsertProfileUseCaseImpl {
    pub repository: Arc<dyn UserRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl UpsertProfileUseCase for UpsertProfileUseCaseImpl {
    async fn execute(&self, params: UpsertProfileParams) -> Result<UserProfile, UserError> {
        let profile = UserProfile::new(
            params.user_id,
            params.email,
            params.username,
            params.first_name,
            params.last_name,
        )?;

        if let Some(owner) = self.repository.find_by_username(&profile.username).await?
            && owner.id != profile.id
        {
            self.logger.warn(&format!(
                "Username {} already taken by {}",
                profile.username, owner.id
            ));
            return Err(UserError::UsernameTaken);
        }

        self.repository
            .save(&profile)
            .await
            .map_err(|e| match e {
                RepositoryError::Duplicated => UserError::UsernameTaken,
                other => UserError::Repository(other),
            })?;

        self.logger.info(&format!("Profile saved: {}", profile.id));
        Ok(profile)
    }
}
