use async_trait::async_trait;

use crate::domain::shared::value_objects::UserId;
use crate::domain::user::errors::UserError;
use crate::domain::user::model::UserProfile;

pub struct UpsertProfileParams {
    pub user_id: UserId,
    pub email: String,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
}

#[async_trait]
pub trait UpsertProfileUseCase: Send + Sync {
    async fn execute(&self, params: UpsertProfileParams) -> Result<UserProfile, UserError>;
}
