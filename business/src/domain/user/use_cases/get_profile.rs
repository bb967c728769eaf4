use async_trait::async_trait;

use crate::domain::shared::value_objects::UserId;
use crate::domain::user::errors::UserError;
use crate::domain::user::model::ProfileView;

pub struct GetProfileParams {
    pub viewer: Option<UserId>,
    pub id: UserId,
}

#[async_trait]
pub trait GetProfileUseCase: Send + Sync {
    async fn execute(&self, params: GetProfileParams) -> Result<ProfileView, UserError>;
}
