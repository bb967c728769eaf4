use async_trait::async_trait;

use super::model::UserProfile;
use crate::domain::errors::RepositoryError;
use crate::domain::shared::value_objects::UserId;

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn get_by_id(&self, id: &UserId) -> Result<UserProfile, RepositoryError>;
    async fn find_by_username(&self, username: &str)
    -> Result<Option<UserProfile>, RepositoryError>;
    /// Inserts or replaces the profile keyed by its id.
    async fn save(&self, profile: &UserProfile) -> Result<(), RepositoryError>;
}
