use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::shared::value_objects::{Page, PageRequest, UserId};
use crate::domain::user::model::UserProfile;

#[async_trait]
pub trait SubscriptionRepository: Send + Sync {
    /// Fails with `RepositoryError::Duplicated` when the subscription exists.
    async fn subscribe(&self, subscriber: &UserId, author: &UserId)
    -> Result<(), RepositoryError>;
    /// Returns whether a subscription was removed.
    async fn unsubscribe(
        &self,
        subscriber: &UserId,
        author: &UserId,
    ) -> Result<bool, RepositoryError>;
    async fn is_subscribed(
        &self,
        subscriber: &UserId,
        author: &UserId,
    ) -> Result<bool, RepositoryError>;
    /// Authors followed by `subscriber`, ordered by username.
    async fn list_authors(
        &self,
        subscriber: &UserId,
        page: &PageRequest,
    ) -> Result<Page<UserProfile>, RepositoryError>;
}
