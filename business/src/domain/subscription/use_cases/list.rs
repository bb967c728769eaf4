use async_trait::async_trait;

use crate::domain::shared::value_objects::{Page, PageRequest, UserId};
use crate::domain::subscription::errors::SubscriptionError;
use crate::domain::subscription::model::AuthorSubscription;

pub struct ListSubscriptionsParams {
    pub user_id: UserId,
    pub page: PageRequest,
    pub recipes_limit: Option<u32>,
}

#[async_trait]
pub trait ListSubscriptionsUseCase: Send + Sync {
    async fn execute(
        &self,
        params: ListSubscriptionsParams,
    ) -> Result<Page<AuthorSubscription>, SubscriptionError>;
}
