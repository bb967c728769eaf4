use std::sync::Arc;

use async_trait::async_trait;

use super::feed::author_subscription;
use crate::domain::logger::Logger;
use crate::domain::recipe::repository::RecipeRepository;
use crate::domain::shared::value_objects::Page;
use crate::domain::subscription::errors::SubscriptionError;
use crate::domain::subscription::model::AuthorSubscription;
use crate::domain::subscription::repository::SubscriptionRepository;
use crate::domain::subscription::use_cases::list::{
    ListSubscriptionsParams, ListSubscriptionsUseCase,
};

pub struct ListSubscriptionsUseCaseImpl {
    pub repository: Arc<dyn SubscriptionRepository>,
    pub recipe_repository: Arc<dyn RecipeRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl ListSubscriptionsUseCase for ListSubscriptionsUseCaseImpl {
    async fn execute(
        &self,
        params: ListSubscriptionsParams,
    ) -> Result<Page<AuthorSubscription>, SubscriptionError> {
        self.logger
            .debug(&format!("Listing subscriptions of {}", params.user_id));

        let authors = self
            .repository
            .list_authors(&params.user_id, &params.page)
            .await?;

        let mut items = Vec::with_capacity(authors.items.len());
        for author in authors.items {
            items.push(
                author_subscription(
                    self.recipe_repository.as_ref(),
                    author,
                    params.recipes_limit,
                )
                .await?,
            );
        }

        Ok(Page {
            count: authors.count,
            items,
        })
    }
}
