use poem_openapi::Object;

use business::domain::shared::value_objects::Page;
use business::domain::subscription::model::AuthorSubscription;

use crate::api::recipe::dto::RecipeSummaryResponse;

/// An author followed by the caller, with their latest recipes
#[derive(Debug, Clone, Object)]
pub struct AuthorSubscriptionResponse {
    pub id: String,
    pub email: String,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub is_subscribed: bool,
    /// Newest first, truncated to `recipes_limit` when given
    pub recipes: Vec<RecipeSummaryResponse>,
    /// Total number of recipes of the author
    pub recipes_count: u64,
}

impl From<AuthorSubscription> for AuthorSubscriptionResponse {
    fn from(subscription: AuthorSubscription) -> Self {
        let author = subscription.author;
        Self {
            id: author.id.to_string(),
            email: author.email,
            username: author.username,
            first_name: author.first_name,
            last_name: author.last_name,
            is_subscribed: subscription.is_subscribed,
            recipes: subscription.recipes.into_iter().map(|r| r.into()).collect(),
            recipes_count: subscription.recipes_count,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct SubscriptionPageResponse {
    pub count: u64,
    pub results: Vec<AuthorSubscriptionResponse>,
}

impl From<Page<AuthorSubscription>> for SubscriptionPageResponse {
    fn from(page: Page<AuthorSubscription>) -> Self {
        Self {
            count: page.count,
            results: page.items.into_iter().map(|s| s.into()).collect(),
        }
    }
}
