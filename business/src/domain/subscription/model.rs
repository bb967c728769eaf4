use crate::domain::recipe::model::RecipeSummary;
use crate::domain::user::model::UserProfile;

/// An author in a subscriber's feed with their latest recipes.
#[derive(Debug, Clone, PartialEq)]
pub struct AuthorSubscription {
    pub author: UserProfile,
    pub is_subscribed: bool,
    /// Newest first, possibly truncated.
    pub recipes: Vec<RecipeSummary>,
    /// Total number of recipes of the author, regardless of truncation.
    pub recipes_count: u64,
}
