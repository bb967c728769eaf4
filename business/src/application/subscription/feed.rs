use crate::domain::errors::RepositoryError;
use crate::domain::recipe::repository::RecipeRepository;
use crate::domain::subscription::model::AuthorSubscription;
use crate::domain::user::model::UserProfile;

/// Builds the feed entry of a followed author.
pub(crate) async fn author_subscription(
    recipe_repository: &dyn RecipeRepository,
    author: UserProfile,
    recipes_limit: Option<u32>,
) -> Result<AuthorSubscription, RepositoryError> {
    let recipes = recipe_repository
        .get_summaries_by_author(&author.id, recipes_limit.map(i64::from))
        .await?;
    let recipes_count = recipe_repository.count_by_author(&author.id).await?;

    Ok(AuthorSubscription {
        author,
        is_subscribed: true,
        recipes,
        recipes_count,
    })
}
