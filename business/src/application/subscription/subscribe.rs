use std::sync::Arc;

use async_trait::async_trait;

use super::feed::author_subscription;
use crate::domain::errors::RepositoryError;
use crate::domain::logger::Logger;
use crate::domain::recipe::repository::RecipeRepository;
use crate::domain::subscription::errors::SubscriptionError;
use crate::domain::subscription::model::AuthorSubscription;
use crate::domain::subscription::repository::SubscriptionRepository;
use crate::domain::subscription::use_cases::subscribe::{SubscribeParams, SubscribeUseCase};
use crate::domain::user::repository::UserRepository;

pub struct SubscribeUseCaseImpl {
    pub repository: Arc<dyn SubscriptionRepository>,
    pub user_repository: Arc<dyn UserRepository>,
    pub recipe_repository: Arc<dyn RecipeRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl SubscribeUseCase for SubscribeUseCaseImpl {
    async fn execute(
        &self,
        params: SubscribeParams,
    ) -> Result<AuthorSubscription, SubscriptionError> {
        let author = self
            .user_repository
            .get_by_id(&params.author_id)
            .await
            .map_err(|e| match e {
                RepositoryError::NotFound => SubscriptionError::AuthorNotFound,
                other => SubscriptionError::Repository(other),
            })?;

        if author.id == params.user_id {
            return Err(SubscriptionError::SelfSubscription);
        }

        self.repository
            .subscribe(&params.user_id, &author.id)
            .await
            .map_err(|e| match e {
                RepositoryError::Duplicated => SubscriptionError::AlreadySubscribed,
                other => SubscriptionError::Repository(other),
            })?;

        self.logger
            .info(&format!("{} subscribed to {}", params.user_id, author.id));
        let feed = author_subscription(
            self.recipe_repository.as_ref(),
            author,
            params.recipes_limit,
        )
        .await?;
        Ok(feed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::recipe::model::{Recipe, RecipeSummary};
    use crate::domain::recipe::value_objects::RecipeQuery;
    use crate::domain::shared::value_objects::{Page, PageRequest, UserId};
    use crate::domain::user::model::UserProfile;
    use mockall::mock;
    use uuid::Uuid;

    mock! {
        pub SubscriptionRepo {}

        #[async_trait]
        impl SubscriptionRepository for SubscriptionRepo {
            async fn subscribe(&self, subscriber: &UserId, author: &UserId) -> Result<(), RepositoryError>;
            async fn unsubscribe(&self, subscriber: &UserId, author: &UserId) -> Result<bool, RepositoryError>;
            async fn is_subscribed(&self, subscriber: &UserId, author: &UserId) -> Result<bool, RepositoryError>;
            async fn list_authors(&self, subscriber: &UserId, page: &PageRequest) -> Result<Page<UserProfile>, RepositoryError>;
        }
    }

    mock! {
        pub UserRepo {}

        #[async_trait]
        impl UserRepository for UserRepo {
            async fn get_by_id(&self, id: &UserId) -> Result<UserProfile, RepositoryError>;
            async fn find_by_username(&self, username: &str) -> Result<Option<UserProfile>, RepositoryError>;
            async fn save(&self, profile: &UserProfile) -> Result<(), RepositoryError>;
        }
    }

    mock! {
        pub RecipeRepo {}

        #[async_trait]
        impl RecipeRepository for RecipeRepo {
            async fn get_by_id(&self, id: Uuid) -> Result<Recipe, RepositoryError>;
            async fn list(&self, query: &RecipeQuery, page: &PageRequest) -> Result<Page<Recipe>, RepositoryError>;
            async fn save(&self, recipe: &Recipe) -> Result<(), RepositoryError>;
            async fn delete(&self, id: Uuid) -> Result<(), RepositoryError>;
            async fn get_summaries_by_author(&self, author: &UserId, limit: Option<i64>) -> Result<Vec<RecipeSummary>, RepositoryError>;
            async fn count_by_author(&self, author: &UserId) -> Result<u64, RepositoryError>;
        }
    }

    mock! {
        pub Log {}

        impl Logger for Log {
            fn info(&self, message: &str);
            fn warn(&self, message: &str);
            fn error(&self, message: &str);
            fn debug(&self, message: &str);
        }
    }

    fn mock_logger() -> Arc<dyn Logger> {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().returning(|_| ());
        logger.expect_error().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        Arc::new(logger)
    }

    fn existing_user_repo() -> MockUserRepo {
        let mut repo = MockUserRepo::new();
        repo.expect_get_by_id().returning(|id| {
            Ok(UserProfile::from_repository(
                id.clone(),
                format!("{}@example.com", id),
                id.to_string(),
                String::new(),
                String::new(),
            ))
        });
        repo
    }

    fn summary(name: &str) -> RecipeSummary {
        RecipeSummary {
            id: Uuid::new_v4(),
            name: name.to_string(),
            image: format!("{}.png", name),
            cooking_time: 15,
        }
    }

    fn params(author: &str, recipes_limit: Option<u32>) -> SubscribeParams {
        SubscribeParams {
            user_id: UserId::new("fan"),
            author_id: UserId::new(author),
            recipes_limit,
        }
    }

    #[tokio::test]
    async fn should_subscribe_and_return_author_feed() {
        let mut subscription_repo = MockSubscriptionRepo::new();
        subscription_repo
            .expect_subscribe()
            .withf(|subscriber, author| subscriber.as_str() == "fan" && author.as_str() == "chef")
            .times(1)
            .returning(|_, _| Ok(()));
        let mut recipe_repo = MockRecipeRepo::new();
        recipe_repo
            .expect_get_summaries_by_author()
            .withf(|_, limit| *limit == Some(2))
            .returning(|_, _| Ok(vec![summary("paella"), summary("gazpacho")]));
        recipe_repo.expect_count_by_author().returning(|_| Ok(5));

        let use_case = SubscribeUseCaseImpl {
            repository: Arc::new(subscription_repo),
            user_repository: Arc::new(existing_user_repo()),
            recipe_repository: Arc::new(recipe_repo),
            logger: mock_logger(),
        };

        let feed = use_case.execute(params("chef", Some(2))).await.unwrap();

        assert_eq!(feed.author.username, "chef");
        assert!(feed.is_subscribed);
        assert_eq!(feed.recipes.len(), 2);
        assert_eq!(feed.recipes_count, 5);
    }

    #[tokio::test]
    async fn should_reject_self_subscription() {
        let mut subscription_repo = MockSubscriptionRepo::new();
        subscription_repo.expect_subscribe().never();

        let use_case = SubscribeUseCaseImpl {
            repository: Arc::new(subscription_repo),
            user_repository: Arc::new(existing_user_repo()),
            recipe_repository: Arc::new(MockRecipeRepo::new()),
            logger: mock_logger(),
        };

        let result = use_case.execute(params("fan", None)).await;

        assert!(matches!(result.unwrap_err(), SubscriptionError::SelfSubscription));
    }

    #[tokio::test]
    async fn should_return_author_not_found_when_author_missing() {
        let mut user_repo = MockUserRepo::new();
        user_repo
            .expect_get_by_id()
            .returning(|_| Err(RepositoryError::NotFound));

        let use_case = SubscribeUseCaseImpl {
            repository: Arc::new(MockSubscriptionRepo::new()),
            user_repository: Arc::new(user_repo),
            recipe_repository: Arc::new(MockRecipeRepo::new()),
            logger: mock_logger(),
        };

        let result = use_case.execute(params("ghost", None)).await;

        assert!(matches!(result.unwrap_err(), SubscriptionError::AuthorNotFound));
    }

    #[tokio::test]
    async fn should_return_already_subscribed_on_duplicate() {
        let mut subscription_repo = MockSubscriptionRepo::new();
        subscription_repo
            .expect_subscribe()
            .returning(|_, _| Err(RepositoryError::Duplicated));

        let use_case = SubscribeUseCaseImpl {
            repository: Arc::new(subscription_repo),
            user_repository: Arc::new(existing_user_repo()),
            recipe_repository: Arc::new(MockRecipeRepo::new()),
            logger: mock_logger(),
        };

        let result = use_case.execute(params("chef", None)).await;

        assert!(matches!(result.unwrap_err(), SubscriptionError::AlreadySubscribed));
    }
}
