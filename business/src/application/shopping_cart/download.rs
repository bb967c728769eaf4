use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::logger::Logger;
use crate::domain::shopping_cart::aggregation::aggregate;
use crate::domain::shopping_cart::errors::ShoppingCartError;
use crate::domain::shopping_cart::model::IngredientLine;
use crate::domain::shopping_cart::repository::ShoppingCartRepository;
use crate::domain::shopping_cart::use_cases::download::{
    DownloadShoppingListParams, DownloadShoppingListUseCase,
};

pub struct DownloadShoppingListUseCaseImpl {
    pub repository: Arc<dyn ShoppingCartRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl DownloadShoppingListUseCase for DownloadShoppingListUseCaseImpl {
    async fn execute(
        &self,
        params: DownloadShoppingListParams,
    ) -> Result<Vec<IngredientLine>, ShoppingCartError> {
        self.logger.info(&format!(
            "Building shopping list for user: {}",
            params.user_id
        ));

        let recipes = self.repository.get_cart_recipes(&params.user_id).await?;
        let list = aggregate(&recipes);

        self.logger.info(&format!(
            "Shopping list built: {} recipes, {} ingredients",
            recipes.len(),
            list.len()
        ));
        Ok(list)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::RepositoryError;
    use crate::domain::shared::value_objects::UserId;
    use crate::domain::shopping_cart::model::CartRecipe;
    use mockall::mock;
    use mockall::predicate::eq;

    mock! {
        pub CartRepo {}

        #[async_trait]
        impl ShoppingCartRepository for CartRepo {
            async fn get_cart_recipes(&self, user_id: &UserId) -> Result<Vec<CartRecipe>, RepositoryError>;
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

    fn line(name: &str, amount: i64, unit: &str) -> IngredientLine {
        IngredientLine::new(name.to_string(), amount, unit.to_string())
    }

    #[tokio::test]
    async fn should_consolidate_cart_recipes_of_user() {
        let mut mock_repo = MockCartRepo::new();
        mock_repo
            .expect_get_cart_recipes()
            .with(eq(UserId::new("test-user-id")))
            .returning(|_| {
                Ok(vec![
                    CartRecipe::new(vec![line("Flour", 200, "g"), line("Salt", 5, "g")]),
                    CartRecipe::new(vec![line("Flour", 100, "g")]),
                ])
            });

        let use_case = DownloadShoppingListUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let list = use_case
            .execute(DownloadShoppingListParams {
                user_id: UserId::new("test-user-id"),
            })
            .await
            .unwrap();

        assert_eq!(list, vec![line("Flour", 300, "g"), line("Salt", 5, "g")]);
    }

    #[tokio::test]
    async fn should_return_empty_list_when_cart_empty() {
        let mut mock_repo = MockCartRepo::new();
        mock_repo.expect_get_cart_recipes().returning(|_| Ok(vec![]));

        let use_case = DownloadShoppingListUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let list = use_case
            .execute(DownloadShoppingListParams {
                user_id: UserId::new("test-user-id"),
            })
            .await
            .unwrap();

        assert!(list.is_empty());
    }

    #[tokio::test]
    async fn should_propagate_repository_failure() {
        let mut mock_repo = MockCartRepo::new();
        mock_repo
            .expect_get_cart_recipes()
            .returning(|_| Err(RepositoryError::DatabaseError));

        let use_case = DownloadShoppingListUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(DownloadShoppingListParams {
                user_id: UserId::new("test-user-id"),
            })
            .await;

        assert!(matches!(
            result.unwrap_err(),
            ShoppingCartError::Repository(RepositoryError::DatabaseError)
        ));
    }
}
