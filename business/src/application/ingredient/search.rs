use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::ingredient::errors::IngredientError;
use crate::domain::ingredient::model::Ingredient;
use crate::domain::ingredient::repository::IngredientRepository;
use crate::domain::ingredient::use_cases::search::{
    SearchIngredientsParams, SearchIngredientsUseCase,
};
use crate::domain::logger::Logger;

pub struct SearchIngredientsUseCaseImpl {
    pub repository: Arc<dyn IngredientRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl SearchIngredientsUseCase for SearchIngredientsUseCaseImpl {
    async fn execute(
        &self,
        params: SearchIngredientsParams,
    ) -> Result<Vec<Ingredient>, IngredientError> {
        // A blank search box means "no filter".
        let search = params
            .search
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());

        self.logger
            .debug(&format!("Searching ingredients: {:?}", search));
        let ingredients = self.repository.search(search).await?;
        Ok(ingredients)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::RepositoryError;
    use mockall::mock;
    use mockall::predicate::eq;
    use uuid::Uuid;

    mock! {
        pub IngredientRepo {}

        #[async_trait]
        impl IngredientRepository for IngredientRepo {
            async fn search(&self, name: Option<String>) -> Result<Vec<Ingredient>, RepositoryError>;
            async fn get_by_id(&self, id: Uuid) -> Result<Ingredient, RepositoryError>;
            async fn get_by_ids(&self, ids: &[Uuid]) -> Result<Vec<Ingredient>, RepositoryError>;
            async fn count(&self) -> Result<u64, RepositoryError>;
            async fn save_all(&self, ingredients: &[Ingredient]) -> Result<u64, RepositoryError>;
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

    #[tokio::test]
    async fn should_pass_trimmed_search_to_repository() {
        let mut mock_repo = MockIngredientRepo::new();
        mock_repo
            .expect_search()
            .with(eq(Some("flo".to_string())))
            .returning(|_| {
                Ok(vec![Ingredient::from_repository(
                    Uuid::new_v4(),
                    "Flour".to_string(),
                    "g".to_string(),
                )])
            });

        let use_case = SearchIngredientsUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(SearchIngredientsParams {
                search: Some("  flo ".to_string()),
            })
            .await
            .unwrap();

        assert_eq!(result.len(), 1);
        assert_eq!(result[0].name, "Flour");
    }

    #[tokio::test]
    async fn should_list_everything_when_search_blank() {
        let mut mock_repo = MockIngredientRepo::new();
        mock_repo
            .expect_search()
            .with(eq(None))
            .returning(|_| Ok(vec![]));

        let use_case = SearchIngredientsUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(SearchIngredientsParams {
                search: Some("   ".to_string()),
            })
            .await;

        assert!(result.unwrap().is_empty());
    }
}
