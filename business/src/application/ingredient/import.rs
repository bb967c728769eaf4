use std::collections::HashSet;
use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::ingredient::errors::IngredientError;
use crate::domain::ingredient::model::Ingredient;
use crate::domain::ingredient::repository::IngredientRepository;
use crate::domain::ingredient::use_cases::import::{
    ImportIngredientsParams, ImportIngredientsUseCase,
};
use crate::domain::logger::Logger;

pub struct ImportIngredientsUseCaseImpl {
    pub repository: Arc<dyn IngredientRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl ImportIngredientsUseCase for ImportIngredientsUseCaseImpl {
    async fn execute(&self, params: ImportIngredientsParams) -> Result<u64, IngredientError> {
        self.logger.info(&format!(
            "Importing ingredient catalog ({} rows)",
            params.rows.len()
        ));

        if self.repository.count().await? > 0 {
            self.logger
                .warn("Ingredient catalog already loaded, refusing to import");
            return Err(IngredientError::AlreadyLoaded);
        }

        let mut seen = HashSet::new();
        let mut ingredients = Vec::with_capacity(params.rows.len());
        for row in params.rows {
            let ingredient = Ingredient::new(row.name, row.measurement_unit)?;
            if seen.insert((ingredient.name.clone(), ingredient.measurement_unit.clone())) {
                ingredients.push(ingredient);
            }
        }

        let inserted = self.repository.save_all(&ingredients).await?;

        self.logger
            .info(&format!("Imported {} ingredients", inserted));
        Ok(inserted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::RepositoryError;
    use crate::domain::ingredient::use_cases::import::IngredientRow;
    use mockall::mock;
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

    fn row(name: &str, unit: &str) -> IngredientRow {
        IngredientRow {
            name: name.to_string(),
            measurement_unit: unit.to_string(),
        }
    }

    #[tokio::test]
    async fn should_import_rows_skipping_duplicates() {
        let mut mock_repo = MockIngredientRepo::new();
        mock_repo.expect_count().returning(|| Ok(0));
        mock_repo
            .expect_save_all()
            .withf(|ingredients| {
                ingredients.len() == 2
                    && ingredients[0].name == "Flour"
                    && ingredients[1].name == "Salt"
            })
            .returning(|ingredients| Ok(ingredients.len() as u64));

        let use_case = ImportIngredientsUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let inserted = use_case
            .execute(ImportIngredientsParams {
                rows: vec![row("Flour", "g"), row("Salt", "g"), row(" Flour", "g ")],
            })
            .await
            .unwrap();

        assert_eq!(inserted, 2);
    }

    #[tokio::test]
    async fn should_refuse_when_catalog_already_loaded() {
        let mut mock_repo = MockIngredientRepo::new();
        mock_repo.expect_count().returning(|| Ok(12));
        mock_repo.expect_save_all().never();

        let use_case = ImportIngredientsUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(ImportIngredientsParams {
                rows: vec![row("Flour", "g")],
            })
            .await;

        assert!(matches!(result.unwrap_err(), IngredientError::AlreadyLoaded));
    }

    #[tokio::test]
    async fn should_reject_row_with_empty_name() {
        let mut mock_repo = MockIngredientRepo::new();
        mock_repo.expect_count().returning(|| Ok(0));
        mock_repo.expect_save_all().never();

        let use_case = ImportIngredientsUseCaseImpl {
            repository: Arc::new(mock_repo),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(ImportIngredientsParams {
                rows: vec![row("", "g")],
            })
            .await;

        assert!(matches!(result.unwrap_err(), IngredientError::NameEmpty));
    }
}
