use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use business::domain::errors::RepositoryError;
use business::domain::ingredient::model::Ingredient;
use business::domain::ingredient::repository::IngredientRepository;

use super::entity::IngredientEntity;
use crate::errors::write_error;

pub struct IngredientRepositoryPostgres {
    pool: PgPool,
}

impl IngredientRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Escapes LIKE wildcards so user input only matches literally.
fn like_pattern(search: &str) -> String {
    let escaped = search
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_");
    format!("%{}%", escaped)
}

#[async_trait]
impl IngredientRepository for IngredientRepositoryPostgres {
    async fn search(&self, name: Option<String>) -> Result<Vec<Ingredient>, RepositoryError> {
        let entities = match name {
            Some(name) => sqlx::query_as::<_, IngredientEntity>(
                "SELECT id, name, measurement_unit FROM ingredients WHERE name ILIKE $1 ORDER BY name",
            )
            .bind(like_pattern(&name))
            .fetch_all(&self.pool)
            .await,
            None => sqlx::query_as::<_, IngredientEntity>(
                "SELECT id, name, measurement_unit FROM ingredients ORDER BY name",
            )
            .fetch_all(&self.pool)
            .await,
        }
        .map_err(|_| RepositoryError::DatabaseError)?;

        Ok(entities.into_iter().map(|e| e.into_domain()).collect())
    }

    async fn get_by_id(&self, id: Uuid) -> Result<Ingredient, RepositoryError> {
        let entity = sqlx::query_as::<_, IngredientEntity>(
            "SELECT id, name, measurement_unit FROM ingredients WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|_| RepositoryError::DatabaseError)?
        .ok_or(RepositoryError::NotFound)?;

        Ok(entity.into_domain())
    }

    async fn get_by_ids(&self, ids: &[Uuid]) -> Result<Vec<Ingredient>, RepositoryError> {
        let entities = sqlx::query_as::<_, IngredientEntity>(
            "SELECT id, name, measurement_unit FROM ingredients WHERE id = ANY($1)",
        )
        .bind(ids)
        .fetch_all(&self.pool)
        .await
        .map_err(|_| RepositoryError::DatabaseError)?;

        Ok(entities.into_iter().map(|e| e.into_domain()).collect())
    }

    async fn count(&self) -> Result<u64, RepositoryError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM ingredients")
            .fetch_one(&self.pool)
            .await
            .map_err(|_| RepositoryError::DatabaseError)?;

        Ok(count.max(0) as u64)
    }

    async fn save_all(&self, ingredients: &[Ingredient]) -> Result<u64, RepositoryError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|_| RepositoryError::DatabaseError)?;

        let mut inserted = 0;
        for ingredient in ingredients {
            let result = sqlx::query(
                r#"INSERT INTO ingredients (id, name, measurement_unit)
                VALUES ($1, $2, $3)
                ON CONFLICT (name, measurement_unit) DO NOTHING"#,
            )
            .bind(ingredient.id)
            .bind(&ingredient.name)
            .bind(&ingredient.measurement_unit)
            .execute(&mut *tx)
            .await
            .map_err(write_error)?;
            inserted += result.rows_affected();
        }

        tx.commit()
            .await
            .map_err(|_| RepositoryError::DatabaseError)?;

        Ok(inserted)
    }
}
