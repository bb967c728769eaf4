use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use business::domain::collection::model::RecipeCollection;
use business::domain::collection::repository::RecipeCollectionRepository;
use business::domain::errors::RepositoryError;
use business::domain::shared::value_objects::UserId;

use crate::errors::write_error;

/// Membership table backing each collection.
pub(crate) fn collection_table(collection: RecipeCollection) -> &'static str {
    match collection {
        RecipeCollection::Favorites => "favorites",
        RecipeCollection::ShoppingCart => "shopping_carts",
    }
}

pub struct RecipeCollectionRepositoryPostgres {
    pool: PgPool,
}

impl RecipeCollectionRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RecipeCollectionRepository for RecipeCollectionRepositoryPostgres {
    async fn add(
        &self,
        user_id: &UserId,
        recipe_id: Uuid,
        collection: RecipeCollection,
    ) -> Result<(), RepositoryError> {
        sqlx::query(&format!(
            "INSERT INTO {} (user_id, recipe_id) VALUES ($1, $2)",
            collection_table(collection)
        ))
        .bind(user_id.as_str())
        .bind(recipe_id)
        .execute(&self.pool)
        .await
        .map_err(write_error)?;

        Ok(())
    }

    async fn remove(
        &self,
        user_id: &UserId,
        recipe_id: Uuid,
        collection: RecipeCollection,
    ) -> Result<bool, RepositoryError> {
        let result = sqlx::query(&format!(
            "DELETE FROM {} WHERE user_id = $1 AND recipe_id = $2",
            collection_table(collection)
        ))
        .bind(user_id.as_str())
        .bind(recipe_id)
        .execute(&self.pool)
        .await
        .map_err(|_| RepositoryError::DatabaseError)?;

        Ok(result.rows_affected() > 0)
    }

    async fn recipe_ids(
        &self,
        user_id: &UserId,
        collection: RecipeCollection,
    ) -> Result<Vec<Uuid>, RepositoryError> {
        sqlx::query_scalar::<_, Uuid>(&format!(
            "SELECT recipe_id FROM {} WHERE user_id = $1 ORDER BY added_at",
            collection_table(collection)
        ))
        .bind(user_id.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(|_| RepositoryError::DatabaseError)
    }
}
