use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use business::domain::errors::RepositoryError;
use business::domain::tag::model::Tag;
use business::domain::tag::repository::TagRepository;

use super::entity::TagEntity;

pub struct TagRepositoryPostgres {
    pool: PgPool,
}

impl TagRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TagRepository for TagRepositoryPostgres {
    async fn get_all(&self) -> Result<Vec<Tag>, RepositoryError> {
        let entities =
            sqlx::query_as::<_, TagEntity>("SELECT id, name, color, slug FROM tags ORDER BY name")
                .fetch_all(&self.pool)
                .await
                .map_err(|_| RepositoryError::DatabaseError)?;

        Ok(entities.into_iter().map(|e| e.into_domain()).collect())
    }

    async fn get_by_id(&self, id: Uuid) -> Result<Tag, RepositoryError> {
        let entity =
            sqlx::query_as::<_, TagEntity>("SELECT id, name, color, slug FROM tags WHERE id = $1")
                .bind(id)
                .fetch_optional(&self.pool)
                .await
                .map_err(|_| RepositoryError::DatabaseError)?
                .ok_or(RepositoryError::NotFound)?;

        Ok(entity.into_domain())
    }

    async fn get_by_ids(&self, ids: &[Uuid]) -> Result<Vec<Tag>, RepositoryError> {
        let entities = sqlx::query_as::<_, TagEntity>(
            "SELECT id, name, color, slug FROM tags WHERE id = ANY($1)",
        )
        .bind(ids)
        .fetch_all(&self.pool)
        .await
        .map_err(|_| RepositoryError::DatabaseError)?;

        Ok(entities.into_iter().map(|e| e.into_domain()).collect())
    }
}
