use async_trait::async_trait;
use sqlx::PgPool;

use business::domain::errors::RepositoryError;
use business::domain::shared::value_objects::{Page, PageRequest, UserId};
use business::domain::subscription::repository::SubscriptionRepository;
use business::domain::user::model::UserProfile;

use crate::errors::write_error;
use crate::user::entity::UserEntity;

pub struct SubscriptionRepositoryPostgres {
    pool: PgPool,
}

impl SubscriptionRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SubscriptionRepository for SubscriptionRepositoryPostgres {
    async fn subscribe(&self, subscriber: &UserId, author: &UserId) -> Result<(), RepositoryError> {
        sqlx::query("INSERT INTO subscriptions (subscriber_id, author_id) VALUES ($1, $2)")
            .bind(subscriber.as_str())
            .bind(author.as_str())
            .execute(&self.pool)
            .await
            .map_err(write_error)?;

        Ok(())
    }

    async fn unsubscribe(
        &self,
        subscriber: &UserId,
        author: &UserId,
    ) -> Result<bool, RepositoryError> {
        let result =
            sqlx::query("DELETE FROM subscriptions WHERE subscriber_id = $1 AND author_id = $2")
                .bind(subscriber.as_str())
                .bind(author.as_str())
                .execute(&self.pool)
                .await
                .map_err(|_| RepositoryError::DatabaseError)?;

        Ok(result.rows_affected() > 0)
    }

    async fn is_subscribed(
        &self,
        subscriber: &UserId,
        author: &UserId,
    ) -> Result<bool, RepositoryError> {
        sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS (SELECT 1 FROM subscriptions WHERE subscriber_id = $1 AND author_id = $2)",
        )
        .bind(subscriber.as_str())
        .bind(author.as_str())
        .fetch_one(&self.pool)
        .await
        .map_err(|_| RepositoryError::DatabaseError)
    }

    async fn list_authors(
        &self,
        subscriber: &UserId,
        page: &PageRequest,
    ) -> Result<Page<UserProfile>, RepositoryError> {
        let count: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM subscriptions WHERE subscriber_id = $1")
                .bind(subscriber.as_str())
                .fetch_one(&self.pool)
                .await
                .map_err(|_| RepositoryError::DatabaseError)?;

        let entities = sqlx::query_as::<_, UserEntity>(
            r#"SELECT u.id, u.email, u.username, u.first_name, u.last_name
            FROM subscriptions s
            JOIN users u ON u.id = s.author_id
            WHERE s.subscriber_id = $1
            ORDER BY u.username
            LIMIT $2 OFFSET $3"#,
        )
        .bind(subscriber.as_str())
        .bind(page.limit())
        .bind(page.offset())
        .fetch_all(&self.pool)
        .await
        .map_err(|_| RepositoryError::DatabaseError)?;

        Ok(Page {
            count: count.max(0) as u64,
            items: entities.into_iter().map(|e| e.into_domain()).collect(),
        })
    }
}
