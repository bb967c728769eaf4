use async_trait::async_trait;
use sqlx::PgPool;

use business::domain::errors::RepositoryError;
use business::domain::shared::value_objects::UserId;
use business::domain::shopping_cart::model::CartRecipe;
use business::domain::shopping_cart::repository::ShoppingCartRepository;

use super::entity::{CartLineEntity, group_by_recipe};

pub struct ShoppingCartRepositoryPostgres {
    pool: PgPool,
}

impl ShoppingCartRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ShoppingCartRepository for ShoppingCartRepositoryPostgres {
    async fn get_cart_recipes(&self, user_id: &UserId) -> Result<Vec<CartRecipe>, RepositoryError> {
        let rows = sqlx::query_as::<_, CartLineEntity>(
            r#"SELECT sc.recipe_id, i.name, ri.amount, i.measurement_unit
            FROM shopping_carts sc
            JOIN recipe_ingredients ri ON ri.recipe_id = sc.recipe_id
            JOIN ingredients i ON i.id = ri.ingredient_id
            WHERE sc.user_id = $1
            ORDER BY sc.added_at, sc.recipe_id, ri.position"#,
        )
        .bind(user_id.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(|_| RepositoryError::DatabaseError)?;

        Ok(group_by_recipe(rows))
    }
}
