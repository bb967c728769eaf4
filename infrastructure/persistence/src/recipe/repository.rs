use std::collections::HashMap;

use async_trait::async_trait;
use sqlx::{PgPool, Postgres, QueryBuilder};
use uuid::Uuid;

use business::domain::collection::model::RecipeCollection;
use business::domain::errors::RepositoryError;
use business::domain::recipe::model::{Recipe, RecipeSummary};
use business::domain::recipe::repository::RecipeRepository;
use business::domain::recipe::value_objects::{MembershipFilter, RecipeQuery};
use business::domain::shared::value_objects::{Page, PageRequest, UserId};

use super::entity::{RecipeEntity, RecipeIngredientEntity, RecipeSummaryEntity, RecipeTagEntity};
use crate::collection::repository::collection_table;
use crate::errors::write_error;

const RECIPE_COLUMNS: &str = "r.id, r.author_id, r.name, r.text, r.image, r.cooking_time, r.pub_date";

pub struct RecipeRepositoryPostgres {
    pool: PgPool,
}

impl RecipeRepositoryPostgres {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Loads tags and ingredient lines of the given recipes, keeping their order.
    async fn hydrate(&self, entities: Vec<RecipeEntity>) -> Result<Vec<Recipe>, RepositoryError> {
        if entities.is_empty() {
            return Ok(Vec::new());
        }
        let ids: Vec<Uuid> = entities.iter().map(|e| e.id).collect();

        let tag_rows = sqlx::query_as::<_, RecipeTagEntity>(
            r#"SELECT rt.recipe_id, t.id, t.name, t.color, t.slug
            FROM recipe_tags rt
            JOIN tags t ON t.id = rt.tag_id
            WHERE rt.recipe_id = ANY($1)
            ORDER BY rt.recipe_id, rt.position"#,
        )
        .bind(&ids)
        .fetch_all(&self.pool)
        .await
        .map_err(|_| RepositoryError::DatabaseError)?;

        let ingredient_rows = sqlx::query_as::<_, RecipeIngredientEntity>(
            r#"SELECT ri.recipe_id, i.id AS ingredient_id, i.name, i.measurement_unit, ri.amount
            FROM recipe_ingredients ri
            JOIN ingredients i ON i.id = ri.ingredient_id
            WHERE ri.recipe_id = ANY($1)
            ORDER BY ri.recipe_id, ri.position"#,
        )
        .bind(&ids)
        .fetch_all(&self.pool)
        .await
        .map_err(|_| RepositoryError::DatabaseError)?;

        let mut tags: HashMap<Uuid, Vec<_>> = HashMap::new();
        for row in tag_rows {
            tags.entry(row.recipe_id).or_default().push(row.into_domain());
        }
        let mut ingredients: HashMap<Uuid, Vec<_>> = HashMap::new();
        for row in ingredient_rows {
            ingredients
                .entry(row.recipe_id)
                .or_default()
                .push(row.into_domain());
        }

        Ok(entities
            .into_iter()
            .map(|e| {
                let recipe_tags = tags.remove(&e.id).unwrap_or_default();
                let recipe_ingredients = ingredients.remove(&e.id).unwrap_or_default();
                e.into_domain(recipe_tags, recipe_ingredients)
            })
            .collect())
    }
}

fn push_membership(
    builder: &mut QueryBuilder<'_, Postgres>,
    collection: RecipeCollection,
    filter: &MembershipFilter,
) {
    builder.push(if filter.member {
        " AND EXISTS"
    } else {
        " AND NOT EXISTS"
    });
    builder.push(format!(
        " (SELECT 1 FROM {} c WHERE c.recipe_id = r.id AND c.user_id = ",
        collection_table(collection)
    ));
    builder.push_bind(filter.user_id.as_str().to_string());
    builder.push(")");
}

/// Appends the WHERE conditions of `query` to a statement over `recipes r`.
fn push_filters(builder: &mut QueryBuilder<'_, Postgres>, query: &RecipeQuery) {
    builder.push(" WHERE TRUE");
    if let Some(author) = &query.author {
        builder.push(" AND r.author_id = ");
        builder.push_bind(author.as_str().to_string());
    }
    if !query.tags.is_empty() {
        builder.push(
            " AND EXISTS (SELECT 1 FROM recipe_tags rt JOIN tags t ON t.id = rt.tag_id \
             WHERE rt.recipe_id = r.id AND t.slug = ANY(",
        );
        builder.push_bind(query.tags.clone());
        builder.push("))");
    }
    if let Some(filter) = &query.favorited {
        push_membership(builder, RecipeCollection::Favorites, filter);
    }
    if let Some(filter) = &query.in_shopping_cart {
        push_membership(builder, RecipeCollection::ShoppingCart, filter);
    }
}

#[async_trait]
impl RecipeRepository for RecipeRepositoryPostgres {
    async fn get_by_id(&self, id: Uuid) -> Result<Recipe, RepositoryError> {
        let entity = sqlx::query_as::<_, RecipeEntity>(&format!(
            "SELECT {} FROM recipes r WHERE r.id = $1",
            RECIPE_COLUMNS
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|_| RepositoryError::DatabaseError)?
        .ok_or(RepositoryError::NotFound)?;

        self.hydrate(vec![entity])
            .await?
            .pop()
            .ok_or(RepositoryError::NotFound)
    }

    async fn list(
        &self,
        query: &RecipeQuery,
        page: &PageRequest,
    ) -> Result<Page<Recipe>, RepositoryError> {
        let mut count_query = QueryBuilder::<Postgres>::new("SELECT COUNT(*) FROM recipes r");
        push_filters(&mut count_query, query);
        let count: i64 = count_query
            .build_query_scalar()
            .fetch_one(&self.pool)
            .await
            .map_err(|_| RepositoryError::DatabaseError)?;

        let mut select = QueryBuilder::<Postgres>::new(format!(
            "SELECT {} FROM recipes r",
            RECIPE_COLUMNS
        ));
        push_filters(&mut select, query);
        select.push(" ORDER BY r.pub_date DESC, r.id LIMIT ");
        select.push_bind(page.limit());
        select.push(" OFFSET ");
        select.push_bind(page.offset());
        let entities = select
            .build_query_as::<RecipeEntity>()
            .fetch_all(&self.pool)
            .await
            .map_err(|_| RepositoryError::DatabaseError)?;

        Ok(Page {
            count: count.max(0) as u64,
            items: self.hydrate(entities).await?,
        })
    }

    async fn save(&self, recipe: &Recipe) -> Result<(), RepositoryError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|_| RepositoryError::DatabaseError)?;

        sqlx::query(
            r#"INSERT INTO recipes (id, author_id, name, text, image, cooking_time, pub_date)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            ON CONFLICT (id) DO UPDATE SET
                name = EXCLUDED.name,
                text = EXCLUDED.text,
                image = EXCLUDED.image,
                cooking_time = EXCLUDED.cooking_time"#,
        )
        .bind(recipe.id)
        .bind(recipe.author.as_str())
        .bind(&recipe.name)
        .bind(&recipe.text)
        .bind(&recipe.image)
        .bind(recipe.cooking_time)
        .bind(recipe.pub_date)
        .execute(&mut *tx)
        .await
        .map_err(write_error)?;

        sqlx::query("DELETE FROM recipe_ingredients WHERE recipe_id = $1")
            .bind(recipe.id)
            .execute(&mut *tx)
            .await
            .map_err(|_| RepositoryError::DatabaseError)?;
        for (position, line) in recipe.ingredients.iter().enumerate() {
            sqlx::query(
                "INSERT INTO recipe_ingredients (recipe_id, ingredient_id, amount, position) VALUES ($1, $2, $3, $4)",
            )
            .bind(recipe.id)
            .bind(line.ingredient_id)
            .bind(line.amount)
            .bind(position as i32)
            .execute(&mut *tx)
            .await
            .map_err(write_error)?;
        }

        sqlx::query("DELETE FROM recipe_tags WHERE recipe_id = $1")
            .bind(recipe.id)
            .execute(&mut *tx)
            .await
            .map_err(|_| RepositoryError::DatabaseError)?;
        for (position, tag) in recipe.tags.iter().enumerate() {
            sqlx::query("INSERT INTO recipe_tags (recipe_id, tag_id, position) VALUES ($1, $2, $3)")
                .bind(recipe.id)
                .bind(tag.id)
                .bind(position as i32)
                .execute(&mut *tx)
                .await
                .map_err(write_error)?;
        }

        tx.commit()
            .await
            .map_err(|_| RepositoryError::DatabaseError)?;

        Ok(())
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError> {
        sqlx::query("DELETE FROM recipes WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|_| RepositoryError::DatabaseError)?;

        Ok(())
    }

    async fn get_summaries_by_author(
        &self,
        author: &UserId,
        limit: Option<i64>,
    ) -> Result<Vec<RecipeSummary>, RepositoryError> {
        let entities = sqlx::query_as::<_, RecipeSummaryEntity>(
            "SELECT id, name, image, cooking_time FROM recipes WHERE author_id = $1 ORDER BY pub_date DESC, id LIMIT $2",
        )
        .bind(author.as_str())
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(|_| RepositoryError::DatabaseError)?;

        Ok(entities.into_iter().map(|e| e.into_domain()).collect())
    }

    async fn count_by_author(&self, author: &UserId) -> Result<u64, RepositoryError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM recipes WHERE author_id = $1")
            .bind(author.as_str())
            .fetch_one(&self.pool)
            .await
            .map_err(|_| RepositoryError::DatabaseError)?;

        Ok(count.max(0) as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filters_sql(query: &RecipeQuery) -> String {
        let mut builder = QueryBuilder::<Postgres>::new("SELECT r.id FROM recipes r");
        push_filters(&mut builder, query);
        builder.sql().to_string()
    }

    #[test]
    fn should_not_filter_without_conditions() {
        assert_eq!(
            filters_sql(&RecipeQuery::default()),
            "SELECT r.id FROM recipes r WHERE TRUE"
        );
    }

    #[test]
    fn should_bind_author_and_tags() {
        let sql = filters_sql(&RecipeQuery {
            author: Some(UserId::new("chef")),
            tags: vec!["lunch".to_string(), "dinner".to_string()],
            ..Default::default()
        });

        assert!(sql.contains("r.author_id = $1"));
        assert!(sql.contains("t.slug = ANY($2)"));
    }

    #[test]
    fn should_use_not_exists_for_excluded_memberships() {
        let sql = filters_sql(&RecipeQuery {
            favorited: Some(MembershipFilter {
                user_id: UserId::new("viewer"),
                member: true,
            }),
            in_shopping_cart: Some(MembershipFilter {
                user_id: UserId::new("viewer"),
                member: false,
            }),
            ..Default::default()
        });

        assert!(sql.contains(" AND EXISTS (SELECT 1 FROM favorites c"));
        assert!(sql.contains(" AND NOT EXISTS (SELECT 1 FROM shopping_carts c"));
    }
}
