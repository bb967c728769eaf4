use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

use business::domain::recipe::model::{Recipe, RecipeIngredient, RecipeSummary};
use business::domain::shared::value_objects::UserId;
use business::domain::tag::model::Tag;

#[derive(Debug, FromRow)]
pub struct RecipeEntity {
    pub id: Uuid,
    pub author_id: String,
    pub name: String,
    pub text: String,
    pub image: String,
    pub cooking_time: i32,
    pub pub_date: DateTime<Utc>,
}

impl RecipeEntity {
    pub fn into_domain(self, tags: Vec<Tag>, ingredients: Vec<RecipeIngredient>) -> Recipe {
        Recipe::from_repository(
            self.id,
            UserId::new(self.author_id),
            self.name,
            self.text,
            self.image,
            self.cooking_time,
            tags,
            ingredients,
            self.pub_date,
        )
    }
}

/// A tag joined to the recipe carrying it.
#[derive(Debug, FromRow)]
pub struct RecipeTagEntity {
    pub recipe_id: Uuid,
    pub id: Uuid,
    pub name: String,
    pub color: String,
    pub slug: String,
}

impl RecipeTagEntity {
    pub fn into_domain(self) -> Tag {
        Tag::from_repository(self.id, self.name, self.color, self.slug)
    }
}

#[derive(Debug, FromRow)]
pub struct RecipeIngredientEntity {
    pub recipe_id: Uuid,
    pub ingredient_id: Uuid,
    pub name: String,
    pub measurement_unit: String,
    pub amount: i32,
}

impl RecipeIngredientEntity {
    pub fn into_domain(self) -> RecipeIngredient {
        RecipeIngredient {
            ingredient_id: self.ingredient_id,
            name: self.name,
            measurement_unit: self.measurement_unit,
            amount: self.amount,
        }
    }
}

#[derive(Debug, FromRow)]
pub struct RecipeSummaryEntity {
    pub id: Uuid,
    pub name: String,
    pub image: String,
    pub cooking_time: i32,
}

impl RecipeSummaryEntity {
    pub fn into_domain(self) -> RecipeSummary {
        RecipeSummary {
            id: self.id,
            name: self.name,
            image: self.image,
            cooking_time: self.cooking_time,
        }
    }
}
