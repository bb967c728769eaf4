use chrono::{DateTime, Utc};
use poem_openapi::Object;
use uuid::Uuid;

use business::domain::recipe::model::{
    IngredientAmount, RecipeDraft, RecipeIngredient, RecipeSummary,
};
use business::domain::recipe::projection::AnnotatedRecipe;
use business::domain::shared::value_objects::Page;

use crate::api::tag::dto::TagResponse;

#[derive(Debug, Clone, Object)]
pub struct IngredientAmountRequest {
    /// Ingredient id from the catalog
    pub id: Uuid,
    /// Amount in the ingredient's measurement unit (at least 1)
    pub amount: i32,
}

#[derive(Debug, Clone, Object)]
pub struct RecipeRequest {
    /// Recipe name (at most 200 characters)
    pub name: String,
    /// Cooking instructions
    pub text: String,
    /// Picture reference
    pub image: String,
    /// Cooking time in minutes (at least 1)
    pub cooking_time: i32,
    /// Tag ids, without duplicates
    pub tags: Vec<Uuid>,
    /// Ingredient lines, without duplicate ingredients
    pub ingredients: Vec<IngredientAmountRequest>,
}

impl From<RecipeRequest> for RecipeDraft {
    fn from(request: RecipeRequest) -> Self {
        Self {
            name: request.name,
            text: request.text,
            image: request.image,
            cooking_time: request.cooking_time,
            tag_ids: request.tags,
            ingredients: request
                .ingredients
                .into_iter()
                .map(|line| IngredientAmount {
                    ingredient_id: line.id,
                    amount: line.amount,
                })
                .collect(),
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct RecipeIngredientResponse {
    /// Ingredient id
    pub id: String,
    pub name: String,
    pub measurement_unit: String,
    pub amount: i32,
}

impl From<RecipeIngredient> for RecipeIngredientResponse {
    fn from(line: RecipeIngredient) -> Self {
        Self {
            id: line.ingredient_id.to_string(),
            name: line.name,
            measurement_unit: line.measurement_unit,
            amount: line.amount,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct RecipeResponse {
    /// Recipe unique identifier
    pub id: String,
    /// Author user id
    pub author: String,
    pub name: String,
    pub text: String,
    pub image: String,
    /// Cooking time in minutes
    pub cooking_time: i32,
    pub tags: Vec<TagResponse>,
    pub ingredients: Vec<RecipeIngredientResponse>,
    /// Whether the caller has the recipe in their favorites
    pub is_favorited: bool,
    /// Whether the caller has the recipe in their shopping cart
    pub is_in_shopping_cart: bool,
    /// Publication timestamp
    pub pub_date: DateTime<Utc>,
}

impl From<AnnotatedRecipe> for RecipeResponse {
    fn from(annotated: AnnotatedRecipe) -> Self {
        let AnnotatedRecipe {
            recipe,
            annotations,
        } = annotated;
        Self {
            id: recipe.id.to_string(),
            author: recipe.author.to_string(),
            name: recipe.name,
            text: recipe.text,
            image: recipe.image,
            cooking_time: recipe.cooking_time,
            tags: recipe.tags.into_iter().map(|t| t.into()).collect(),
            ingredients: recipe.ingredients.into_iter().map(|i| i.into()).collect(),
            is_favorited: annotations.is_favorited,
            is_in_shopping_cart: annotations.is_in_shopping_cart,
            pub_date: recipe.pub_date,
        }
    }
}

/// Short recipe view
#[derive(Debug, Clone, Object)]
pub struct RecipeSummaryResponse {
    pub id: String,
    pub name: String,
    pub image: String,
    pub cooking_time: i32,
}

impl From<RecipeSummary> for RecipeSummaryResponse {
    fn from(summary: RecipeSummary) -> Self {
        Self {
            id: summary.id.to_string(),
            name: summary.name,
            image: summary.image,
            cooking_time: summary.cooking_time,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct RecipePageResponse {
    /// Number of recipes matching the filters
    pub count: u64,
    pub results: Vec<RecipeResponse>,
}

impl From<Page<AnnotatedRecipe>> for RecipePageResponse {
    fn from(page: Page<AnnotatedRecipe>) -> Self {
        Self {
            count: page.count,
            results: page.items.into_iter().map(|r| r.into()).collect(),
        }
    }
}
