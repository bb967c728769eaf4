use std::collections::HashSet;

use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::errors::RecipeError;
use crate::domain::ingredient::model::Ingredient;
use crate::domain::shared::value_objects::UserId;
use crate::domain::tag::model::Tag;

pub const MAX_NAME_LENGTH: usize = 200;
pub const MIN_COOKING_TIME: i32 = 1;
pub const MIN_AMOUNT: i32 = 1;

/// Ingredient of a recipe together with the amount the recipe needs.
#[derive(Debug, Clone, PartialEq)]
pub struct RecipeIngredient {
    pub ingredient_id: Uuid,
    pub name: String,
    pub measurement_unit: String,
    pub amount: i32,
}

#[derive(Debug, Clone)]
pub struct Recipe {
    pub id: Uuid,
    pub author: UserId,
    pub name: String,
    pub text: String,
    /// Reference to the uploaded picture, stored verbatim.
    pub image: String,
    /// Minutes.
    pub cooking_time: i32,
    pub tags: Vec<Tag>,
    pub ingredients: Vec<RecipeIngredient>,
    pub pub_date: DateTime<Utc>,
}

/// Compact recipe view used by favorites, the cart and subscription feeds.
#[derive(Debug, Clone, PartialEq)]
pub struct RecipeSummary {
    pub id: Uuid,
    pub name: String,
    pub image: String,
    pub cooking_time: i32,
}

#[derive(Debug, Clone)]
pub struct IngredientAmount {
    pub ingredient_id: Uuid,
    pub amount: i32,
}

/// Recipe fields as submitted by the author on create or update.
#[derive(Debug, Clone)]
pub struct RecipeDraft {
    pub name: String,
    pub text: String,
    pub image: String,
    pub cooking_time: i32,
    pub tag_ids: Vec<Uuid>,
    pub ingredients: Vec<IngredientAmount>,
}

impl RecipeDraft {
    /// Checks the payload on its own, before anything is looked up.
    pub fn validate(&self) -> Result<(), RecipeError> {
        if self.name.trim().is_empty() {
            return Err(RecipeError::NameEmpty);
        }
        if self.name.trim().chars().count() > MAX_NAME_LENGTH {
            return Err(RecipeError::NameTooLong);
        }
        if self.text.trim().is_empty() {
            return Err(RecipeError::TextEmpty);
        }
        if self.image.trim().is_empty() {
            return Err(RecipeError::ImageEmpty);
        }
        if self.cooking_time < MIN_COOKING_TIME {
            return Err(RecipeError::InvalidCookingTime);
        }

        if self.ingredients.is_empty() {
            return Err(RecipeError::IngredientsEmpty);
        }
        let mut seen = HashSet::new();
        for line in &self.ingredients {
            if !seen.insert(line.ingredient_id) {
                return Err(RecipeError::DuplicateIngredient);
            }
            if line.amount < MIN_AMOUNT {
                return Err(RecipeError::InvalidAmount);
            }
        }

        if self.tag_ids.is_empty() {
            return Err(RecipeError::TagsEmpty);
        }
        let mut seen = HashSet::new();
        if !self.tag_ids.iter().all(|id| seen.insert(*id)) {
            return Err(RecipeError::DuplicateTag);
        }

        Ok(())
    }

    /// Validates the draft and resolves its ids against the catalog entries
    /// found for them. Tags and ingredient lines keep the submitted order.
    fn resolve(
        &self,
        known_tags: &[Tag],
        known_ingredients: &[Ingredient],
    ) -> Result<(Vec<Tag>, Vec<RecipeIngredient>), RecipeError> {
        self.validate()?;

        let tags = self
            .tag_ids
            .iter()
            .map(|id| {
                known_tags
                    .iter()
                    .find(|t| t.id == *id)
                    .cloned()
                    .ok_or(RecipeError::TagNotFound)
            })
            .collect::<Result<Vec<_>, _>>()?;

        let ingredients = self
            .ingredients
            .iter()
            .map(|line| {
                known_ingredients
                    .iter()
                    .find(|i| i.id == line.ingredient_id)
                    .map(|i| RecipeIngredient {
                        ingredient_id: i.id,
                        name: i.name.clone(),
                        measurement_unit: i.measurement_unit.clone(),
                        amount: line.amount,
                    })
                    .ok_or(RecipeError::IngredientNotFound)
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok((tags, ingredients))
    }
}

impl Recipe {
    pub fn new(
        author: UserId,
        draft: RecipeDraft,
        known_tags: &[Tag],
        known_ingredients: &[Ingredient],
    ) -> Result<Self, RecipeError> {
        let (tags, ingredients) = draft.resolve(known_tags, known_ingredients)?;

        Ok(Self {
            id: Uuid::new_v4(),
            author,
            name: draft.name.trim().to_string(),
            text: draft.text,
            image: draft.image,
            cooking_time: draft.cooking_time,
            tags,
            ingredients,
            pub_date: Utc::now(),
        })
    }

    /// Replaces every editable field, including the full tag and ingredient
    /// sets. Identity, author and publication date are kept.
    pub fn revise(
        self,
        draft: RecipeDraft,
        known_tags: &[Tag],
        known_ingredients: &[Ingredient],
    ) -> Result<Self, RecipeError> {
        let (tags, ingredients) = draft.resolve(known_tags, known_ingredients)?;

        Ok(Self {
            name: draft.name.trim().to_string(),
            text: draft.text,
            image: draft.image,
            cooking_time: draft.cooking_time,
            tags,
            ingredients,
            ..self
        })
    }

    /// Constructor for data already persisted in the repository (no validation).
    #[allow(clippy::too_many_arguments)]
    pub fn from_repository(
        id: Uuid,
        author: UserId,
        name: String,
        text: String,
        image: String,
        cooking_time: i32,
        tags: Vec<Tag>,
        ingredients: Vec<RecipeIngredient>,
        pub_date: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            author,
            name,
            text,
            image,
            cooking_time,
            tags,
            ingredients,
            pub_date,
        }
    }

    pub fn is_authored_by(&self, user_id: &UserId) -> bool {
        &self.author == user_id
    }

    pub fn summary(&self) -> RecipeSummary {
        RecipeSummary {
            id: self.id,
            name: self.name.clone(),
            image: self.image.clone(),
            cooking_time: self.cooking_time,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tag(slug: &str) -> Tag {
        Tag::from_repository(
            Uuid::new_v4(),
            slug.to_string(),
            "#FFFFFF".to_string(),
            slug.to_string(),
        )
    }

    fn ingredient(name: &str, unit: &str) -> Ingredient {
        Ingredient::from_repository(Uuid::new_v4(), name.to_string(), unit.to_string())
    }

    fn draft(tags: &[Tag], ingredients: &[(&Ingredient, i32)]) -> RecipeDraft {
        RecipeDraft {
            name: "Pancakes".to_string(),
            text: "Mix and fry.".to_string(),
            image: "recipes/images/pancakes.png".to_string(),
            cooking_time: 20,
            tag_ids: tags.iter().map(|t| t.id).collect(),
            ingredients: ingredients
                .iter()
                .map(|(i, amount)| IngredientAmount {
                    ingredient_id: i.id,
                    amount: *amount,
                })
                .collect(),
        }
    }

    #[test]
    fn should_create_recipe_with_resolved_lines_in_submitted_order() {
        let breakfast = tag("breakfast");
        let flour = ingredient("Flour", "g");
        let milk = ingredient("Milk", "ml");

        let recipe = Recipe::new(
            UserId::new("author"),
            draft(&[breakfast.clone()], &[(&milk, 300), (&flour, 200)]),
            &[breakfast],
            &[flour, milk],
        )
        .unwrap();

        assert_eq!(recipe.ingredients.len(), 2);
        assert_eq!(recipe.ingredients[0].name, "Milk");
        assert_eq!(recipe.ingredients[0].amount, 300);
        assert_eq!(recipe.ingredients[1].measurement_unit, "g");
        assert_eq!(recipe.tags[0].slug, "breakfast");
    }

    #[test]
    fn should_reject_duplicate_ingredient() {
        let lunch = tag("lunch");
        let salt = ingredient("Salt", "g");

        let result = Recipe::new(
            UserId::new("author"),
            draft(&[lunch.clone()], &[(&salt, 5), (&salt, 3)]),
            &[lunch],
            &[salt],
        );

        assert!(matches!(result.unwrap_err(), RecipeError::DuplicateIngredient));
    }

    #[test]
    fn should_reject_amount_below_one() {
        let lunch = tag("lunch");
        let salt = ingredient("Salt", "g");

        let result = Recipe::new(
            UserId::new("author"),
            draft(&[lunch.clone()], &[(&salt, 0)]),
            &[lunch],
            &[salt],
        );

        assert!(matches!(result.unwrap_err(), RecipeError::InvalidAmount));
    }

    #[test]
    fn should_reject_empty_ingredients_and_tags() {
        let lunch = tag("lunch");
        let salt = ingredient("Salt", "g");

        let no_ingredients = draft(&[lunch.clone()], &[]);
        assert!(matches!(
            no_ingredients.validate().unwrap_err(),
            RecipeError::IngredientsEmpty
        ));

        let no_tags = draft(&[], &[(&salt, 1)]);
        assert!(matches!(
            no_tags.validate().unwrap_err(),
            RecipeError::TagsEmpty
        ));
    }

    #[test]
    fn should_reject_duplicate_tag() {
        let lunch = tag("lunch");
        let salt = ingredient("Salt", "g");

        let result = draft(&[lunch.clone(), lunch], &[(&salt, 1)]).validate();

        assert!(matches!(result.unwrap_err(), RecipeError::DuplicateTag));
    }

    #[test]
    fn should_reject_unknown_ingredient_or_tag() {
        let lunch = tag("lunch");
        let salt = ingredient("Salt", "g");

        let unknown_ingredient = Recipe::new(
            UserId::new("author"),
            draft(&[lunch.clone()], &[(&salt, 1)]),
            &[lunch.clone()],
            &[],
        );
        assert!(matches!(
            unknown_ingredient.unwrap_err(),
            RecipeError::IngredientNotFound
        ));

        let unknown_tag = Recipe::new(
            UserId::new("author"),
            draft(&[lunch], &[(&salt, 1)]),
            &[],
            &[salt],
        );
        assert!(matches!(unknown_tag.unwrap_err(), RecipeError::TagNotFound));
    }

    #[test]
    fn should_reject_cooking_time_below_one_minute() {
        let lunch = tag("lunch");
        let salt = ingredient("Salt", "g");
        let mut invalid = draft(&[lunch], &[(&salt, 1)]);
        invalid.cooking_time = 0;

        assert!(matches!(
            invalid.validate().unwrap_err(),
            RecipeError::InvalidCookingTime
        ));
    }

    #[test]
    fn should_reject_name_too_long() {
        let lunch = tag("lunch");
        let salt = ingredient("Salt", "g");
        let mut invalid = draft(&[lunch], &[(&salt, 1)]);
        invalid.name = "x".repeat(MAX_NAME_LENGTH + 1);

        assert!(matches!(
            invalid.validate().unwrap_err(),
            RecipeError::NameTooLong
        ));
    }

    #[test]
    fn should_revise_recipe_keeping_identity_and_pub_date() {
        let lunch = tag("lunch");
        let dinner = tag("dinner");
        let salt = ingredient("Salt", "g");
        let pepper = ingredient("Pepper", "g");
        let original = Recipe::new(
            UserId::new("author"),
            draft(&[lunch.clone()], &[(&salt, 1)]),
            &[lunch],
            &[salt],
        )
        .unwrap();
        let (id, pub_date) = (original.id, original.pub_date);

        let mut changes = draft(&[dinner.clone()], &[(&pepper, 2)]);
        changes.name = "  Peppered  ".to_string();
        let revised = original.revise(changes, &[dinner], &[pepper]).unwrap();

        assert_eq!(revised.id, id);
        assert_eq!(revised.pub_date, pub_date);
        assert_eq!(revised.name, "Peppered");
        assert_eq!(revised.tags[0].slug, "dinner");
        assert_eq!(revised.ingredients.len(), 1);
        assert_eq!(revised.ingredients[0].name, "Pepper");
    }
}
