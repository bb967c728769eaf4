use std::collections::HashSet;

use uuid::Uuid;

use super::model::Recipe;
use crate::domain::collection::model::RecipeCollection;
use crate::domain::collection::repository::RecipeCollectionRepository;
use crate::domain::errors::RepositoryError;
use crate::domain::shared::value_objects::UserId;

/// Per-viewer flags shown next to a recipe.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RecipeAnnotations {
    pub is_favorited: bool,
    pub is_in_shopping_cart: bool,
}

#[derive(Debug, Clone)]
pub struct AnnotatedRecipe {
    pub recipe: Recipe,
    pub annotations: RecipeAnnotations,
}

/// Recipe ids in the viewer's favorites and shopping cart.
#[derive(Debug, Clone, Default)]
pub struct ViewerCollections {
    favorites: HashSet<Uuid>,
    shopping_cart: HashSet<Uuid>,
}

impl ViewerCollections {
    pub fn new(
        favorites: impl IntoIterator<Item = Uuid>,
        shopping_cart: impl IntoIterator<Item = Uuid>,
    ) -> Self {
        Self {
            favorites: favorites.into_iter().collect(),
            shopping_cart: shopping_cart.into_iter().collect(),
        }
    }

    /// No favorites and no cart.
    pub fn anonymous() -> Self {
        Self::default()
    }

    /// Loads both collections of `viewer`; anonymous viewers skip the lookups.
    pub async fn load(
        repository: &dyn RecipeCollectionRepository,
        viewer: Option<&UserId>,
    ) -> Result<Self, RepositoryError> {
        let Some(user_id) = viewer else {
            return Ok(Self::anonymous());
        };

        let favorites = repository
            .recipe_ids(user_id, RecipeCollection::Favorites)
            .await?;
        let shopping_cart = repository
            .recipe_ids(user_id, RecipeCollection::ShoppingCart)
            .await?;
        Ok(Self::new(favorites, shopping_cart))
    }
}

pub fn annotate(recipe: &Recipe, viewer: &ViewerCollections) -> RecipeAnnotations {
    RecipeAnnotations {
        is_favorited: viewer.favorites.contains(&recipe.id),
        is_in_shopping_cart: viewer.shopping_cart.contains(&recipe.id),
    }
}

impl AnnotatedRecipe {
    pub fn new(recipe: Recipe, viewer: &ViewerCollections) -> Self {
        let annotations = annotate(&recipe, viewer);
        Self {
            recipe,
            annotations,
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;

    fn recipe() -> Recipe {
        Recipe::from_repository(
            Uuid::new_v4(),
            UserId::new("author"),
            "Soup".to_string(),
            "Boil.".to_string(),
            "soup.png".to_string(),
            30,
            vec![],
            vec![],
            Utc::now(),
        )
    }

    #[test]
    fn should_flag_recipe_in_favorites_and_cart() {
        let soup = recipe();
        let viewer = ViewerCollections::new([soup.id], [soup.id]);

        let annotations = annotate(&soup, &viewer);

        assert!(annotations.is_favorited);
        assert!(annotations.is_in_shopping_cart);
    }

    #[test]
    fn should_flag_only_matching_collection() {
        let soup = recipe();
        let viewer = ViewerCollections::new([soup.id], [Uuid::new_v4()]);

        let annotations = annotate(&soup, &viewer);

        assert!(annotations.is_favorited);
        assert!(!annotations.is_in_shopping_cart);
    }

    #[test]
    fn should_not_flag_anything_for_anonymous_viewer() {
        let soup = recipe();

        let annotated = AnnotatedRecipe::new(soup, &ViewerCollections::anonymous());

        assert_eq!(annotated.annotations, RecipeAnnotations::default());
    }
}
