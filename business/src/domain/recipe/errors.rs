#[derive(Debug, thiserror::Error)]
pub enum RecipeError {
    #[error("recipe.not_found")]
    NotFound,
    /// Only the author may change or delete a recipe.
    #[error("recipe.forbidden")]
    Forbidden,
    #[error("recipe.name_empty")]
    NameEmpty,
    #[error("recipe.name_too_long")]
    NameTooLong,
    #[error("recipe.text_empty")]
    TextEmpty,
    #[error("recipe.image_empty")]
    ImageEmpty,
    #[error("recipe.invalid_cooking_time")]
    InvalidCookingTime,
    #[error("recipe.ingredients_empty")]
    IngredientsEmpty,
    #[error("recipe.duplicate_ingredient")]
    DuplicateIngredient,
    #[error("recipe.invalid_amount")]
    InvalidAmount,
    #[error("recipe.ingredient_not_found")]
    IngredientNotFound,
    #[error("recipe.tags_empty")]
    TagsEmpty,
    #[error("recipe.duplicate_tag")]
    DuplicateTag,
    #[error("recipe.tag_not_found")]
    TagNotFound,
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}

impl RecipeError {
    /// True for errors caused by the submitted recipe payload.
    pub fn is_validation(&self) -> bool {
        !matches!(
            self,
            RecipeError::NotFound | RecipeError::Forbidden | RecipeError::Repository(_)
        )
    }
}
