use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::shared::value_objects::UserId;

use super::model::CartRecipe;

#[async_trait]
pub trait ShoppingCartRepository: Send + Sync {
    /// Recipes in the user's cart, oldest addition first, each with its
    /// ingredient lines in recipe order.
    async fn get_cart_recipes(&self, user_id: &UserId) -> Result<Vec<CartRecipe>, RepositoryError>;
}
