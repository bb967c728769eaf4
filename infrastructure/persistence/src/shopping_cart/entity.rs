use sqlx::FromRow;
use uuid::Uuid;

use business::domain::shopping_cart::model::{CartRecipe, IngredientLine};

/// One ingredient line of a recipe in a user's cart.
#[derive(Debug, FromRow)]
pub struct CartLineEntity {
    pub recipe_id: Uuid,
    pub name: String,
    pub amount: i32,
    pub measurement_unit: String,
}

impl CartLineEntity {
    pub fn into_domain(self) -> IngredientLine {
        IngredientLine::new(self.name, i64::from(self.amount), self.measurement_unit)
    }
}

/// Groups consecutive rows of the same recipe, preserving row order.
pub fn group_by_recipe(rows: Vec<CartLineEntity>) -> Vec<CartRecipe> {
    let mut recipes: Vec<(Uuid, Vec<IngredientLine>)> = Vec::new();
    for row in rows {
        match recipes.last_mut() {
            Some((recipe_id, lines)) if *recipe_id == row.recipe_id => {
                lines.push(row.into_domain())
            }
            _ => recipes.push((row.recipe_id, vec![row.into_domain()])),
        }
    }
    recipes
        .into_iter()
        .map(|(_, lines)| CartRecipe::new(lines))
        .collect()
}
