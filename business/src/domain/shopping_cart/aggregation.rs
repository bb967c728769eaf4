use std::collections::HashMap;

use super::model::{CartRecipe, IngredientLine};

/// Consolidates the ingredient lines of the given recipes into a shopping list.
///
/// Lines sharing a `name` are merged by summing their amounts. Entries come out
/// in first-seen order: recipes in input order, then lines in recipe order.
/// The first-seen unit is kept; units of later lines are not compared.
pub fn aggregate(recipes: &[CartRecipe]) -> Vec<IngredientLine> {
    let mut positions: HashMap<&str, usize> = HashMap::new();
    let mut list: Vec<IngredientLine> = Vec::new();

    for line in recipes.iter().flat_map(CartRecipe::lines) {
        match positions.get(line.name.as_str()) {
            Some(&index) => list[index].amount += line.amount,
            None => {
                positions.insert(line.name.as_str(), list.len());
                list.push(line.clone());
            }
        }
    }

    list
}
