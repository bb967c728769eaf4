use poem_openapi::Object;

use business::domain::ingredient::model::Ingredient;

#[derive(Debug, Clone, Object)]
pub struct IngredientResponse {
    /// Ingredient unique identifier
    pub id: String,
    /// Ingredient name
    pub name: String,
    /// Unit amounts of this ingredient are expressed in
    pub measurement_unit: String,
}

impl From<Ingredient> for IngredientResponse {
    fn from(ingredient: Ingredient) -> Self {
        Self {
            id: ingredient.id.to_string(),
            name: ingredient.name,
            measurement_unit: ingredient.measurement_unit,
        }
    }
}
