use sqlx::FromRow;
use uuid::Uuid;

use business::domain::ingredient::model::Ingredient;

#[derive(Debug, FromRow)]
pub struct IngredientEntity {
    pub id: Uuid,
    pub name: String,
    pub measurement_unit: String,
}

impl IngredientEntity {
    pub fn into_domain(self) -> Ingredient {
        Ingredient::from_repository(self.id, self.name, self.measurement_unit)
    }
}
