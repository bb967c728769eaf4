use uuid::Uuid;

use super::errors::IngredientError;

pub const MAX_FIELD_LENGTH: usize = 200;

/// Catalog entry recipes pick their ingredients from.
#[derive(Debug, Clone, PartialEq)]
pub struct Ingredient {
    pub id: Uuid,
    pub name: String,
    pub measurement_unit: String,
}

impl Ingredient {
    pub fn new(name: String, measurement_unit: String) -> Result<Self, IngredientError> {
        let name = name.trim().to_string();
        let measurement_unit = measurement_unit.trim().to_string();

        if name.is_empty() {
            return Err(IngredientError::NameEmpty);
        }
        if measurement_unit.is_empty() {
            return Err(IngredientError::MeasurementUnitEmpty);
        }
        if name.chars().count() > MAX_FIELD_LENGTH
            || measurement_unit.chars().count() > MAX_FIELD_LENGTH
        {
            return Err(IngredientError::FieldTooLong);
        }

        Ok(Self {
            id: Uuid::new_v4(),
            name,
            measurement_unit,
        })
    }

    /// Constructor for data already persisted in the repository (no validation).
    pub fn from_repository(id: Uuid, name: String, measurement_unit: String) -> Self {
        Self {
            id,
            name,
            measurement_unit,
        }
    }
}
