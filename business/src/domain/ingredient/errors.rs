#[derive(Debug, thiserror::Error)]
pub enum IngredientError {
    #[error("ingredient.not_found")]
    NotFound,
    #[error("ingredient.name_empty")]
    NameEmpty,
    #[error("ingredient.measurement_unit_empty")]
    MeasurementUnitEmpty,
    #[error("ingredient.field_too_long")]
    FieldTooLong,
    /// The catalog already holds ingredients; a bulk import would duplicate them.
    #[error("ingredient.already_loaded")]
    AlreadyLoaded,
    #[error("repository.persistence")]
    Repository(#[from] crate::domain::errors::RepositoryError),
}
