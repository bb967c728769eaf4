use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::ingredient::errors::IngredientError;

use crate::api::error::{ErrorResponse, IntoErrorResponse, error_response};

impl IntoErrorResponse for IngredientError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        match &self {
            IngredientError::NotFound => {
                error_response(StatusCode::NOT_FOUND, "NotFound", "ingredient.not_found")
            }
            IngredientError::NameEmpty
            | IngredientError::MeasurementUnitEmpty
            | IngredientError::FieldTooLong => {
                error_response(StatusCode::BAD_REQUEST, "ValidationError", &self.to_string())
            }
            IngredientError::AlreadyLoaded => error_response(
                StatusCode::CONFLICT,
                "Conflict",
                "ingredient.already_loaded",
            ),
            IngredientError::Repository(_) => error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                "InternalError",
                "repository.persistence",
            ),
        }
    }
}
