use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::collection::errors::CollectionError;

use crate::api::error::{ErrorResponse, IntoErrorResponse, error_response};

impl IntoErrorResponse for CollectionError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        match &self {
            CollectionError::RecipeNotFound => error_response(
                StatusCode::NOT_FOUND,
                "NotFound",
                "collection.recipe_not_found",
            ),
            CollectionError::AlreadyAdded => error_response(
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "collection.already_added",
            ),
            CollectionError::NotInCollection => error_response(
                StatusCode::BAD_REQUEST,
                "ValidationError",
                "collection.not_in_collection",
            ),
            CollectionError::Repository(_) => error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                "InternalError",
                "repository.persistence",
            ),
        }
    }
}
