use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::user::errors::UserError;

use crate::api::error::{ErrorResponse, IntoErrorResponse, error_response};

impl IntoErrorResponse for UserError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        match &self {
            UserError::NotFound => {
                error_response(StatusCode::NOT_FOUND, "NotFound", "user.not_found")
            }
            UserError::EmailInvalid | UserError::UsernameInvalid | UserError::NameTooLong => {
                error_response(StatusCode::BAD_REQUEST, "ValidationError", &self.to_string())
            }
            UserError::UsernameTaken => {
                error_response(StatusCode::CONFLICT, "Conflict", "user.username_taken")
            }
            UserError::Repository(_) => error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                "InternalError",
                "repository.persistence",
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_map_username_taken_to_conflict() {
        let (status, json) = UserError::UsernameTaken.into_error_response();

        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(json.0.name, "Conflict");
    }
}
