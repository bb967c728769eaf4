use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::subscription::errors::SubscriptionError;

use crate::api::error::{ErrorResponse, IntoErrorResponse, error_response};

impl IntoErrorResponse for SubscriptionError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        match &self {
            SubscriptionError::AuthorNotFound => {
                error_response(StatusCode::NOT_FOUND, "NotFound", &self.to_string())
            }
            SubscriptionError::SelfSubscription
            | SubscriptionError::AlreadySubscribed
            | SubscriptionError::NotSubscribed => {
                error_response(StatusCode::BAD_REQUEST, "BadRequest", &self.to_string())
            }
            SubscriptionError::Repository(_) => error_response(
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
    fn should_map_self_subscription_to_bad_request() {
        let (status, json) = SubscriptionError::SelfSubscription.into_error_response();

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(json.0.message, "subscription.self_subscription");
    }
}
