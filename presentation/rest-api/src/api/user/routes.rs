use std::sync::Arc;

use poem::Request;
use poem_openapi::{OpenApi, param::Path, payload::Json};

use business::domain::shared::value_objects::UserId;
use business::domain::user::use_cases::get_profile::{GetProfileParams, GetProfileUseCase};
use business::domain::user::use_cases::upsert_profile::{
    UpsertProfileParams, UpsertProfileUseCase,
};

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::security::{JwtBearer, optional_viewer};
use crate::api::tags::ApiTags;
use crate::api::user::dto::{ProfileRequest, UserResponse};

pub struct UserApi {
    get_profile_use_case: Arc<dyn GetProfileUseCase>,
    upsert_profile_use_case: Arc<dyn UpsertProfileUseCase>,
}

impl UserApi {
    pub fn new(
        get_profile_use_case: Arc<dyn GetProfileUseCase>,
        upsert_profile_use_case: Arc<dyn UpsertProfileUseCase>,
    ) -> Self {
        Self {
            get_profile_use_case,
            upsert_profile_use_case,
        }
    }

    async fn profile(&self, viewer: Option<UserId>, id: UserId) -> GetProfileResponse {
        match self
            .get_profile_use_case
            .execute(GetProfileParams { viewer, id })
            .await
        {
            Ok(view) => GetProfileResponse::Ok(Json(view.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => GetProfileResponse::NotFound(json),
                    _ => GetProfileResponse::InternalError(json),
                }
            }
        }
    }
}

/// User profiles
#[OpenApi]
impl UserApi {
    /// Get the caller's profile
    #[oai(path = "/users/me", method = "get", tag = "ApiTags::Users")]
    async fn me(&self, auth: JwtBearer) -> GetProfileResponse {
        let user_id = auth.user_id();
        self.profile(Some(user_id.clone()), user_id).await
    }

    /// Create or update the caller's profile
    ///
    /// The username must be unique.
    #[oai(path = "/users/me", method = "put", tag = "ApiTags::Users")]
    async fn upsert_me(
        &self,
        auth: JwtBearer,
        body: Json<ProfileRequest>,
    ) -> UpsertProfileResponse {
        let params = UpsertProfileParams {
            user_id: auth.user_id(),
            email: body.0.email,
            username: body.0.username,
            first_name: body.0.first_name,
            last_name: body.0.last_name,
        };

        match self.upsert_profile_use_case.execute(params).await {
            Ok(profile) => UpsertProfileResponse::Ok(Json(UserResponse::new(profile, false))),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => UpsertProfileResponse::BadRequest(json),
                    409 => UpsertProfileResponse::Conflict(json),
                    _ => UpsertProfileResponse::InternalError(json),
                }
            }
        }
    }

    /// Get a user's profile
    ///
    /// `is_subscribed` reflects the caller when a valid bearer token is sent.
    #[oai(path = "/users/:id", method = "get", tag = "ApiTags::Users")]
    async fn get_by_id(&self, req: &Request, id: Path<String>) -> GetProfileResponse {
        self.profile(optional_viewer(req), UserId::new(id.0)).await
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetProfileResponse {
    #[oai(status = 200)]
    Ok(Json<UserResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum UpsertProfileResponse {
    #[oai(status = 200)]
    Ok(Json<UserResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 409)]
    Conflict(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
