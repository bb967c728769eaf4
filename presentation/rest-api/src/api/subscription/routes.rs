use std::sync::Arc;

use poem_openapi::{
    OpenApi,
    param::{Path, Query},
    payload::Json,
};

use business::domain::shared::value_objects::{PageRequest, UserId};
use business::domain::subscription::use_cases::list::{
    ListSubscriptionsParams, ListSubscriptionsUseCase,
};
use business::domain::subscription::use_cases::subscribe::{SubscribeParams, SubscribeUseCase};
use business::domain::subscription::use_cases::unsubscribe::{
    UnsubscribeParams, UnsubscribeUseCase,
};

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::security::JwtBearer;
use crate::api::subscription::dto::{AuthorSubscriptionResponse, SubscriptionPageResponse};
use crate::api::tags::ApiTags;

pub struct SubscriptionApi {
    subscribe_use_case: Arc<dyn SubscribeUseCase>,
    unsubscribe_use_case: Arc<dyn UnsubscribeUseCase>,
    list_use_case: Arc<dyn ListSubscriptionsUseCase>,
    page_size: u32,
}

impl SubscriptionApi {
    pub fn new(
        subscribe_use_case: Arc<dyn SubscribeUseCase>,
        unsubscribe_use_case: Arc<dyn UnsubscribeUseCase>,
        list_use_case: Arc<dyn ListSubscriptionsUseCase>,
        page_size: u32,
    ) -> Self {
        Self {
            subscribe_use_case,
            unsubscribe_use_case,
            list_use_case,
            page_size,
        }
    }
}

/// Author subscriptions
#[OpenApi]
impl SubscriptionApi {
    /// List the caller's subscriptions
    #[oai(path = "/users/subscriptions", method = "get", tag = "ApiTags::Users")]
    async fn list(
        &self,
        auth: JwtBearer,
        /// 1-based page number
        page: Query<Option<u32>>,
        /// Page size
        limit: Query<Option<u32>>,
        /// Maximum number of recipes shown per author
        recipes_limit: Query<Option<u32>>,
    ) -> ListSubscriptionsResponse {
        let params = ListSubscriptionsParams {
            user_id: auth.user_id(),
            page: PageRequest::new(page.0, limit.0, self.page_size),
            recipes_limit: recipes_limit.0,
        };

        match self.list_use_case.execute(params).await {
            Ok(page) => ListSubscriptionsResponse::Ok(Json(page.into())),
            Err(err) => {
                let (_status, json) = err.into_error_response();
                ListSubscriptionsResponse::InternalError(json)
            }
        }
    }

    /// Subscribe to an author
    #[oai(path = "/users/:id/subscribe", method = "post", tag = "ApiTags::Users")]
    async fn subscribe(
        &self,
        auth: JwtBearer,
        id: Path<String>,
        /// Maximum number of recipes shown for the author
        recipes_limit: Query<Option<u32>>,
    ) -> SubscribeResponse {
        let params = SubscribeParams {
            user_id: auth.user_id(),
            author_id: UserId::new(id.0),
            recipes_limit: recipes_limit.0,
        };

        match self.subscribe_use_case.execute(params).await {
            Ok(subscription) => SubscribeResponse::Created(Json(subscription.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => SubscribeResponse::BadRequest(json),
                    404 => SubscribeResponse::NotFound(json),
                    _ => SubscribeResponse::InternalError(json),
                }
            }
        }
    }

    /// Unsubscribe from an author
    #[oai(path = "/users/:id/subscribe", method = "delete", tag = "ApiTags::Users")]
    async fn unsubscribe(&self, auth: JwtBearer, id: Path<String>) -> UnsubscribeResponse {
        let params = UnsubscribeParams {
            user_id: auth.user_id(),
            author_id: UserId::new(id.0),
        };

        match self.unsubscribe_use_case.execute(params).await {
            Ok(()) => UnsubscribeResponse::NoContent,
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => UnsubscribeResponse::BadRequest(json),
                    404 => UnsubscribeResponse::NotFound(json),
                    _ => UnsubscribeResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum ListSubscriptionsResponse {
    #[oai(status = 200)]
    Ok(Json<SubscriptionPageResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum SubscribeResponse {
    #[oai(status = 201)]
    Created(Json<AuthorSubscriptionResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum UnsubscribeResponse {
    #[oai(status = 204)]
    NoContent,
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
