use std::sync::Arc;

use poem_openapi::{OpenApi, param::Path, payload::Json};
use uuid::Uuid;

use business::domain::tag::use_cases::get_all::GetAllTagsUseCase;
use business::domain::tag::use_cases::get_by_id::{GetTagByIdParams, GetTagByIdUseCase};

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::tag::dto::TagResponse;
use crate::api::tags::ApiTags;

pub struct TagApi {
    get_all_use_case: Arc<dyn GetAllTagsUseCase>,
    get_by_id_use_case: Arc<dyn GetTagByIdUseCase>,
}

impl TagApi {
    pub fn new(
        get_all_use_case: Arc<dyn GetAllTagsUseCase>,
        get_by_id_use_case: Arc<dyn GetTagByIdUseCase>,
    ) -> Self {
        Self {
            get_all_use_case,
            get_by_id_use_case,
        }
    }
}

/// Recipe tags (read-only)
#[OpenApi]
impl TagApi {
    /// List all tags
    #[oai(path = "/tags", method = "get", tag = "ApiTags::Tags")]
    async fn get_all(&self) -> GetAllTagsResponse {
        match self.get_all_use_case.execute().await {
            Ok(tags) => {
                let responses: Vec<TagResponse> = tags.into_iter().map(|t| t.into()).collect();
                GetAllTagsResponse::Ok(Json(responses))
            }
            Err(err) => {
                let (_status, json) = err.into_error_response();
                GetAllTagsResponse::InternalError(json)
            }
        }
    }

    /// Get a tag by id
    #[oai(path = "/tags/:id", method = "get", tag = "ApiTags::Tags")]
    async fn get_by_id(&self, id: Path<String>) -> GetTagByIdResponse {
        let Ok(id) = Uuid::parse_str(&id.0) else {
            return GetTagByIdResponse::NotFound(ErrorResponse::json(
                "NotFound",
                "tag.not_found",
            ));
        };

        match self
            .get_by_id_use_case
            .execute(GetTagByIdParams { id })
            .await
        {
            Ok(tag) => GetTagByIdResponse::Ok(Json(tag.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => GetTagByIdResponse::NotFound(json),
                    _ => GetTagByIdResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetAllTagsResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<TagResponse>>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetTagByIdResponse {
    #[oai(status = 200)]
    Ok(Json<TagResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
