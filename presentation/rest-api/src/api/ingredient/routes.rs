use std::sync::Arc;

use poem_openapi::{
    OpenApi,
    param::{Path, Query},
    payload::Json,
};
use uuid::Uuid;

use business::domain::ingredient::use_cases::get_by_id::{
    GetIngredientByIdParams, GetIngredientByIdUseCase,
};
use business::domain::ingredient::use_cases::search::{
    SearchIngredientsParams, SearchIngredientsUseCase,
};

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::ingredient::dto::IngredientResponse;
use crate::api::tags::ApiTags;

pub struct IngredientApi {
    search_use_case: Arc<dyn SearchIngredientsUseCase>,
    get_by_id_use_case: Arc<dyn GetIngredientByIdUseCase>,
}

impl IngredientApi {
    pub fn new(
        search_use_case: Arc<dyn SearchIngredientsUseCase>,
        get_by_id_use_case: Arc<dyn GetIngredientByIdUseCase>,
    ) -> Self {
        Self {
            search_use_case,
            get_by_id_use_case,
        }
    }
}

/// Ingredient catalog (read-only)
#[OpenApi]
impl IngredientApi {
    /// Search ingredients
    ///
    /// Case-insensitive substring match on the name, ordered by name.
    #[oai(path = "/ingredients", method = "get", tag = "ApiTags::Ingredients")]
    async fn search(
        &self,
        /// Part of the ingredient name
        name: Query<Option<String>>,
    ) -> SearchIngredientsResponse {
        match self
            .search_use_case
            .execute(SearchIngredientsParams { search: name.0 })
            .await
        {
            Ok(ingredients) => {
                let responses: Vec<IngredientResponse> =
                    ingredients.into_iter().map(|i| i.into()).collect();
                SearchIngredientsResponse::Ok(Json(responses))
            }
            Err(err) => {
                let (_status, json) = err.into_error_response();
                SearchIngredientsResponse::InternalError(json)
            }
        }
    }

    /// Get an ingredient by id
    #[oai(path = "/ingredients/:id", method = "get", tag = "ApiTags::Ingredients")]
    async fn get_by_id(&self, id: Path<String>) -> GetIngredientByIdResponse {
        let Ok(id) = Uuid::parse_str(&id.0) else {
            return GetIngredientByIdResponse::NotFound(ErrorResponse::json(
                "NotFound",
                "ingredient.not_found",
            ));
        };

        match self
            .get_by_id_use_case
            .execute(GetIngredientByIdParams { id })
            .await
        {
            Ok(ingredient) => GetIngredientByIdResponse::Ok(Json(ingredient.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => GetIngredientByIdResponse::NotFound(json),
                    _ => GetIngredientByIdResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum SearchIngredientsResponse {
    #[oai(status = 200)]
    Ok(Json<Vec<IngredientResponse>>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetIngredientByIdResponse {
    #[oai(status = 200)]
    Ok(Json<IngredientResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
