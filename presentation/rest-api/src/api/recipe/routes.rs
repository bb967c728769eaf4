use std::sync::Arc;

use poem::Request;
use poem_openapi::{
    OpenApi,
    param::{Path, Query},
    payload::Json,
};
use uuid::Uuid;

use business::domain::recipe::use_cases::create::{CreateRecipeParams, CreateRecipeUseCase};
use business::domain::recipe::use_cases::delete::{DeleteRecipeParams, DeleteRecipeUseCase};
use business::domain::recipe::use_cases::get_by_id::{GetRecipeByIdParams, GetRecipeByIdUseCase};
use business::domain::recipe::use_cases::list::{ListRecipesParams, ListRecipesUseCase};
use business::domain::recipe::use_cases::update::{UpdateRecipeParams, UpdateRecipeUseCase};
use business::domain::recipe::value_objects::RecipeFilter;
use business::domain::shared::value_objects::{PageRequest, UserId};

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::recipe::dto::{RecipePageResponse, RecipeRequest, RecipeResponse};
use crate::api::security::{JwtBearer, optional_viewer};
use crate::api::tags::ApiTags;

pub struct RecipeApi {
    create_use_case: Arc<dyn CreateRecipeUseCase>,
    get_by_id_use_case: Arc<dyn GetRecipeByIdUseCase>,
    list_use_case: Arc<dyn ListRecipesUseCase>,
    update_use_case: Arc<dyn UpdateRecipeUseCase>,
    delete_use_case: Arc<dyn DeleteRecipeUseCase>,
    page_size: u32,
}

impl RecipeApi {
    pub fn new(
        create_use_case: Arc<dyn CreateRecipeUseCase>,
        get_by_id_use_case: Arc<dyn GetRecipeByIdUseCase>,
        list_use_case: Arc<dyn ListRecipesUseCase>,
        update_use_case: Arc<dyn UpdateRecipeUseCase>,
        delete_use_case: Arc<dyn DeleteRecipeUseCase>,
        page_size: u32,
    ) -> Self {
        Self {
            create_use_case,
            get_by_id_use_case,
            list_use_case,
            update_use_case,
            delete_use_case,
            page_size,
        }
    }
}

fn recipe_not_found() -> Json<ErrorResponse> {
    ErrorResponse::json("NotFound", "recipe.not_found")
}

/// `1` selects members, `0` selects non-members; any other value is rejected.
fn membership_flag(value: Option<u8>) -> Result<Option<bool>, Json<ErrorResponse>> {
    match value {
        None => Ok(None),
        Some(0) => Ok(Some(false)),
        Some(1) => Ok(Some(true)),
        Some(_) => Err(ErrorResponse::json(
            "ValidationError",
            "recipe.invalid_membership_flag",
        )),
    }
}

/// Recipe management API
///
/// Listing and reading are public; the caller's favorites and cart are
/// reflected in the flags when a valid bearer token is sent.
#[OpenApi]
impl RecipeApi {
    /// List recipes
    ///
    /// Newest first, paginated. Membership filters only apply to
    /// authenticated callers.
    #[oai(path = "/recipes", method = "get", tag = "ApiTags::Recipes")]
    #[allow(clippy::too_many_arguments)]
    async fn list(
        &self,
        req: &Request,
        /// 1-based page number
        page: Query<Option<u32>>,
        /// Page size
        limit: Query<Option<u32>>,
        /// Author user id
        author: Query<Option<String>>,
        /// Tag slugs; recipes with any of them match
        tags: Query<Option<Vec<String>>>,
        /// 1 for favorites only, 0 to exclude favorites; other values give 400
        is_favorited: Query<Option<u8>>,
        /// 1 for cart recipes only, 0 to exclude them
        is_in_shopping_cart: Query<Option<u8>>,
    ) -> ListRecipesResponse {
        let (is_favorited, is_in_shopping_cart) = match (
            membership_flag(is_favorited.0),
            membership_flag(is_in_shopping_cart.0),
        ) {
            (Ok(favorited), Ok(in_cart)) => (favorited, in_cart),
            (Err(json), _) | (_, Err(json)) => return ListRecipesResponse::BadRequest(json),
        };

        let params = ListRecipesParams {
            viewer: optional_viewer(req),
            filter: RecipeFilter {
                author: author.0.map(UserId::new),
                tags: tags.0.unwrap_or_default(),
                is_favorited,
                is_in_shopping_cart,
            },
            page: PageRequest::new(page.0, limit.0, self.page_size),
        };

        match self.list_use_case.execute(params).await {
            Ok(page) => ListRecipesResponse::Ok(Json(page.into())),
            Err(err) => {
                let (_status, json) = err.into_error_response();
                ListRecipesResponse::InternalError(json)
            }
        }
    }

    /// Create a recipe
    ///
    /// The caller becomes the author.
    #[oai(path = "/recipes", method = "post", tag = "ApiTags::Recipes")]
    async fn create(&self, auth: JwtBearer, body: Json<RecipeRequest>) -> CreateRecipeResponse {
        let params = CreateRecipeParams {
            author: auth.user_id(),
            draft: body.0.into(),
        };

        match self.create_use_case.execute(params).await {
            Ok(recipe) => CreateRecipeResponse::Created(Json(recipe.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => CreateRecipeResponse::BadRequest(json),
                    _ => CreateRecipeResponse::InternalError(json),
                }
            }
        }
    }

    /// Get a recipe by id
    #[oai(path = "/recipes/:id", method = "get", tag = "ApiTags::Recipes")]
    async fn get_by_id(&self, req: &Request, id: Path<String>) -> GetRecipeByIdResponse {
        let Ok(id) = Uuid::parse_str(&id.0) else {
            return GetRecipeByIdResponse::NotFound(recipe_not_found());
        };

        let params = GetRecipeByIdParams {
            viewer: optional_viewer(req),
            id,
        };

        match self.get_by_id_use_case.execute(params).await {
            Ok(recipe) => GetRecipeByIdResponse::Ok(Json(recipe.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => GetRecipeByIdResponse::NotFound(json),
                    _ => GetRecipeByIdResponse::InternalError(json),
                }
            }
        }
    }

    /// Update a recipe
    ///
    /// Only the author may update; tags and ingredient lines are replaced.
    #[oai(path = "/recipes/:id", method = "patch", tag = "ApiTags::Recipes")]
    async fn update(
        &self,
        auth: JwtBearer,
        id: Path<String>,
        body: Json<RecipeRequest>,
    ) -> UpdateRecipeResponse {
        let Ok(id) = Uuid::parse_str(&id.0) else {
            return UpdateRecipeResponse::NotFound(recipe_not_found());
        };

        let params = UpdateRecipeParams {
            user_id: auth.user_id(),
            id,
            draft: body.0.into(),
        };

        match self.update_use_case.execute(params).await {
            Ok(recipe) => UpdateRecipeResponse::Ok(Json(recipe.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => UpdateRecipeResponse::BadRequest(json),
                    403 => UpdateRecipeResponse::Forbidden(json),
                    404 => UpdateRecipeResponse::NotFound(json),
                    _ => UpdateRecipeResponse::InternalError(json),
                }
            }
        }
    }

    /// Delete a recipe
    ///
    /// Only the author may delete.
    #[oai(path = "/recipes/:id", method = "delete", tag = "ApiTags::Recipes")]
    async fn delete(&self, auth: JwtBearer, id: Path<String>) -> DeleteRecipeResponse {
        let Ok(id) = Uuid::parse_str(&id.0) else {
            return DeleteRecipeResponse::NotFound(recipe_not_found());
        };

        let params = DeleteRecipeParams {
            user_id: auth.user_id(),
            id,
        };

        match self.delete_use_case.execute(params).await {
            Ok(()) => DeleteRecipeResponse::NoContent,
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    403 => DeleteRecipeResponse::Forbidden(json),
                    404 => DeleteRecipeResponse::NotFound(json),
                    _ => DeleteRecipeResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum ListRecipesResponse {
    #[oai(status = 200)]
    Ok(Json<RecipePageResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum CreateRecipeResponse {
    #[oai(status = 201)]
    Created(Json<RecipeResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetRecipeByIdResponse {
    #[oai(status = 200)]
    Ok(Json<RecipeResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum UpdateRecipeResponse {
    #[oai(status = 200)]
    Ok(Json<RecipeResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 403)]
    Forbidden(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum DeleteRecipeResponse {
    #[oai(status = 204)]
    NoContent,
    #[oai(status = 403)]
    Forbidden(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
