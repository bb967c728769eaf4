use std::sync::Arc;

use poem_openapi::{OpenApi, param::Path, payload::Json};
use uuid::Uuid;

use business::domain::collection::model::RecipeCollection;
use business::domain::collection::use_cases::add::{AddToCollectionParams, AddToCollectionUseCase};
use business::domain::collection::use_cases::remove::{
    RemoveFromCollectionParams, RemoveFromCollectionUseCase,
};

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::recipe::dto::RecipeSummaryResponse;
use crate::api::security::JwtBearer;
use crate::api::tags::ApiTags;

pub struct CollectionApi {
    add_use_case: Arc<dyn AddToCollectionUseCase>,
    remove_use_case: Arc<dyn RemoveFromCollectionUseCase>,
}

impl CollectionApi {
    pub fn new(
        add_use_case: Arc<dyn AddToCollectionUseCase>,
        remove_use_case: Arc<dyn RemoveFromCollectionUseCase>,
    ) -> Self {
        Self {
            add_use_case,
            remove_use_case,
        }
    }

    async fn add(
        &self,
        auth: JwtBearer,
        id: &str,
        collection: RecipeCollection,
    ) -> AddToCollectionResponse {
        let Ok(recipe_id) = Uuid::parse_str(id) else {
            return AddToCollectionResponse::NotFound(ErrorResponse::json(
                "NotFound",
                "collection.recipe_not_found",
            ));
        };

        let params = AddToCollectionParams {
            user_id: auth.user_id(),
            recipe_id,
            collection,
        };

        match self.add_use_case.execute(params).await {
            Ok(summary) => AddToCollectionResponse::Created(Json(summary.into())),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => AddToCollectionResponse::BadRequest(json),
                    404 => AddToCollectionResponse::NotFound(json),
                    _ => AddToCollectionResponse::InternalError(json),
                }
            }
        }
    }

    async fn remove(
        &self,
        auth: JwtBearer,
        id: &str,
        collection: RecipeCollection,
    ) -> RemoveFromCollectionResponse {
        let Ok(recipe_id) = Uuid::parse_str(id) else {
            return RemoveFromCollectionResponse::NotFound(ErrorResponse::json(
                "NotFound",
                "collection.recipe_not_found",
            ));
        };

        let params = RemoveFromCollectionParams {
            user_id: auth.user_id(),
            recipe_id,
            collection,
        };

        match self.remove_use_case.execute(params).await {
            Ok(()) => RemoveFromCollectionResponse::NoContent,
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => RemoveFromCollectionResponse::BadRequest(json),
                    404 => RemoveFromCollectionResponse::NotFound(json),
                    _ => RemoveFromCollectionResponse::InternalError(json),
                }
            }
        }
    }
}

/// Favorites and shopping cart of the caller
#[OpenApi]
impl CollectionApi {
    /// Add a recipe to favorites
    #[oai(path = "/recipes/:id/favorite", method = "post", tag = "ApiTags::Recipes")]
    async fn add_favorite(&self, auth: JwtBearer, id: Path<String>) -> AddToCollectionResponse {
        self.add(auth, &id.0, RecipeCollection::Favorites).await
    }

    /// Remove a recipe from favorites
    #[oai(path = "/recipes/:id/favorite", method = "delete", tag = "ApiTags::Recipes")]
    async fn remove_favorite(
        &self,
        auth: JwtBearer,
        id: Path<String>,
    ) -> RemoveFromCollectionResponse {
        self.remove(auth, &id.0, RecipeCollection::Favorites).await
    }

    /// Add a recipe to the shopping cart
    #[oai(
        path = "/recipes/:id/shopping_cart",
        method = "post",
        tag = "ApiTags::Recipes"
    )]
    async fn add_to_shopping_cart(
        &self,
        auth: JwtBearer,
        id: Path<String>,
    ) -> AddToCollectionResponse {
        self.add(auth, &id.0, RecipeCollection::ShoppingCart).await
    }

    /// Remove a recipe from the shopping cart
    #[oai(
        path = "/recipes/:id/shopping_cart",
        method = "delete",
        tag = "ApiTags::Recipes"
    )]
    async fn remove_from_shopping_cart(
        &self,
        auth: JwtBearer,
        id: Path<String>,
    ) -> RemoveFromCollectionResponse {
        self.remove(auth, &id.0, RecipeCollection::ShoppingCart)
            .await
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum AddToCollectionResponse {
    #[oai(status = 201)]
    Created(Json<RecipeSummaryResponse>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum RemoveFromCollectionResponse {
    #[oai(status = 204)]
    NoContent,
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
