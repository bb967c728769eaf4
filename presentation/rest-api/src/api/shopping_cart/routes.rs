use std::sync::Arc;

use poem_openapi::{
    OpenApi,
    payload::{Attachment, Json},
};

use business::domain::shopping_cart::use_cases::download::{
    DownloadShoppingListParams, DownloadShoppingListUseCase,
};

use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::security::JwtBearer;
use crate::api::shopping_cart::export::{FILENAME, render_csv};
use crate::api::tags::ApiTags;

pub struct ShoppingCartApi {
    download_use_case: Arc<dyn DownloadShoppingListUseCase>,
}

impl ShoppingCartApi {
    pub fn new(download_use_case: Arc<dyn DownloadShoppingListUseCase>) -> Self {
        Self { download_use_case }
    }
}

/// Shopping list export
#[OpenApi]
impl ShoppingCartApi {
    /// Download the shopping list
    ///
    /// Consolidates the ingredients of every recipe in the caller's shopping
    /// cart: one row per ingredient name with the summed amount.
    #[oai(
        path = "/recipes/download_shopping_cart",
        method = "get",
        tag = "ApiTags::Recipes"
    )]
    async fn download(&self, auth: JwtBearer) -> DownloadShoppingCartResponse {
        let params = DownloadShoppingListParams {
            user_id: auth.user_id(),
        };

        let lines = match self.download_use_case.execute(params).await {
            Ok(lines) => lines,
            Err(err) => {
                let (_status, json) = err.into_error_response();
                return DownloadShoppingCartResponse::InternalError(json);
            }
        };

        match render_csv(&lines) {
            Ok(csv) => {
                DownloadShoppingCartResponse::Ok(Attachment::new(csv).filename(FILENAME))
            }
            Err(err) => {
                tracing::error!("{err}");
                DownloadShoppingCartResponse::InternalError(ErrorResponse::json(
                    "InternalError",
                    "shopping_cart.export_failed",
                ))
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum DownloadShoppingCartResponse {
    #[oai(status = 200, content_type = "text/csv; charset=utf-8")]
    Ok(Attachment<Vec<u8>>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[cfg(test)]
mod tests {
    use poem::http::StatusCode;
    use uuid::Uuid;

    use business::domain::recipe::errors::RecipeError;
    use business::domain::shared::value_objects::UserId;
    use business::domain::shopping_cart::model::IngredientLine;

    use crate::api::test_support::{
        MockDownloadShoppingList, RecipeMocks, bearer, recipes_client,
    };

    #[tokio::test]
    async fn should_require_bearer_for_download() {
        let mut download = MockDownloadShoppingList::new();
        download.expect_execute().never();
        let cli = recipes_client(RecipeMocks::default(), download);

        let resp = cli.get("/api/recipes/download_shopping_cart").send().await;

        resp.assert_status(StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn should_download_callers_shopping_list_as_csv() {
        let mut download = MockDownloadShoppingList::new();
        download
            .expect_execute()
            .withf(|params| params.user_id == UserId::new("user-42"))
            .returning(|_| {
                Ok(vec![IngredientLine::new(
                    "Flour".to_string(),
                    300,
                    "g".to_string(),
                )])
            });
        let cli = recipes_client(RecipeMocks::default(), download);

        let resp = cli
            .get("/api/recipes/download_shopping_cart")
            .header("Authorization", bearer("user-42"))
            .send()
            .await;

        resp.assert_status_is_ok();
        resp.assert_content_type("text/csv; charset=utf-8");
        resp.assert_text("name,amount,measurement_unit\nFlour,300,g\n")
            .await;
    }

    #[tokio::test]
    async fn should_keep_recipe_ids_routed_to_recipe_detail() {
        let mut recipes = RecipeMocks::default();
        recipes
            .get_by_id
            .expect_execute()
            .returning(|_| Err(RecipeError::NotFound));
        let cli = recipes_client(recipes, MockDownloadShoppingList::new());

        let resp = cli
            .get(format!("/api/recipes/{}", Uuid::new_v4()))
            .send()
            .await;

        resp.assert_status(StatusCode::NOT_FOUND);
    }
}
