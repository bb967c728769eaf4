use std::sync::Arc;

use async_trait::async_trait;
use jsonwebtoken::{EncodingKey, Header, encode};
use mockall::mock;
use poem::{EndpointExt, Route, test::TestClient};
use poem_openapi::OpenApiService;
use serde::Serialize;

use business::domain::recipe::errors::RecipeError;
use business::domain::recipe::projection::AnnotatedRecipe;
use business::domain::recipe::use_cases::create::{CreateRecipeParams, CreateRecipeUseCase};
use business::domain::recipe::use_cases::delete::{DeleteRecipeParams, DeleteRecipeUseCase};
use business::domain::recipe::use_cases::get_by_id::{GetRecipeByIdParams, GetRecipeByIdUseCase};
use business::domain::recipe::use_cases::list::{ListRecipesParams, ListRecipesUseCase};
use business::domain::recipe::use_cases::update::{UpdateRecipeParams, UpdateRecipeUseCase};
use business::domain::shared::value_objects::Page;
use business::domain::shopping_cart::errors::ShoppingCartError;
use business::domain::shopping_cart::model::IngredientLine;
use business::domain::shopping_cart::use_cases::download::{
    DownloadShoppingListParams, DownloadShoppingListUseCase,
};

use crate::api::recipe::routes::RecipeApi;
use crate::api::shopping_cart::routes::ShoppingCartApi;
use crate::config::jwt_config::JwtConfig;

pub const SECRET: &str = "test-secret";

mock! {
    pub CreateRecipe {}

    #[async_trait]
    impl CreateRecipeUseCase for CreateRecipe {
        async fn execute(&self, params: CreateRecipeParams) -> Result<AnnotatedRecipe, RecipeError>;
    }
}

mock! {
    pub GetRecipe {}

    #[async_trait]
    impl GetRecipeByIdUseCase for GetRecipe {
        async fn execute(&self, params: GetRecipeByIdParams) -> Result<AnnotatedRecipe, RecipeError>;
    }
}

mock! {
    pub ListRecipes {}

    #[async_trait]
    impl ListRecipesUseCase for ListRecipes {
        async fn execute(&self, params: ListRecipesParams) -> Result<Page<AnnotatedRecipe>, RecipeError>;
    }
}

mock! {
    pub UpdateRecipe {}

    #[async_trait]
    impl UpdateRecipeUseCase for UpdateRecipe {
        async fn execute(&self, params: UpdateRecipeParams) -> Result<AnnotatedRecipe, RecipeError>;
    }
}

mock! {
    pub DeleteRecipe {}

    #[async_trait]
    impl DeleteRecipeUseCase for DeleteRecipe {
        async fn execute(&self, params: DeleteRecipeParams) -> Result<(), RecipeError>;
    }
}

mock! {
    pub DownloadShoppingList {}

    #[async_trait]
    impl DownloadShoppingListUseCase for DownloadShoppingList {
        async fn execute(
            &self,
            params: DownloadShoppingListParams,
        ) -> Result<Vec<IngredientLine>, ShoppingCartError>;
    }
}

/// Recipe use cases for one test; unset ones panic when called.
#[derive(Default)]
pub struct RecipeMocks {
    pub get_by_id: MockGetRecipe,
    pub list: MockListRecipes,
}

#[derive(Serialize)]
struct Claims<'a> {
    sub: &'a str,
    exp: i64,
}

pub fn bearer(sub: &str) -> String {
    let claims = Claims {
        sub,
        exp: chrono::Utc::now().timestamp() + 3600,
    };
    let token = encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(SECRET.as_bytes()),
    )
    .unwrap();
    format!("Bearer {token}")
}

/// Recipe and shopping list routes mounted the way the server mounts them.
pub fn recipes_client(
    recipes: RecipeMocks,
    download: MockDownloadShoppingList,
) -> TestClient<impl poem::Endpoint> {
    let recipe_api = RecipeApi::new(
        Arc::new(MockCreateRecipe::new()),
        Arc::new(recipes.get_by_id),
        Arc::new(recipes.list),
        Arc::new(MockUpdateRecipe::new()),
        Arc::new(MockDeleteRecipe::new()),
        6,
    );
    let shopping_cart_api = ShoppingCartApi::new(Arc::new(download));
    let api = OpenApiService::new((recipe_api, shopping_cart_api), "Foodgram API", "test");

    TestClient::new(Route::new().nest("/api", api).data(JwtConfig {
        secret: SECRET.to_string(),
        issuer: None,
    }))
}
