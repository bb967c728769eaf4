use std::sync::Arc;

use logger::TracingLogger;
use persistence::collection::repository::RecipeCollectionRepositoryPostgres;
use persistence::ingredient::repository::IngredientRepositoryPostgres;
use persistence::recipe::repository::RecipeRepositoryPostgres;
use persistence::shopping_cart::repository::ShoppingCartRepositoryPostgres;
use persistence::subscription::repository::SubscriptionRepositoryPostgres;
use persistence::tag::repository::TagRepositoryPostgres;
use persistence::user::repository::UserRepositoryPostgres;

use business::application::collection::add::AddToCollectionUseCaseImpl;
use business::application::collection::remove::RemoveFromCollectionUseCaseImpl;
use business::application::ingredient::get_by_id::GetIngredientByIdUseCaseImpl;
use business::application::ingredient::search::SearchIngredientsUseCaseImpl;
use business::application::recipe::create::CreateRecipeUseCaseImpl;
use business::application::recipe::delete::DeleteRecipeUseCaseImpl;
use business::application::recipe::get_by_id::GetRecipeByIdUseCaseImpl;
use business::application::recipe::list::ListRecipesUseCaseImpl;
use business::application::recipe::update::UpdateRecipeUseCaseImpl;
use business::application::shopping_cart::download::DownloadShoppingListUseCaseImpl;
use business::application::subscription::list::ListSubscriptionsUseCaseImpl;
use business::application::subscription::subscribe::SubscribeUseCaseImpl;
use business::application::subscription::unsubscribe::UnsubscribeUseCaseImpl;
use business::application::tag::get_all::GetAllTagsUseCaseImpl;
use business::application::tag::get_by_id::GetTagByIdUseCaseImpl;
use business::application::user::get_profile::GetProfileUseCaseImpl;
use business::application::user::upsert_profile::UpsertProfileUseCaseImpl;

use crate::api::collection::routes::CollectionApi;
use crate::api::health::routes::HealthApi;
use crate::api::ingredient::routes::IngredientApi;
use crate::api::recipe::routes::RecipeApi;
use crate::api::shopping_cart::routes::ShoppingCartApi;
use crate::api::subscription::routes::SubscriptionApi;
use crate::api::tag::routes::TagApi;
use crate::api::user::routes::UserApi;

pub struct DependencyContainer {
    pub health_api: HealthApi,
    pub tag_api: TagApi,
    pub ingredient_api: IngredientApi,
    pub recipe_api: RecipeApi,
    pub collection_api: CollectionApi,
    pub shopping_cart_api: ShoppingCartApi,
    pub user_api: UserApi,
    pub subscription_api: SubscriptionApi,
}

impl DependencyContainer {
    pub fn new(pool: sqlx::PgPool, page_size: u32) -> Self {
        let logger = Arc::new(TracingLogger);

        // Infrastructure adapters
        let tag_repository = Arc::new(TagRepositoryPostgres::new(pool.clone()));
        let ingredient_repository = Arc::new(IngredientRepositoryPostgres::new(pool.clone()));
        let recipe_repository = Arc::new(RecipeRepositoryPostgres::new(pool.clone()));
        let collection_repository =
            Arc::new(RecipeCollectionRepositoryPostgres::new(pool.clone()));
        let shopping_cart_repository = Arc::new(ShoppingCartRepositoryPostgres::new(pool.clone()));
        let user_repository = Arc::new(UserRepositoryPostgres::new(pool.clone()));
        let subscription_repository = Arc::new(SubscriptionRepositoryPostgres::new(pool));

        // Tag use cases
        let tag_api = TagApi::new(
            Arc::new(GetAllTagsUseCaseImpl {
                repository: tag_repository.clone(),
                logger: logger.clone(),
            }),
            Arc::new(GetTagByIdUseCaseImpl {
                repository: tag_repository.clone(),
                logger: logger.clone(),
            }),
        );

        // Ingredient use cases
        let ingredient_api = IngredientApi::new(
            Arc::new(SearchIngredientsUseCaseImpl {
                repository: ingredient_repository.clone(),
                logger: logger.clone(),
            }),
            Arc::new(GetIngredientByIdUseCaseImpl {
                repository: ingredient_repository.clone(),
                logger: logger.clone(),
            }),
        );

        // Recipe use cases
        let create_recipe_use_case = Arc::new(CreateRecipeUseCaseImpl {
            repository: recipe_repository.clone(),
            tag_repository: tag_repository.clone(),
            ingredient_repository: ingredient_repository.clone(),
            logger: logger.clone(),
        });
        let get_recipe_use_case = Arc::new(GetRecipeByIdUseCaseImpl {
            repository: recipe_repository.clone(),
            collection_repository: collection_repository.clone(),
            logger: logger.clone(),
        });
        let list_recipes_use_case = Arc::new(ListRecipesUseCaseImpl {
            repository: recipe_repository.clone(),
            collection_repository: collection_repository.clone(),
            logger: logger.clone(),
        });
        let update_recipe_use_case = Arc::new(UpdateRecipeUseCaseImpl {
            repository: recipe_repository.clone(),
            tag_repository,
            ingredient_repository,
            collection_repository: collection_repository.clone(),
            logger: logger.clone(),
        });
        let delete_recipe_use_case = Arc::new(DeleteRecipeUseCaseImpl {
            repository: recipe_repository.clone(),
            logger: logger.clone(),
        });
        let recipe_api = RecipeApi::new(
            create_recipe_use_case,
            get_recipe_use_case,
            list_recipes_use_case,
            update_recipe_use_case,
            delete_recipe_use_case,
            page_size,
        );

        // Favorites and shopping cart use cases
        let collection_api = CollectionApi::new(
            Arc::new(AddToCollectionUseCaseImpl {
                repository: collection_repository.clone(),
                recipe_repository: recipe_repository.clone(),
                logger: logger.clone(),
            }),
            Arc::new(RemoveFromCollectionUseCaseImpl {
                repository: collection_repository,
                recipe_repository: recipe_repository.clone(),
                logger: logger.clone(),
            }),
        );
        let shopping_cart_api = ShoppingCartApi::new(Arc::new(DownloadShoppingListUseCaseImpl {
            repository: shopping_cart_repository,
            logger: logger.clone(),
        }));

        // User and subscription use cases
        let user_api = UserApi::new(
            Arc::new(GetProfileUseCaseImpl {
                repository: user_repository.clone(),
                subscription_repository: subscription_repository.clone(),
                logger: logger.clone(),
            }),
            Arc::new(UpsertProfileUseCaseImpl {
                repository: user_repository.clone(),
                logger: logger.clone(),
            }),
        );
        let subscription_api = SubscriptionApi::new(
            Arc::new(SubscribeUseCaseImpl {
                repository: subscription_repository.clone(),
                user_repository: user_repository.clone(),
                recipe_repository: recipe_repository.clone(),
                logger: logger.clone(),
            }),
            Arc::new(UnsubscribeUseCaseImpl {
                repository: subscription_repository.clone(),
                user_repository,
                logger: logger.clone(),
            }),
            Arc::new(ListSubscriptionsUseCaseImpl {
                repository: subscription_repository,
                recipe_repository,
                logger,
            }),
            page_size,
        );

        Self {
            health_api: HealthApi,
            tag_api,
            ingredient_api,
            recipe_api,
            collection_api,
            shopping_cart_api,
            user_api,
            subscription_api,
        }
    }
}
