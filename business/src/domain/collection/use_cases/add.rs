use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::collection::errors::CollectionError;
use crate::domain::collection::model::RecipeCollection;
use crate::domain::recipe::model::RecipeSummary;
use crate::domain::shared::value_objects::UserId;

pub struct AddToCollectionParams {
    pub user_id: UserId,
    pub recipe_id: Uuid,
    pub collection: RecipeCollection,
}

#[async_trait]
pub trait AddToCollectionUseCase: Send + Sync {
    async fn execute(
        &self,
        params: AddToCollectionParams,
    ) -> Result<RecipeSummary, CollectionError>;
}
