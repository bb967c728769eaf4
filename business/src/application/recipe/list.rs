use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::collection::repository::RecipeCollectionRepository;
use crate::domain::logger::Logger;
use crate::domain::recipe::errors::RecipeError;
use crate::domain::recipe::projection::{AnnotatedRecipe, ViewerCollections};
use crate::domain::recipe::repository::RecipeRepository;
use crate::domain::recipe::use_cases::list::{ListRecipesParams, ListRecipesUseCase};
use crate::domain::shared::value_objects::Page;

pub struct ListRecipesUseCaseImpl {
    pub repository: Arc<dyn RecipeRepository>,
    pub collection_repository: Arc<dyn RecipeCollectionRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl ListRecipesUseCase for ListRecipesUseCaseImpl {
    async fn execute(
        &self,
        params: ListRecipesParams,
    ) -> Result<Page<AnnotatedRecipe>, RecipeError> {
        let query = params.filter.for_viewer(params.viewer.as_ref());
        self.logger.debug(&format!(
            "Listing recipes: {:?}, page {} (limit {})",
            query, params.page.page, params.page.limit
        ));

        let page = self.repository.list(&query, &params.page).await?;
        let viewer =
            ViewerCollections::load(self.collection_repository.as_ref(), params.viewer.as_ref())
                .await?;

        self.logger.debug(&format!(
            "Retrieved {} of {} recipes",
            page.items.len(),
            page.count
        ));
        Ok(page.map(|recipe| AnnotatedRecipe::new(recipe, &viewer)))
    }
}
