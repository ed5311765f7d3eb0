use std::sync::Arc;
use uuid::Uuid;
use validator::Validate;

use crate::error::{FoodItemError, FoodItemResult};
use crate::files::{file_key_from_url, FileStore};
use crate::listing;
use crate::models::{
    CreateFoodItem, DeleteFoodItem, DeletedFoodItem, FoodItem, SortOrder, UpdateFoodItem,
};
use crate::repository::FoodItemRepository;

/// Service layer for food item business logic
#[derive(Clone)]
pub struct FoodItemService<R: FoodItemRepository> {
    repository: Arc<R>,
    file_store: Arc<dyn FileStore>,
}

impl<R: FoodItemRepository> FoodItemService<R> {
    pub fn new(repository: R, file_store: Arc<dyn FileStore>) -> Self {
        Self {
            repository: Arc::new(repository),
            file_store,
        }
    }

    /// Create a new food item with validation
    pub async fn create_food_item(&self, input: CreateFoodItem) -> FoodItemResult<FoodItem> {
        input
            .validate()
            .map_err(|e| FoodItemError::Validation(e.to_string()))?;

        self.repository.create(input).await
    }

    /// Get a food item by ID (hidden items included)
    pub async fn get_food_item(&self, id: Uuid) -> FoodItemResult<FoodItem> {
        self.repository
            .get_by_id(id)
            .await?
            .ok_or(FoodItemError::NotFound(id))
    }

    /// List visible items, optionally filtered and re-sorted in memory.
    ///
    /// The snapshot is fetched once; search and sort run over it without
    /// further queries. Without a sort the repository's ascending-expiration
    /// order is kept.
    pub async fn list_food_items(
        &self,
        search: Option<&str>,
        sort: Option<SortOrder>,
    ) -> FoodItemResult<Vec<FoodItem>> {
        let mut items = self.repository.list_visible().await?;

        if let Some(term) = search {
            items = listing::search(items, term);
        }
        if let Some(order) = sort {
            items = listing::sort(items, order);
        }

        Ok(items)
    }

    /// Apply a sparse patch to an existing item
    pub async fn update_food_item(&self, input: UpdateFoodItem) -> FoodItemResult<FoodItem> {
        input
            .validate()
            .map_err(|e| FoodItemError::Validation(e.to_string()))?;

        let id = input
            .id
            .ok_or_else(|| FoodItemError::Validation("id is required".to_string()))?;

        self.repository.update(id, input).await
    }

    /// Delete an item, then dispatch best-effort cleanup of its hosted photo
    pub async fn delete_food_item(&self, input: DeleteFoodItem) -> FoodItemResult<DeletedFoodItem> {
        let id = input
            .id
            .ok_or_else(|| FoodItemError::Validation("id is required".to_string()))?;

        let deleted = self.repository.delete(id).await?;

        self.dispatch_photo_cleanup(deleted.image_url.clone());

        Ok(deleted)
    }

    /// Fire-and-forget deletion of the hosted photo.
    ///
    /// Runs after the database delete has committed. A missing URL or an
    /// unextractable key is a no-op; file-host failures are logged and
    /// swallowed so the already-committed delete stands.
    fn dispatch_photo_cleanup(&self, image_url: Option<String>) {
        let Some(url) = image_url else {
            return;
        };

        let Some(key) = file_key_from_url(&url) else {
            tracing::debug!(image_url = %url, "No file key in image URL, skipping cleanup");
            return;
        };

        let key = key.to_string();
        let store = Arc::clone(&self.file_store);

        tokio::spawn(async move {
            if let Err(e) = store.delete(&key).await {
                tracing::warn!(
                    file_key = %key,
                    error = %e,
                    "Failed to delete hosted photo, leaving orphan"
                );
            }
        });
    }
}
