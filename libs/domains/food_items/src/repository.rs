use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::error::{FoodItemError, FoodItemResult};
use crate::models::{CreateFoodItem, DeletedFoodItem, FoodItem, UpdateFoodItem};

/// Repository trait for food item persistence
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait FoodItemRepository: Send + Sync {
    /// Create a new item with its category links
    async fn create(&self, input: CreateFoodItem) -> FoodItemResult<FoodItem>;

    /// Get an item by ID. Hidden items are reachable here.
    async fn get_by_id(&self, id: Uuid) -> FoodItemResult<Option<FoodItem>>;

    /// List all visible items, soonest expiration first
    async fn list_visible(&self) -> FoodItemResult<Vec<FoodItem>>;

    /// Apply a sparse patch to an existing item
    async fn update(&self, id: Uuid, patch: UpdateFoodItem) -> FoodItemResult<FoodItem>;

    /// Delete an item, returning its id and image URL for photo cleanup
    async fn delete(&self, id: Uuid) -> FoodItemResult<DeletedFoodItem>;
}

/// In-memory implementation of FoodItemRepository (for development/testing)
#[derive(Debug, Default, Clone)]
pub struct InMemoryFoodItemRepository {
    items: Arc<RwLock<HashMap<Uuid, FoodItem>>>,
}

impl InMemoryFoodItemRepository {
    pub fn new() -> Self {
        Self {
            items: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

#[async_trait]
impl FoodItemRepository for InMemoryFoodItemRepository {
    async fn create(&self, input: CreateFoodItem) -> FoodItemResult<FoodItem> {
        let item = FoodItem::new(input)?;

        let mut items = self.items.write().await;
        items.insert(item.id, item.clone());

        tracing::info!(food_item_id = %item.id, "Created food item");
        Ok(item)
    }

    async fn get_by_id(&self, id: Uuid) -> FoodItemResult<Option<FoodItem>> {
        let items = self.items.read().await;
        Ok(items.get(&id).cloned())
    }

    async fn list_visible(&self) -> FoodItemResult<Vec<FoodItem>> {
        let items = self.items.read().await;

        let mut result: Vec<FoodItem> = items.values().filter(|i| !i.hidden).cloned().collect();

        // Soonest expiration first; ties broken by creation order so the
        // sequence is deterministic
        result.sort_by(|a, b| {
            a.expiration_date
                .cmp(&b.expiration_date)
                .then(a.created_at.cmp(&b.created_at))
                .then(a.id.cmp(&b.id))
        });

        Ok(result)
    }

    async fn update(&self, id: Uuid, patch: UpdateFoodItem) -> FoodItemResult<FoodItem> {
        let mut items = self.items.write().await;

        let item = items.get_mut(&id).ok_or(FoodItemError::NotFound(id))?;
        item.apply_update(patch)?;
        let updated = item.clone();

        tracing::info!(food_item_id = %id, "Updated food item");
        Ok(updated)
    }

    async fn delete(&self, id: Uuid) -> FoodItemResult<DeletedFoodItem> {
        let mut items = self.items.write().await;

        let item = items.remove(&id).ok_or(FoodItemError::NotFound(id))?;

        tracing::info!(food_item_id = %id, "Deleted food item");
        Ok(DeletedFoodItem {
            id: item.id,
            image_url: item.image_url,
        })
    }
}
