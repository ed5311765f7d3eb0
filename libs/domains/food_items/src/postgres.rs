use async_trait::async_trait;
use database::BaseRepository;
use sea_orm::sea_query::OnConflict;
use sea_orm::ActiveValue::Set;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, DbErr, EntityTrait,
    LoaderTrait, ModelTrait, QueryFilter, QueryOrder, TransactionTrait,
};
use uuid::Uuid;

use crate::{
    entity::{food_category, food_item, food_item_category},
    error::{FoodItemError, FoodItemResult},
    models::{
        dedup_preserving_order, parse_expiration_date, CreateFoodItem, DeletedFoodItem, FoodItem,
        UpdateFoodItem,
    },
    repository::FoodItemRepository,
};

fn db_err(e: DbErr) -> FoodItemError {
    FoodItemError::Internal(format!("Database error: {}", e))
}

pub struct PgFoodItemRepository {
    base: BaseRepository<food_item::Entity>,
}

impl PgFoodItemRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Find a category by its unique name, inserting it if absent.
    ///
    /// The insert uses `ON CONFLICT DO NOTHING` so losing a concurrent race
    /// on the name does not abort the enclosing transaction; a lost race
    /// surfaces as [`DbErr::RecordNotInserted`] and the winner's row is
    /// re-selected.
    async fn find_or_create_category<C: ConnectionTrait>(
        conn: &C,
        name: &str,
    ) -> FoodItemResult<Uuid> {
        if let Some(existing) = food_category::Entity::find()
            .filter(food_category::Column::Name.eq(name))
            .one(conn)
            .await
            .map_err(db_err)?
        {
            return Ok(existing.id);
        }

        let candidate = food_category::ActiveModel {
            id: Set(Uuid::now_v7()),
            name: Set(name.to_string()),
        };
        let insert = food_category::Entity::insert(candidate).on_conflict(
            OnConflict::column(food_category::Column::Name)
                .do_nothing()
                .to_owned(),
        );

        match insert.exec(conn).await {
            Ok(result) => Ok(result.last_insert_id),
            Err(DbErr::RecordNotInserted) => {
                let existing = food_category::Entity::find()
                    .filter(food_category::Column::Name.eq(name))
                    .one(conn)
                    .await
                    .map_err(db_err)?
                    .ok_or_else(|| {
                        FoodItemError::Internal(format!(
                            "Category '{}' missing after insert conflict",
                            name
                        ))
                    })?;
                Ok(existing.id)
            }
            Err(e) => Err(db_err(e)),
        }
    }

    /// Replace an item's category links wholesale: drop every existing link,
    /// then re-insert one per deduplicated name. Returns the linked names.
    async fn replace_category_links<C: ConnectionTrait>(
        conn: &C,
        item_id: Uuid,
        names: Vec<String>,
    ) -> FoodItemResult<Vec<String>> {
        food_item_category::Entity::delete_many()
            .filter(food_item_category::Column::FoodItemId.eq(item_id))
            .exec(conn)
            .await
            .map_err(db_err)?;

        let names = dedup_preserving_order(names);
        for name in &names {
            let category_id = Self::find_or_create_category(conn, name).await?;
            let link = food_item_category::ActiveModel {
                food_item_id: Set(item_id),
                food_category_id: Set(category_id),
            };
            food_item_category::Entity::insert(link)
                .exec(conn)
                .await
                .map_err(db_err)?;
        }

        Ok(names)
    }
}

#[async_trait]
impl FoodItemRepository for PgFoodItemRepository {
    async fn create(&self, input: CreateFoodItem) -> FoodItemResult<FoodItem> {
        let txn = self.base.db().begin().await.map_err(db_err)?;

        let active_model = food_item::active_model_from_create(&input)?;
        let model = active_model.insert(&txn).await.map_err(db_err)?;

        let categories =
            Self::replace_category_links(&txn, model.id, input.category_names).await?;

        txn.commit().await.map_err(db_err)?;

        tracing::info!(food_item_id = %model.id, "Created food item");
        Ok(model.into_domain(categories))
    }

    async fn get_by_id(&self, id: Uuid) -> FoodItemResult<Option<FoodItem>> {
        let Some(model) = self.base.find_by_id(id).await.map_err(db_err)? else {
            return Ok(None);
        };

        let categories: Vec<String> = model
            .find_related(food_category::Entity)
            .all(self.base.db())
            .await
            .map_err(db_err)?
            .into_iter()
            .map(|c| c.name)
            .collect();

        Ok(Some(model.into_domain(categories)))
    }

    async fn list_visible(&self) -> FoodItemResult<Vec<FoodItem>> {
        let models = food_item::Entity::find()
            .filter(food_item::Column::Hidden.eq(false))
            .order_by_asc(food_item::Column::ExpirationDate)
            .all(self.base.db())
            .await
            .map_err(db_err)?;

        let categories = models
            .load_many_to_many(
                food_category::Entity,
                food_item_category::Entity,
                self.base.db(),
            )
            .await
            .map_err(db_err)?;

        Ok(models
            .into_iter()
            .zip(categories)
            .map(|(model, cats)| model.into_domain(cats.into_iter().map(|c| c.name).collect()))
            .collect())
    }

    async fn update(&self, id: Uuid, patch: UpdateFoodItem) -> FoodItemResult<FoodItem> {
        let txn = self.base.db().begin().await.map_err(db_err)?;

        let model = food_item::Entity::find_by_id(id)
            .one(&txn)
            .await
            .map_err(db_err)?
            .ok_or(FoodItemError::NotFound(id))?;

        let mut active: food_item::ActiveModel = model.into();

        if let Some(name) = patch.name {
            active.name = Set(name);
        }
        if let Some(expiration_date) = patch.expiration_date {
            active.expiration_date = Set(parse_expiration_date(&expiration_date)?.into());
        }
        if let Some(quantity) = patch.quantity {
            active.quantity = Set(quantity);
        }
        if let Some(image_url) = patch.image_url {
            active.image_url = Set(Some(image_url));
        }
        if let Some(keywords) = patch.keywords {
            let keywords = serde_json::to_value(&keywords).map_err(|e| {
                FoodItemError::Internal(format!("Failed to serialize keywords: {}", e))
            })?;
            active.keywords = Set(keywords);
        }
        if let Some(placement) = patch.placement {
            active.placement = Set(placement);
        }
        if let Some(hidden) = patch.hidden {
            active.hidden = Set(hidden);
        }
        active.updated_at = Set(chrono::Utc::now().into());

        let updated = active.update(&txn).await.map_err(db_err)?;

        let categories = match patch.category_names {
            Some(names) => Self::replace_category_links(&txn, id, names).await?,
            None => updated
                .find_related(food_category::Entity)
                .all(&txn)
                .await
                .map_err(db_err)?
                .into_iter()
                .map(|c| c.name)
                .collect(),
        };

        txn.commit().await.map_err(db_err)?;

        tracing::info!(food_item_id = %id, "Updated food item");
        Ok(updated.into_domain(categories))
    }

    async fn delete(&self, id: Uuid) -> FoodItemResult<DeletedFoodItem> {
        let txn = self.base.db().begin().await.map_err(db_err)?;

        let model = food_item::Entity::find_by_id(id)
            .one(&txn)
            .await
            .map_err(db_err)?
            .ok_or(FoodItemError::NotFound(id))?;

        let image_url = model.image_url.clone();

        // Junction rows cascade with the item row
        model.delete(&txn).await.map_err(db_err)?;

        txn.commit().await.map_err(db_err)?;

        tracing::info!(food_item_id = %id, "Deleted food item");
        Ok(DeletedFoodItem { id, image_url })
    }
}
