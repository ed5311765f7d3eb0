use sea_orm::entity::prelude::*;
use sea_orm::ActiveValue::Set;
use serde::{Deserialize, Serialize};

use crate::error::{FoodItemError, FoodItemResult};
use crate::models::{parse_expiration_date, CreateFoodItem, FoodItem};

/// Sea-ORM Entity for the food_items table
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "food_items")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: String,
    pub expiration_date: DateTimeWithTimeZone,
    pub quantity: i32,
    pub image_url: Option<String>,
    pub keywords: Json, // JSONB array of strings
    pub placement: String,
    pub hidden: bool,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::food_item_category::Entity")]
    FoodItemCategory,
}

impl Related<super::food_item_category::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::FoodItemCategory.def()
    }
}

// Many-to-many to categories through the junction table
impl Related<super::food_category::Entity> for Entity {
    fn to() -> RelationDef {
        super::food_item_category::Relation::FoodCategory.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::food_item_category::Relation::FoodItem.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// Assemble the domain model, attaching resolved category names.
    pub fn into_domain(self, categories: Vec<String>) -> FoodItem {
        let keywords: Vec<String> = serde_json::from_value(self.keywords).unwrap_or_default();

        FoodItem {
            id: self.id,
            name: self.name,
            expiration_date: self.expiration_date.into(),
            quantity: self.quantity,
            image_url: self.image_url,
            keywords,
            placement: self.placement,
            hidden: self.hidden,
            categories,
            created_at: self.created_at.into(),
            updated_at: self.updated_at.into(),
        }
    }
}

/// Build a fresh ActiveModel from the create DTO. Category names are not
/// part of this row; the repository links them through the junction table.
pub fn active_model_from_create(input: &CreateFoodItem) -> FoodItemResult<ActiveModel> {
    let expiration_date = parse_expiration_date(&input.expiration_date)?;
    let keywords = serde_json::to_value(&input.keywords)
        .map_err(|e| FoodItemError::Internal(format!("Failed to serialize keywords: {}", e)))?;
    let now = chrono::Utc::now();

    Ok(ActiveModel {
        id: Set(Uuid::now_v7()),
        name: Set(input.name.clone()),
        expiration_date: Set(expiration_date.into()),
        quantity: Set(input.quantity),
        image_url: Set(input.image_url.clone()),
        keywords: Set(keywords),
        placement: Set(input.placement.clone()),
        hidden: Set(false),
        created_at: Set(now.into()),
        updated_at: Set(now.into()),
    })
}
