use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Sea-ORM Entity for the food_item_categories junction table.
///
/// Composite primary key, so a (item, category) pair links at most once.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "food_item_categories")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub food_item_id: Uuid,
    #[sea_orm(primary_key, auto_increment = false)]
    pub food_category_id: Uuid,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::food_item::Entity",
        from = "Column::FoodItemId",
        to = "super::food_item::Column::Id",
        on_delete = "Cascade"
    )]
    FoodItem,
    #[sea_orm(
        belongs_to = "super::food_category::Entity",
        from = "Column::FoodCategoryId",
        to = "super::food_category::Column::Id",
        on_delete = "Cascade"
    )]
    FoodCategory,
}

impl Related<super::food_item::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::FoodItem.def()
    }
}

impl Related<super::food_category::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::FoodCategory.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
