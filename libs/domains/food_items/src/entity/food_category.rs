use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Sea-ORM Entity for the food_categories table
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "food_categories")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub name: String,
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

// Many-to-many to items through the junction table
impl Related<super::food_item::Entity> for Entity {
    fn to() -> RelationDef {
        super::food_item_category::Relation::FoodItem.def()
    }

    fn via() -> Option<RelationDef> {
        Some(
            super::food_item_category::Relation::FoodCategory
                .def()
                .rev(),
        )
    }
}

impl ActiveModelBehavior for ActiveModel {}
