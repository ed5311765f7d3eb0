//! SeaORM entities for the three pantry relations.

pub mod food_category;
pub mod food_item;
pub mod food_item_category;
