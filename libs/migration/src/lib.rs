pub use sea_orm_migration::prelude::*;

mod m20250810_000001_create_food_items;
mod m20250810_000002_create_food_categories;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250810_000001_create_food_items::Migration),
            Box::new(m20250810_000002_create_food_categories::Migration),
        ]
    }
}
