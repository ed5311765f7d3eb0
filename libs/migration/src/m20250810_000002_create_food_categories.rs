use sea_orm_migration::{prelude::*, schema::*};

use crate::m20250810_000001_create_food_items::FoodItems;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(FoodCategories::Table)
                    .if_not_exists()
                    .col(pk_uuid(FoodCategories::Id))
                    .col(string_uniq(FoodCategories::Name))
                    .to_owned(),
            )
            .await?;

        // Junction table, composite key, cascading deletes both ways
        manager
            .create_table(
                Table::create()
                    .table(FoodItemCategories::Table)
                    .if_not_exists()
                    .col(uuid(FoodItemCategories::FoodItemId))
                    .col(uuid(FoodItemCategories::FoodCategoryId))
                    .primary_key(
                        Index::create()
                            .col(FoodItemCategories::FoodItemId)
                            .col(FoodItemCategories::FoodCategoryId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_food_item_categories_item")
                            .from(FoodItemCategories::Table, FoodItemCategories::FoodItemId)
                            .to(FoodItems::Table, FoodItems::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_food_item_categories_category")
                            .from(
                                FoodItemCategories::Table,
                                FoodItemCategories::FoodCategoryId,
                            )
                            .to(FoodCategories::Table, FoodCategories::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_food_item_categories_category_id")
                    .table(FoodItemCategories::Table)
                    .col(FoodItemCategories::FoodCategoryId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(FoodItemCategories::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(FoodCategories::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum FoodCategories {
    Table,
    Id,
    Name,
}

#[derive(DeriveIden)]
enum FoodItemCategories {
    Table,
    FoodItemId,
    FoodCategoryId,
}
