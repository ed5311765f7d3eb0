use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(FoodItems::Table)
                    .if_not_exists()
                    .col(pk_uuid(FoodItems::Id))
                    .col(string(FoodItems::Name))
                    .col(timestamp_with_time_zone(FoodItems::ExpirationDate))
                    .col(integer(FoodItems::Quantity))
                    .col(string_null(FoodItems::ImageUrl))
                    .col(json(FoodItems::Keywords).default("[]"))
                    .col(string(FoodItems::Placement))
                    .col(boolean(FoodItems::Hidden).default(false))
                    .col(
                        timestamp_with_time_zone(FoodItems::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        timestamp_with_time_zone(FoodItems::UpdatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        // Default listing is ascending expiration over visible items
        manager
            .create_index(
                Index::create()
                    .name("idx_food_items_expiration_date")
                    .table(FoodItems::Table)
                    .col(FoodItems::ExpirationDate)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_food_items_hidden")
                    .table(FoodItems::Table)
                    .col(FoodItems::Hidden)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(FoodItems::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum FoodItems {
    Table,
    Id,
    Name,
    ExpirationDate,
    Quantity,
    ImageUrl,
    Keywords,
    Placement,
    Hidden,
    CreatedAt,
    UpdatedAt,
}
