use sea_orm_migration::{prelude::*, schema::*};

use super::m20261001_000005_create_destination_table::Destination;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Tour::Table)
                    .if_not_exists()
                    .col(pk_auto(Tour::Id))
                    .col(integer(Tour::DestinationId))
                    .col(string(Tour::Title))
                    .col(string_uniq(Tour::Slug))
                    .col(text_null(Tour::Description))
                    .col(integer(Tour::DurationHours))
                    .col(big_integer(Tour::Price))
                    .col(big_integer_null(Tour::ChildPrice))
                    .col(string_null(Tour::ImageUrl))
                    .col(json(Tour::Gallery))
                    .col(boolean(Tour::Featured).default(false))
                    .col(boolean(Tour::Active).default(true))
                    .col(
                        timestamp_with_time_zone(Tour::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_tour_destination_id")
                            .from(Tour::Table, Tour::DestinationId)
                            .to(Destination::Table, Destination::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Tour::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Tour {
    Table,
    Id,
    DestinationId,
    Title,
    Slug,
    Description,
    DurationHours,
    Price,
    ChildPrice,
    ImageUrl,
    Gallery,
    Featured,
    Active,
    CreatedAt,
}
