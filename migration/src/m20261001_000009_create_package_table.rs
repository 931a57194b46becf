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
                    .table(Package::Table)
                    .if_not_exists()
                    .col(pk_auto(Package::Id))
                    .col(integer(Package::DestinationId))
                    .col(string(Package::Title))
                    .col(string_uniq(Package::Slug))
                    .col(text_null(Package::Description))
                    .col(integer(Package::DurationDays))
                    .col(big_integer(Package::Price))
                    .col(big_integer_null(Package::DiscountedPrice))
                    .col(big_integer_null(Package::ChildPrice))
                    .col(string_null(Package::ImageUrl))
                    .col(json(Package::Gallery))
                    .col(json(Package::Itinerary))
                    .col(json(Package::Included))
                    .col(json(Package::Excluded))
                    .col(boolean(Package::Featured).default(false))
                    .col(boolean(Package::Active).default(true))
                    .col(
                        timestamp_with_time_zone(Package::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_package_destination_id")
                            .from(Package::Table, Package::DestinationId)
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
            .drop_table(Table::drop().table(Package::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Package {
    Table,
    Id,
    DestinationId,
    Title,
    Slug,
    Description,
    DurationDays,
    Price,
    DiscountedPrice,
    ChildPrice,
    ImageUrl,
    Gallery,
    Itinerary,
    Included,
    Excluded,
    Featured,
    Active,
    CreatedAt,
}
