use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20261001_000003_create_city_table::City,
    m20261001_000005_create_destination_table::Destination,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Hotel::Table)
                    .if_not_exists()
                    .col(pk_auto(Hotel::Id))
                    .col(integer_null(Hotel::DestinationId))
                    .col(integer_null(Hotel::CityId))
                    .col(string(Hotel::Name))
                    .col(text_null(Hotel::Description))
                    .col(string_null(Hotel::Address))
                    .col(integer(Hotel::Stars).default(3))
                    .col(big_integer(Hotel::BasePrice))
                    .col(string_null(Hotel::ImageUrl))
                    .col(json(Hotel::Gallery))
                    .col(json(Hotel::Amenities))
                    .col(boolean(Hotel::Featured).default(false))
                    .col(boolean(Hotel::Active).default(true))
                    .col(
                        timestamp_with_time_zone(Hotel::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_hotel_destination_id")
                            .from(Hotel::Table, Hotel::DestinationId)
                            .to(Destination::Table, Destination::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_hotel_city_id")
                            .from(Hotel::Table, Hotel::CityId)
                            .to(City::Table, City::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Hotel::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Hotel {
    Table,
    Id,
    DestinationId,
    CityId,
    Name,
    Description,
    Address,
    Stars,
    BasePrice,
    ImageUrl,
    Gallery,
    Amenities,
    Featured,
    Active,
    CreatedAt,
}
