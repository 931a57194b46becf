use sea_orm_migration::{prelude::*, schema::*};

use super::m20261001_000007_create_hotel_table::Hotel;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Room::Table)
                    .if_not_exists()
                    .col(pk_auto(Room::Id))
                    .col(integer(Room::HotelId))
                    .col(string(Room::Name))
                    .col(text_null(Room::Description))
                    .col(integer(Room::MaxAdults).default(2))
                    .col(integer(Room::MaxChildren).default(0))
                    .col(big_integer(Room::Price))
                    .col(boolean(Room::Available).default(true))
                    .col(string_null(Room::ImageUrl))
                    .col(
                        timestamp_with_time_zone(Room::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_room_hotel_id")
                            .from(Room::Table, Room::HotelId)
                            .to(Hotel::Table, Hotel::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Room::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Room {
    Table,
    Id,
    HotelId,
    Name,
    Description,
    MaxAdults,
    MaxChildren,
    Price,
    Available,
    ImageUrl,
    CreatedAt,
}
