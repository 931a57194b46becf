use sea_orm_migration::{prelude::*, schema::*};

use super::m20261001_000001_create_user_table::User;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(CartItem::Table)
                    .if_not_exists()
                    .col(pk_auto(CartItem::Id))
                    .col(integer_null(CartItem::UserId))
                    .col(string_null(CartItem::GuestToken))
                    .col(string_len(CartItem::ItemType, 16))
                    .col(integer(CartItem::ItemId))
                    .col(string(CartItem::ItemName))
                    .col(integer(CartItem::Quantity).default(1))
                    .col(integer(CartItem::Adults).default(1))
                    .col(integer(CartItem::Children).default(0))
                    .col(integer(CartItem::Infants).default(0))
                    .col(date_null(CartItem::TravelDate))
                    .col(date_null(CartItem::CheckIn))
                    .col(date_null(CartItem::CheckOut))
                    .col(integer_null(CartItem::TransportTypeId))
                    .col(big_integer(CartItem::UnitPrice))
                    .col(big_integer(CartItem::TotalPrice))
                    .col(
                        timestamp_with_time_zone(CartItem::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_cart_item_user_id")
                            .from(CartItem::Table, CartItem::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(CartItem::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum CartItem {
    Table,
    Id,
    UserId,
    GuestToken,
    ItemType,
    ItemId,
    ItemName,
    Quantity,
    Adults,
    Children,
    Infants,
    TravelDate,
    CheckIn,
    CheckOut,
    TransportTypeId,
    UnitPrice,
    TotalPrice,
    CreatedAt,
}
