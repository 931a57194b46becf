use sea_orm_migration::{prelude::*, schema::*};

use super::m20261001_000015_create_order_table::Order;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(OrderItem::Table)
                    .if_not_exists()
                    .col(pk_auto(OrderItem::Id))
                    .col(integer(OrderItem::OrderId))
                    .col(string_len(OrderItem::ItemType, 16))
                    .col(integer(OrderItem::ItemId))
                    .col(string(OrderItem::ItemName))
                    .col(integer(OrderItem::Quantity))
                    .col(integer(OrderItem::Adults))
                    .col(integer(OrderItem::Children))
                    .col(integer(OrderItem::Infants))
                    .col(date_null(OrderItem::TravelDate))
                    .col(date_null(OrderItem::CheckIn))
                    .col(date_null(OrderItem::CheckOut))
                    .col(big_integer(OrderItem::UnitPrice))
                    .col(big_integer(OrderItem::TotalPrice))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_order_item_order_id")
                            .from(OrderItem::Table, OrderItem::OrderId)
                            .to(Order::Table, Order::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(OrderItem::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum OrderItem {
    Table,
    Id,
    OrderId,
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
    UnitPrice,
    TotalPrice,
}
