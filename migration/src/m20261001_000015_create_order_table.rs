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
                    .table(Order::Table)
                    .if_not_exists()
                    .col(pk_auto(Order::Id))
                    .col(string_uniq(Order::OrderNumber))
                    .col(integer_null(Order::UserId))
                    .col(string(Order::CustomerName))
                    .col(string(Order::CustomerEmail))
                    .col(string_null(Order::CustomerPhone))
                    .col(string_len(Order::Status, 16).default("pending"))
                    .col(string_len(Order::PaymentStatus, 16).default("pending"))
                    .col(string(Order::PaymentMethod))
                    .col(big_integer(Order::Subtotal))
                    .col(big_integer(Order::Total))
                    .col(text_null(Order::Notes))
                    .col(
                        timestamp_with_time_zone(Order::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_order_user_id")
                            .from(Order::Table, Order::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Order::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Order {
    Table,
    Id,
    OrderNumber,
    UserId,
    CustomerName,
    CustomerEmail,
    CustomerPhone,
    Status,
    PaymentStatus,
    PaymentMethod,
    Subtotal,
    Total,
    Notes,
    CreatedAt,
}
