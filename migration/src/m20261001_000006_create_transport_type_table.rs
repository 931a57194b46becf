use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(TransportType::Table)
                    .if_not_exists()
                    .col(pk_auto(TransportType::Id))
                    .col(string_uniq(TransportType::Name))
                    .col(integer(TransportType::MultiplierPercent).default(100))
                    .col(
                        timestamp_with_time_zone(TransportType::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(TransportType::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum TransportType {
    Table,
    Id,
    Name,
    MultiplierPercent,
    CreatedAt,
}
