use sea_orm_migration::{prelude::*, schema::*};

use super::m20261001_000002_create_country_table::Country;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Visa::Table)
                    .if_not_exists()
                    .col(pk_auto(Visa::Id))
                    .col(integer(Visa::CountryId))
                    .col(string(Visa::Title))
                    .col(text_null(Visa::Description))
                    .col(integer(Visa::ProcessingDays))
                    .col(big_integer(Visa::Price))
                    .col(boolean(Visa::Active).default(true))
                    .col(
                        timestamp_with_time_zone(Visa::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_visa_country_id")
                            .from(Visa::Table, Visa::CountryId)
                            .to(Country::Table, Country::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Visa::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Visa {
    Table,
    Id,
    CountryId,
    Title,
    Description,
    ProcessingDays,
    Price,
    Active,
    CreatedAt,
}
