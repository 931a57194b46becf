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
                    .table(Destination::Table)
                    .if_not_exists()
                    .col(pk_auto(Destination::Id))
                    .col(string(Destination::Name))
                    .col(integer_null(Destination::CountryId))
                    .col(text_null(Destination::Description))
                    .col(string_null(Destination::ImageUrl))
                    .col(boolean(Destination::Featured).default(false))
                    .col(boolean(Destination::Active).default(true))
                    .col(
                        timestamp_with_time_zone(Destination::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_destination_country_id")
                            .from(Destination::Table, Destination::CountryId)
                            .to(Country::Table, Country::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Destination::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Destination {
    Table,
    Id,
    Name,
    CountryId,
    Description,
    ImageUrl,
    Featured,
    Active,
    CreatedAt,
}
