use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Translation::Table)
                    .if_not_exists()
                    .col(pk_auto(Translation::Id))
                    .col(string_uniq(Translation::Key))
                    .col(text(Translation::EnText))
                    .col(text_null(Translation::ArText))
                    .col(string_null(Translation::Category))
                    .col(
                        timestamp_with_time_zone(Translation::UpdatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Translation::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Translation {
    Table,
    Id,
    Key,
    EnText,
    ArText,
    Category,
    UpdatedAt,
}
