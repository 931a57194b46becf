use sea_orm_migration::{prelude::*, schema::*};

use super::m20261001_000018_create_menu_table::Menu;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(MenuItem::Table)
                    .if_not_exists()
                    .col(pk_auto(MenuItem::Id))
                    .col(integer(MenuItem::MenuId))
                    .col(integer_null(MenuItem::ParentId))
                    .col(string(MenuItem::Title))
                    .col(string(MenuItem::Url))
                    .col(integer(MenuItem::Position).default(0))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_menu_item_menu_id")
                            .from(MenuItem::Table, MenuItem::MenuId)
                            .to(Menu::Table, Menu::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(MenuItem::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum MenuItem {
    Table,
    Id,
    MenuId,
    ParentId,
    Title,
    Url,
    Position,
}
