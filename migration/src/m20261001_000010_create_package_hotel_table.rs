use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20261001_000007_create_hotel_table::Hotel,
    m20261001_000009_create_package_table::Package,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PackageHotel::Table)
                    .if_not_exists()
                    .col(pk_auto(PackageHotel::Id))
                    .col(integer(PackageHotel::PackageId))
                    .col(integer(PackageHotel::HotelId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_package_hotel_package_id")
                            .from(PackageHotel::Table, PackageHotel::PackageId)
                            .to(Package::Table, Package::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_package_hotel_hotel_id")
                            .from(PackageHotel::Table, PackageHotel::HotelId)
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
            .drop_table(Table::drop().table(PackageHotel::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum PackageHotel {
    Table,
    Id,
    PackageId,
    HotelId,
}
