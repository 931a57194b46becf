pub use sea_orm_migration::prelude::*;

mod m20261001_000001_create_user_table;
mod m20261001_000002_create_country_table;
mod m20261001_000003_create_city_table;
mod m20261001_000004_create_airport_table;
mod m20261001_000005_create_destination_table;
mod m20261001_000006_create_transport_type_table;
mod m20261001_000007_create_hotel_table;
mod m20261001_000008_create_room_table;
mod m20261001_000009_create_package_table;
mod m20261001_000010_create_package_hotel_table;
mod m20261001_000011_create_tour_table;
mod m20261001_000012_create_visa_table;
mod m20261001_000013_create_booking_table;
mod m20261001_000014_create_cart_item_table;
mod m20261001_000015_create_order_table;
mod m20261001_000016_create_order_item_table;
mod m20261001_000017_create_translation_table;
mod m20261001_000018_create_menu_table;
mod m20261001_000019_create_menu_item_table;
mod m20261001_000020_create_setting_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20261001_000001_create_user_table::Migration),
            Box::new(m20261001_000002_create_country_table::Migration),
            Box::new(m20261001_000003_create_city_table::Migration),
            Box::new(m20261001_000004_create_airport_table::Migration),
            Box::new(m20261001_000005_create_destination_table::Migration),
            Box::new(m20261001_000006_create_transport_type_table::Migration),
            Box::new(m20261001_000007_create_hotel_table::Migration),
            Box::new(m20261001_000008_create_room_table::Migration),
            Box::new(m20261001_000009_create_package_table::Migration),
            Box::new(m20261001_000010_create_package_hotel_table::Migration),
            Box::new(m20261001_000011_create_tour_table::Migration),
            Box::new(m20261001_000012_create_visa_table::Migration),
            Box::new(m20261001_000013_create_booking_table::Migration),
            Box::new(m20261001_000014_create_cart_item_table::Migration),
            Box::new(m20261001_000015_create_order_table::Migration),
            Box::new(m20261001_000016_create_order_item_table::Migration),
            Box::new(m20261001_000017_create_translation_table::Migration),
            Box::new(m20261001_000018_create_menu_table::Migration),
            Box::new(m20261001_000019_create_menu_item_table::Migration),
            Box::new(m20261001_000020_create_setting_table::Migration),
        ]
    }
}
