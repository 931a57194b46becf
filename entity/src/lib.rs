//! SeaORM entity definitions for the travel booking schema.

pub mod prelude;

pub mod airport;
pub mod booking;
pub mod cart_item;
pub mod city;
pub mod country;
pub mod destination;
pub mod hotel;
pub mod menu;
pub mod menu_item;
pub mod order;
pub mod order_item;
pub mod package;
pub mod package_hotel;
pub mod room;
pub mod sea_orm_active_enums;
pub mod setting;
pub mod tour;
pub mod translation;
pub mod transport_type;
pub mod user;
pub mod visa;
