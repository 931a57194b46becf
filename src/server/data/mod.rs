//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations (CRUD) for each
//! domain in the application. Repositories use SeaORM entity models internally and return
//! domain models to maintain separation between the data layer and business logic layer.
//! Cart and order repositories are generic over the connection so checkout can run them
//! inside a single transaction.

pub mod booking;
pub mod cart_item;
pub mod destination;
pub mod geo;
pub mod hotel;
pub mod menu;
pub mod order;
pub mod package;
pub mod room;
pub mod setting;
pub mod tour;
pub mod translation;
pub mod transport_type;
pub mod user;
pub mod visa;

#[cfg(test)]
mod test;
