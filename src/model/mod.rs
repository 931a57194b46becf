//! Data transfer objects exchanged with API clients.
//!
//! These types define the JSON wire format of every endpoint. Request DTOs derive
//! `validator::Validate` and are checked by controllers before conversion into server
//! parameter models. Response DTOs are produced by `into_dto` conversions on domain models.

pub mod api;
pub mod booking;
pub mod cart;
pub mod dashboard;
pub mod destination;
pub mod geo;
pub mod hotel;
pub mod menu;
pub mod order;
pub mod package;
pub mod setting;
pub mod tour;
pub mod translation;
pub mod transport;
pub mod upload;
pub mod user;
pub mod visa;
