//! Business logic layer.
//!
//! Services validate requests against business rules, orchestrate repositories and
//! convert between domain models. Controllers only talk to services.

pub mod admin;
pub mod auth;
pub mod booking;
pub mod cart;
pub mod destination;
pub mod geo;
pub mod hotel;
pub mod menu;
pub mod order;
pub mod package;
pub mod pricing;
pub mod setting;
pub mod tour;
pub mod translation;
pub mod transport;
pub mod user;
pub mod visa;
