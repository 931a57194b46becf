//! Server-side domain models and parameter types.
//!
//! Domain models are converted from entity models at the repository boundary and into
//! DTOs at the controller boundary. Parameter types carry validated request data from
//! controllers into services.

pub mod booking;
pub mod cart;
pub mod destination;
pub mod geo;
pub mod hotel;
pub mod menu;
pub mod order;
pub mod package;
pub mod pagination;
pub mod tour;
pub mod translation;
pub mod transport;
pub mod user;
pub mod visa;
