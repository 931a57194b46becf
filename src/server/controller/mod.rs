//! HTTP request handlers.
//!
//! Controllers check access through `AuthGuard`, validate request DTOs, convert them to
//! server parameter models and call a service. Domain results are converted back to DTOs
//! for the response. Every handler carries a `utoipa::path` annotation for the OpenAPI
//! document.

pub mod admin;
pub mod auth;
pub mod booking;
pub mod cart;
pub mod catalog;
pub mod content;
pub mod geo;
pub mod order;

#[cfg(test)]
mod test;
