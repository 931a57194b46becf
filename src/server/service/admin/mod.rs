//! Back-office services: setup codes, dashboard figures and image uploads.

pub mod code;
pub mod dashboard;
pub mod upload;
