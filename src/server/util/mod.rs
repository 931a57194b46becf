//! Small pure helpers shared by services and repositories.

pub mod json;
pub mod order_number;
pub mod slug;
