//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Factories for dependent entities take the ids of the rows
//! they reference, and `helpers` creates whole dependency chains at once.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     // Create with defaults
//!     let user = factory::user::create_user(&db).await?;
//!     let destination = factory::destination::create_destination(&db).await?;
//!
//!     // Create with all dependencies
//!     let (destination, package) = factory::helpers::create_package_with_destination(&db).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let package = factory::package::PackageFactory::new(&db, destination.id)
//!     .price(150_000)
//!     .child_price(Some(60_000))
//!     .active(false)
//!     .build()
//!     .await?;
//! ```

pub mod cart_item;
pub mod country;
pub mod destination;
pub mod helpers;
pub mod hotel;
pub mod package;
pub mod room;
pub mod tour;
pub mod translation;
pub mod transport_type;
pub mod user;
pub mod visa;

// Re-export commonly used factory functions for concise usage
pub use country::create_country;
pub use destination::create_destination;
pub use hotel::create_hotel;
pub use package::create_package;
pub use room::create_room;
pub use tour::create_tour;
pub use transport_type::create_transport_type;
pub use user::{create_admin, create_user};
pub use visa::create_visa;
