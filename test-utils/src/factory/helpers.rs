//! Shared helper utilities for factory methods.
//!
//! Provides unique id generation and convenience methods for creating entities together
//! with the rows they depend on.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique values in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// Used to build unique usernames, slugs and codes across all factories.
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a destination and an active package belonging to it.
///
/// # Returns
/// - `Ok((destination, package))` - Created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_package_with_destination(
    db: &DatabaseConnection,
) -> Result<(entity::destination::Model, entity::package::Model), DbErr> {
    let destination = crate::factory::destination::create_destination(db).await?;
    let package = crate::factory::package::create_package(db, destination.id).await?;

    Ok((destination, package))
}

/// Creates a destination and an active tour belonging to it.
pub async fn create_tour_with_destination(
    db: &DatabaseConnection,
) -> Result<(entity::destination::Model, entity::tour::Model), DbErr> {
    let destination = crate::factory::destination::create_destination(db).await?;
    let tour = crate::factory::tour::create_tour(db, destination.id).await?;

    Ok((destination, tour))
}

/// Creates a hotel with a single available room.
///
/// # Returns
/// - `Ok((hotel, room))` - Created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_hotel_with_room(
    db: &DatabaseConnection,
) -> Result<(entity::hotel::Model, entity::room::Model), DbErr> {
    let hotel = crate::factory::hotel::create_hotel(db).await?;
    let room = crate::factory::room::create_room(db, hotel.id).await?;

    Ok((hotel, room))
}

/// Creates a country and an active visa offer for it.
pub async fn create_visa_with_country(
    db: &DatabaseConnection,
) -> Result<(entity::country::Model, entity::visa::Model), DbErr> {
    let country = crate::factory::country::create_country(db).await?;
    let visa = crate::factory::visa::create_visa(db, country.id).await?;

    Ok((country, visa))
}
