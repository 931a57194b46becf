use super::*;

/// Tests listing a user's bookings newest first.
///
/// Expected: only the caller's bookings, most recent first
#[tokio::test]
async fn lists_own_bookings_newest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_commerce_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let other = factory::create_user(db).await?;
    let (_, package) = factory::helpers::create_package_with_destination(db).await?;

    let repo = BookingRepository::new(db);
    let first = repo.create(new_booking(user.id, package.id)).await?;
    let second = repo.create(new_booking(user.id, package.id)).await?;
    repo.create(new_booking(other.id, package.id)).await?;

    let bookings = repo.get_by_user(user.id).await?;

    assert_eq!(bookings.len(), 2);
    assert_eq!(bookings[0].id, second.id);
    assert_eq!(bookings[1].id, first.id);
    assert_eq!(first.status, BookingStatus::Pending);

    Ok(())
}
