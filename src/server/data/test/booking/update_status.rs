use super::*;

/// Tests changing a booking status and filtering the admin list by it.
///
/// Expected: confirmed booking listed under the confirmed filter only
#[tokio::test]
async fn updates_status() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_commerce_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let (_, package) = factory::helpers::create_package_with_destination(db).await?;

    let repo = BookingRepository::new(db);
    let booking = repo.create(new_booking(user.id, package.id)).await?;
    repo.create(new_booking(user.id, package.id)).await?;

    let updated = repo
        .update_status(booking.id, BookingStatus::Confirmed)
        .await?
        .unwrap();
    let (confirmed, total) = repo
        .get_all_paginated(Some(BookingStatus::Confirmed), 0, 20)
        .await?;

    assert_eq!(updated.status, BookingStatus::Confirmed);
    assert_eq!(total, 1);
    assert_eq!(confirmed[0].id, booking.id);
    assert!(repo
        .update_status(999, BookingStatus::Cancelled)
        .await?
        .is_none());

    Ok(())
}
