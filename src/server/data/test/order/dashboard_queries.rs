use super::*;

/// Tests that revenue ignores cancelled orders.
///
/// Expected: sum of totals of non-cancelled orders
#[tokio::test]
async fn revenue_excludes_cancelled() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_commerce_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    seed(db, "ORD-20260101-REV001", 30_000).await?;
    seed(db, "ORD-20260101-REV002", 20_000).await?;
    let cancelled = seed(db, "ORD-20260101-REV003", 50_000).await?;

    let repo = OrderRepository::new(db);
    repo.update_status(cancelled, Some(OrderStatus::Cancelled), None)
        .await?;

    assert_eq!(repo.revenue().await?, 50_000);

    Ok(())
}

/// Tests the per-status counts and recent order list.
///
/// Expected: every status reported and newest orders first
#[tokio::test]
async fn counts_by_status_and_lists_recent() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_commerce_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    seed(db, "ORD-20260101-CNT001", 1_000).await?;
    let newest = seed(db, "ORD-20260101-CNT002", 1_000).await?;

    let repo = OrderRepository::new(db);
    let counts = repo.count_by_status().await?;
    let recent = repo.recent(1).await?;

    assert_eq!(counts.len(), 5);
    assert!(counts.contains(&(OrderStatus::Pending, 2)));
    assert!(counts.contains(&(OrderStatus::Cancelled, 0)));
    assert_eq!(recent.len(), 1);
    assert_eq!(recent[0].id, newest);

    Ok(())
}

/// Tests revenue when the totals exceed the integer range.
///
/// Expected: Err(DbErr) instead of a wrapped total
#[tokio::test]
async fn revenue_overflow_is_an_error() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_commerce_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    seed(db, "ORD-20260101-OVF001", i64::MAX / 2 + 1).await?;
    seed(db, "ORD-20260101-OVF002", i64::MAX / 2 + 1).await?;

    let result = OrderRepository::new(db).revenue().await;

    assert!(result.is_err());

    Ok(())
}
