use super::*;

/// Tests filtering the admin order list by status.
///
/// Expected: only confirmed orders counted and returned
#[tokio::test]
async fn filters_by_status() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_commerce_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let confirmed = seed(db, "ORD-20260101-AAAAA1", 10_000).await?;
    seed(db, "ORD-20260101-AAAAA2", 10_000).await?;

    let repo = OrderRepository::new(db);
    repo.update_status(confirmed, Some(OrderStatus::Confirmed), None)
        .await?;

    let (orders, total) = repo
        .get_all_paginated(Some(OrderStatus::Confirmed), 0, 20)
        .await?;
    let (all, all_total) = repo.get_all_paginated(None, 0, 20).await?;

    assert_eq!(total, 1);
    assert_eq!(orders[0].id, confirmed);
    assert_eq!(all_total, 2);
    assert_eq!(all.len(), 2);

    Ok(())
}
