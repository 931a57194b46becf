use super::*;

/// Tests that only the provided statuses change.
///
/// Expected: payment status updated and fulfilment status untouched
#[tokio::test]
async fn updates_only_provided_status() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_commerce_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let id = seed(db, "ORD-20260101-AAAAAA", 10_000).await?;

    let repo = OrderRepository::new(db);
    let updated = repo
        .update_status(id, None, Some(PaymentStatus::Paid))
        .await?
        .unwrap();

    assert_eq!(updated.status, OrderStatus::Pending);
    assert_eq!(updated.payment_status, PaymentStatus::Paid);
    assert_eq!(updated.items.len(), 1);

    assert!(repo
        .update_status(999, Some(OrderStatus::Confirmed), None)
        .await?
        .is_none());

    Ok(())
}
