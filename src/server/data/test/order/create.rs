use super::*;

/// Tests creating an order with its items.
///
/// Expected: pending statuses and items readable by order number
#[tokio::test]
async fn creates_order_with_items() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_commerce_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let repo = OrderRepository::new(db);
    let order = repo
        .create(new_order("ORD-20260101-ABC123", Some(user.id), 40_000))
        .await?;

    assert_eq!(order.status, OrderStatus::Pending);
    assert_eq!(order.payment_status, PaymentStatus::Pending);
    assert_eq!(order.payment_method, PaymentMethod::Cash);
    assert_eq!(order.items.len(), 1);

    let found = repo.find_by_number("ORD-20260101-ABC123").await?.unwrap();
    assert_eq!(found.id, order.id);
    assert_eq!(found.items.len(), 1);
    assert_eq!(found.items[0].pax.adults, 2);

    let mine = repo.get_by_user(user.id).await?;
    assert_eq!(mine.len(), 1);

    Ok(())
}

/// Tests looking up an unknown order number.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_unknown_number() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_commerce_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = OrderRepository::new(db);

    assert!(repo.find_by_number("ORD-20260101-NOPE00").await?.is_none());

    Ok(())
}
