use super::*;

/// Tests changing the quantity of an owned line.
///
/// Expected: quantity and total updated
#[tokio::test]
async fn updates_owned_item() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_commerce_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let item = CartItemFactory::for_user(db, user.id)
        .unit_price(25_000)
        .build()
        .await?;

    let repo = CartItemRepository::new(db);
    let updated = repo
        .update_quantity(item.id, &CartOwner::User(user.id), 3, 75_000)
        .await?
        .unwrap();

    assert_eq!(updated.quantity, 3);
    assert_eq!(updated.total_price, 75_000);
    assert_eq!(updated.unit_price, 25_000);

    Ok(())
}

/// Tests that a guest cannot update a line claimed by a user.
///
/// Expected: Ok(None)
#[tokio::test]
async fn ignores_item_of_other_owner() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_commerce_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let item = CartItemFactory::for_user(db, user.id).build().await?;

    let repo = CartItemRepository::new(db);
    let result = repo
        .update_quantity(item.id, &CartOwner::Guest("guest".to_string()), 2, 1)
        .await?;

    assert!(result.is_none());

    Ok(())
}
