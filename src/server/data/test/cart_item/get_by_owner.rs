use super::*;

/// Tests that each owner only sees its own cart lines.
///
/// Expected: user and guest carts are disjoint
#[tokio::test]
async fn scopes_items_to_owner() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_commerce_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let other = factory::create_user(db).await?;
    let mine = CartItemFactory::for_user(db, user.id).build().await?;
    CartItemFactory::for_user(db, other.id).build().await?;
    let guest = CartItemFactory::for_guest(db, "guest-token").build().await?;

    let repo = CartItemRepository::new(db);
    let user_items = repo.get_by_owner(&CartOwner::User(user.id)).await?;
    let guest_items = repo
        .get_by_owner(&CartOwner::Guest("guest-token".to_string()))
        .await?;

    assert_eq!(user_items.len(), 1);
    assert_eq!(user_items[0].id, mine.id);
    assert_eq!(guest_items.len(), 1);
    assert_eq!(guest_items[0].id, guest.id);

    Ok(())
}

/// Tests that lines of another owner cannot be found or deleted.
///
/// Expected: None from find_owned and false from delete_owned
#[tokio::test]
async fn hides_items_of_other_owners() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_commerce_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let intruder = factory::create_user(db).await?;
    let item = CartItemFactory::for_user(db, user.id).build().await?;

    let repo = CartItemRepository::new(db);
    let owner = CartOwner::User(intruder.id);

    assert!(repo.find_owned(item.id, &owner).await?.is_none());
    assert!(!repo.delete_owned(item.id, &owner).await?);
    assert!(repo
        .find_owned(item.id, &CartOwner::User(user.id))
        .await?
        .is_some());

    Ok(())
}
