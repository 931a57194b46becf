use super::*;

/// Tests merging a guest cart into a user cart after login.
///
/// Expected: guest lines move to the user and the guest cart is empty
#[tokio::test]
async fn moves_guest_items_to_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_commerce_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    CartItemFactory::for_user(db, user.id).build().await?;
    CartItemFactory::for_guest(db, "token-a").build().await?;
    CartItemFactory::for_guest(db, "token-a").build().await?;
    CartItemFactory::for_guest(db, "token-b").build().await?;

    let repo = CartItemRepository::new(db);
    let moved = repo.assign_guest_items_to_user("token-a", user.id).await?;

    assert_eq!(moved, 2);
    let user_items = repo.get_by_owner(&CartOwner::User(user.id)).await?;
    assert_eq!(user_items.len(), 3);
    assert!(user_items.iter().all(|item| item.guest_token.is_none()));
    assert!(repo
        .get_by_owner(&CartOwner::Guest("token-a".to_string()))
        .await?
        .is_empty());
    assert_eq!(
        repo.get_by_owner(&CartOwner::Guest("token-b".to_string()))
            .await?
            .len(),
        1
    );

    Ok(())
}
