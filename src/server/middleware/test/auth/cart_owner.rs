use super::*;

/// Tests that a logged-in user owns the cart directly.
///
/// Expected: CartOwner::User
#[tokio::test]
async fn resolves_logged_in_user() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let user = factory::create_user(db).await?;
    AuthSession::new(session).set_user_id(user.id).await?;

    let owner = AuthGuard::new(db, session).cart_owner(true).await?;

    assert_eq!(owner, Some(CartOwner::User(user.id)));

    Ok(())
}

/// Tests guest token creation for anonymous visitors.
///
/// Expected: None until a token is requested, then the same token every time
#[tokio::test]
async fn creates_guest_token_on_demand() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let guard = AuthGuard::new(db, session);

    assert_eq!(guard.cart_owner(false).await?, None);

    let created = guard.cart_owner(true).await?;
    let reused = guard.cart_owner(false).await?;

    assert!(matches!(created, Some(CartOwner::Guest(ref token)) if token.len() == 32));
    assert_eq!(created, reused);

    Ok(())
}
