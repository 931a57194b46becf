use crate::server::{
    error::AppError,
    middleware::session::{AuthSession, CartSession},
};
use test_utils::builder::TestBuilder;

/// Tests that taking the guest token removes it from the session.
///
/// Expected: Some on the first take, None afterwards
#[tokio::test]
async fn take_guest_token_removes_it() -> Result<(), AppError> {
    let mut test = TestBuilder::new().build().await.unwrap();
    let session = test.session().await.unwrap();

    let cart_session = CartSession::new(session);
    let token = cart_session.get_or_create_guest_token().await?;

    assert_eq!(cart_session.take_guest_token().await?, Some(token));
    assert_eq!(cart_session.take_guest_token().await?, None);

    Ok(())
}

/// Tests that clearing the session logs the user out.
///
/// Expected: no user id after clear
#[tokio::test]
async fn clear_removes_user() -> Result<(), AppError> {
    let mut test = TestBuilder::new().build().await.unwrap();
    let session = test.session().await.unwrap();

    let auth_session = AuthSession::new(session);
    auth_session.set_user_id(7).await?;
    assert_eq!(auth_session.get_user_id().await?, Some(7));

    auth_session.clear().await;

    assert_eq!(auth_session.get_user_id().await?, None);

    Ok(())
}
