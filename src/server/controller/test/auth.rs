use super::*;
use crate::server::controller::auth::{get_user, login, logout, register};

/// Tests the register, current user and logout flow.
///
/// Expected: 201, then 200 while logged in, 204 on logout and 401 afterwards
#[tokio::test]
async fn register_then_logout() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_commerce_tables()
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();
    let state = test_state(db);

    let response = register(
        State(state.clone()),
        session.clone(),
        Json(register_dto("traveller", None)),
    )
    .await
    .into_response();
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = get_user(State(state.clone()), session.clone())
        .await
        .into_response();
    assert_eq!(response.status(), StatusCode::OK);

    let response = logout(session.clone()).await.into_response();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let response = get_user(State(state), session.clone())
        .await
        .into_response();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    Ok(())
}

/// Tests registration with an admin code that was never issued.
///
/// Expected: 400 and no session
#[tokio::test]
async fn rejects_unknown_admin_code() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_commerce_tables()
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();
    let state = test_state(db);

    let response = register(
        State(state),
        session.clone(),
        Json(register_dto("intruder", Some("not-a-code".to_string()))),
    )
    .await
    .into_response();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(AuthSession::new(session).get_user_id().await?, None);

    Ok(())
}

/// Tests logging in with a wrong password.
///
/// Expected: 401
#[tokio::test]
async fn rejects_wrong_password() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_commerce_tables()
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();
    let state = test_state(db);

    register(
        State(state.clone()),
        session.clone(),
        Json(register_dto("traveller", None)),
    )
    .await?;
    logout(session.clone()).await?;

    let response = login(
        State(state),
        session.clone(),
        Json(LoginDto {
            username: "traveller".to_string(),
            password: "wrong-pass".to_string(),
        }),
    )
    .await
    .into_response();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    Ok(())
}
