use super::*;
use crate::server::controller::admin::sales::get_dashboard;

/// Tests dashboard access for each kind of caller.
///
/// Expected: 401 anonymous, 403 regular user, 200 admin
#[tokio::test]
async fn dashboard_requires_admin() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_commerce_tables()
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();
    let state = test_state(db);
    let user = factory::create_user(db).await?;
    let admin = factory::create_admin(db).await?;

    let response = get_dashboard(State(state.clone()), session.clone())
        .await
        .into_response();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    AuthSession::new(session).set_user_id(user.id).await?;
    let response = get_dashboard(State(state.clone()), session.clone())
        .await
        .into_response();
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    AuthSession::new(session).set_user_id(admin.id).await?;
    let response = get_dashboard(State(state), session.clone())
        .await
        .into_response();
    assert_eq!(response.status(), StatusCode::OK);

    Ok(())
}

/// Tests registering with the setup code issued while no admin exists.
///
/// Expected: the new account is an admin and can open the dashboard
#[tokio::test]
async fn setup_code_grants_admin() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_commerce_tables()
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();
    let state = test_state(db);
    let code = state.admin_code_service.generate().await;

    crate::server::controller::auth::register(
        State(state.clone()),
        session.clone(),
        Json(register_dto("owner", Some(code))),
    )
    .await?;

    let response = get_dashboard(State(state), session.clone())
        .await
        .into_response();
    assert_eq!(response.status(), StatusCode::OK);

    Ok(())
}
