use super::*;
use crate::server::{
    controller::{
        auth::register,
        cart::{add_cart_item, get_cart},
        order::checkout,
    },
    data::cart_item::CartItemRepository,
    model::cart::CartOwner,
};

/// Tests that a guest cart follows the visitor into a new account.
///
/// Expected: the line added as a guest belongs to the user after registration
#[tokio::test]
async fn guest_cart_moves_to_new_account() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_commerce_tables()
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();
    let state = test_state(db);
    let (_, package) = factory::helpers::create_package_with_destination(db).await?;

    let response = add_cart_item(
        State(state.clone()),
        session.clone(),
        Json(add_package_dto(package.id)),
    )
    .await
    .into_response();
    assert_eq!(response.status(), StatusCode::CREATED);

    register(
        State(state.clone()),
        session.clone(),
        Json(register_dto("traveller", None)),
    )
    .await?;

    let user_id = AuthSession::new(session)
        .get_user_id()
        .await?
        .ok_or_else(|| AppError::InternalError("not logged in".to_string()))?;
    let items = CartItemRepository::new(db)
        .get_by_owner(&CartOwner::User(user_id))
        .await?;
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].item_id, package.id);

    let response = get_cart(State(state), session.clone())
        .await
        .into_response();
    assert_eq!(response.status(), StatusCode::OK);

    Ok(())
}

/// Tests checkout from a session that never had a cart.
///
/// Expected: 400
#[tokio::test]
async fn checkout_without_cart_is_rejected() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_commerce_tables()
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();
    let state = test_state(db);

    let response = checkout(
        State(state),
        session.clone(),
        Json(CheckoutDto {
            customer_name: "Guest".to_string(),
            customer_email: "guest@example.com".to_string(),
            customer_phone: None,
            payment_method: PaymentMethodDto::Cash,
            notes: None,
        }),
    )
    .await
    .into_response();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    Ok(())
}

/// Tests adding a package that does not exist.
///
/// Expected: 404
#[tokio::test]
async fn add_unknown_item_is_not_found() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_commerce_tables()
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();
    let state = test_state(db);

    let response = add_cart_item(State(state), session.clone(), Json(add_package_dto(9999)))
        .await
        .into_response();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    Ok(())
}
