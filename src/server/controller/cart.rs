use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;
use validator::Validate;

use crate::{
    model::{
        api::ErrorDto,
        cart::{AddCartItemDto, CartDto, CartItemDto, UpdateCartItemDto},
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::cart::{AddCartItemParams, Cart},
        service::cart::CartService,
        state::AppState,
    },
};

/// Tag for grouping cart endpoints in OpenAPI documentation
pub static CART_TAG: &str = "cart";

/// Get the caller's cart.
///
/// Visitors without a cart yet receive an empty one; no guest token is created.
#[utoipa::path(
    get,
    path = "/api/cart",
    tag = CART_TAG,
    responses(
        (status = 200, description = "Cart lines with subtotal", body = CartDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_cart(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let cart = match AuthGuard::new(&state.db, &session).cart_owner(false).await? {
        Some(owner) => CartService::new(&state.db).get_cart(&owner).await?,
        None => Cart::empty(),
    };

    Ok((StatusCode::OK, Json(cart.into_dto())))
}

/// Add an item to the cart.
///
/// The price is computed on the server from the current catalog and stored with the line.
/// Anonymous visitors get a guest cart bound to their session.
///
/// # Returns
/// - `201 Created` - Line added with its pricing snapshot
/// - `400 Bad Request` - Invalid counts or dates, or options the item does not support
/// - `404 Not Found` - Item missing, inactive or unavailable
/// - `500 Internal Server Error` - Database or session error
#[utoipa::path(
    post,
    path = "/api/cart",
    tag = CART_TAG,
    request_body = AddCartItemDto,
    responses(
        (status = 201, description = "Line added", body = CartItemDto),
        (status = 400, description = "Invalid cart item", body = ErrorDto),
        (status = 404, description = "Item not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_cart_item(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<AddCartItemDto>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let Some(owner) = AuthGuard::new(&state.db, &session).cart_owner(true).await? else {
        return Err(AppError::InternalError(
            "Cart owner missing after guest token creation".to_string(),
        ));
    };

    let item = CartService::new(&state.db)
        .add_item(owner, AddCartItemParams::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(item.into_dto())))
}

#[utoipa::path(
    patch,
    path = "/api/cart/{id}",
    tag = CART_TAG,
    params(("id" = i32, Path, description = "Cart line ID")),
    request_body = UpdateCartItemDto,
    responses(
        (status = 200, description = "Line updated", body = CartItemDto),
        (status = 400, description = "Invalid quantity", body = ErrorDto),
        (status = 404, description = "Cart line not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_cart_item(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateCartItemDto>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let not_found = || AppError::NotFound("Cart item not found".to_string());

    let owner = AuthGuard::new(&state.db, &session)
        .cart_owner(false)
        .await?
        .ok_or_else(not_found)?;

    let item = CartService::new(&state.db)
        .update_quantity(&owner, id, payload.quantity)
        .await?
        .ok_or_else(not_found)?;

    Ok((StatusCode::OK, Json(item.into_dto())))
}

#[utoipa::path(
    delete,
    path = "/api/cart/{id}",
    tag = CART_TAG,
    params(("id" = i32, Path, description = "Cart line ID")),
    responses(
        (status = 204, description = "Line removed"),
        (status = 404, description = "Cart line not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn remove_cart_item(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let owner = AuthGuard::new(&state.db, &session).cart_owner(false).await?;

    let removed = match owner {
        Some(owner) => CartService::new(&state.db).remove_item(&owner, id).await?,
        None => false,
    };

    if !removed {
        return Err(AppError::NotFound("Cart item not found".to_string()));
    }

    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    delete,
    path = "/api/cart",
    tag = CART_TAG,
    responses(
        (status = 204, description = "Cart cleared"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn clear_cart(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    if let Some(owner) = AuthGuard::new(&state.db, &session).cart_owner(false).await? {
        CartService::new(&state.db).clear(&owner).await?;
    }

    Ok(StatusCode::NO_CONTENT)
}
