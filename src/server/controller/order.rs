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
        order::{CheckoutDto, OrderDto},
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::order::{CheckoutParams, Order},
        service::order::OrderService,
        state::AppState,
    },
};

/// Tag for grouping order endpoints in OpenAPI documentation
pub static ORDER_TAG: &str = "orders";

/// Convert the caller's cart into an order.
///
/// Runs in a single transaction: the order, its lines and the emptied cart are committed
/// together or not at all. Guests may check out; their order has no user.
///
/// # Returns
/// - `201 Created` - Order placed, cart emptied
/// - `400 Bad Request` - Invalid customer details or empty cart
/// - `500 Internal Server Error` - Database error, nothing committed
#[utoipa::path(
    post,
    path = "/api/orders/checkout",
    tag = ORDER_TAG,
    request_body = CheckoutDto,
    responses(
        (status = 201, description = "Order placed", body = OrderDto),
        (status = 400, description = "Invalid checkout data or empty cart", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn checkout(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CheckoutDto>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let owner = AuthGuard::new(&state.db, &session)
        .cart_owner(false)
        .await?
        .ok_or_else(|| AppError::BadRequest("Your cart is empty".to_string()))?;

    let order = OrderService::new(&state.db)
        .checkout(&owner, CheckoutParams::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(order.into_dto())))
}

/// List the logged-in user's orders, newest first.
#[utoipa::path(
    get,
    path = "/api/orders",
    tag = ORDER_TAG,
    responses(
        (status = 200, description = "User's orders", body = Vec<OrderDto>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_orders(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let orders = OrderService::new(&state.db).get_for_user(user.id).await?;

    let dtos: Vec<OrderDto> = orders.into_iter().map(Order::into_dto).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Get an order by its number.
///
/// Only the owner and admins can see an order; everyone else gets 404.
#[utoipa::path(
    get,
    path = "/api/orders/{order_number}",
    tag = ORDER_TAG,
    params(("order_number" = String, Path, description = "Order number, e.g. ORD-20250101-AB12CD")),
    responses(
        (status = 200, description = "Order with lines", body = OrderDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Order not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_order(
    State(state): State<AppState>,
    session: Session,
    Path(order_number): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let order = OrderService::new(&state.db)
        .get_by_number(&order_number, &user)
        .await?
        .ok_or_else(|| AppError::NotFound("Order not found".to_string()))?;

    Ok((StatusCode::OK, Json(order.into_dto())))
}
