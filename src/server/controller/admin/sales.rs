//! Back-office views of bookings and orders, plus the dashboard summary.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::{ErrorDto, PaginatedDto, PaginationParams},
        booking::{BookingDto, BookingFilter, UpdateBookingStatusDto},
        dashboard::DashboardDto,
        order::{OrderDto, OrderFilter, UpdateOrderStatusDto},
    },
    server::{
        controller::admin::{not_found, require_admin},
        error::AppError,
        model::{
            booking::Booking,
            order::{Order, UpdateOrderStatusParams},
            pagination::PageParams,
        },
        service::{
            admin::dashboard::DashboardService, booking::BookingService, order::OrderService,
        },
        state::AppState,
    },
};

/// Tag for grouping admin sales endpoints in OpenAPI documentation
pub static ADMIN_SALES_TAG: &str = "admin-sales";

/// Get the back-office dashboard.
///
/// Returns record counts, revenue from orders that are not cancelled, the number of
/// orders in each status and the five most recent orders.
///
/// # Access Control
/// - `Admin` - Only admins can view the dashboard
#[utoipa::path(
    get,
    path = "/api/admin/dashboard",
    tag = ADMIN_SALES_TAG,
    responses(
        (status = 200, description = "Dashboard figures", body = DashboardDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_dashboard(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    require_admin(&state, &session).await?;

    let dashboard = DashboardService::new(&state.db).get().await?;

    Ok((StatusCode::OK, Json(dashboard.into_dto())))
}

#[utoipa::path(
    get,
    path = "/api/admin/bookings",
    tag = ADMIN_SALES_TAG,
    params(PaginationParams, BookingFilter),
    responses(
        (status = 200, description = "Page of bookings, newest first", body = PaginatedDto<BookingDto>),
        (status = 403, description = "Not an admin", body = ErrorDto)
    ),
)]
pub async fn get_bookings(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<PaginationParams>,
    Query(filter): Query<BookingFilter>,
) -> Result<impl IntoResponse, AppError> {
    require_admin(&state, &session).await?;

    let page = BookingService::new(&state.db)
        .get_paginated(filter.status.map(Into::into), PageParams::from_dto(params))
        .await?;

    Ok((StatusCode::OK, Json(page.into_dto(Booking::into_dto))))
}

#[utoipa::path(
    patch,
    path = "/api/admin/bookings/{id}/status",
    tag = ADMIN_SALES_TAG,
    params(("id" = i32, Path, description = "Booking ID")),
    request_body = UpdateBookingStatusDto,
    responses(
        (status = 200, description = "Booking status updated", body = BookingDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Booking not found", body = ErrorDto)
    ),
)]
pub async fn update_booking_status(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateBookingStatusDto>,
) -> Result<impl IntoResponse, AppError> {
    require_admin(&state, &session).await?;

    let booking = BookingService::new(&state.db)
        .update_status(id, payload.status.into())
        .await?
        .ok_or_else(|| not_found("Booking"))?;

    Ok((StatusCode::OK, Json(booking.into_dto())))
}

#[utoipa::path(
    get,
    path = "/api/admin/orders",
    tag = ADMIN_SALES_TAG,
    params(PaginationParams, OrderFilter),
    responses(
        (status = 200, description = "Page of orders, newest first", body = PaginatedDto<OrderDto>),
        (status = 403, description = "Not an admin", body = ErrorDto)
    ),
)]
pub async fn get_orders(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<PaginationParams>,
    Query(filter): Query<OrderFilter>,
) -> Result<impl IntoResponse, AppError> {
    require_admin(&state, &session).await?;

    let page = OrderService::new(&state.db)
        .get_paginated(filter.status.map(Into::into), PageParams::from_dto(params))
        .await?;

    Ok((StatusCode::OK, Json(page.into_dto(Order::into_dto))))
}

#[utoipa::path(
    get,
    path = "/api/admin/orders/{id}",
    tag = ADMIN_SALES_TAG,
    params(("id" = i32, Path, description = "Order ID")),
    responses(
        (status = 200, description = "Order with lines", body = OrderDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Order not found", body = ErrorDto)
    ),
)]
pub async fn get_order(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    require_admin(&state, &session).await?;

    let order = OrderService::new(&state.db)
        .get_by_id(id)
        .await?
        .ok_or_else(|| not_found("Order"))?;

    Ok((StatusCode::OK, Json(order.into_dto())))
}

/// Update an order's fulfilment status, payment status, or both.
///
/// # Returns
/// - `200 OK` - Order updated
/// - `400 Bad Request` - Neither status given
/// - `404 Not Found` - Order not found
#[utoipa::path(
    patch,
    path = "/api/admin/orders/{id}/status",
    tag = ADMIN_SALES_TAG,
    params(("id" = i32, Path, description = "Order ID")),
    request_body = UpdateOrderStatusDto,
    responses(
        (status = 200, description = "Order updated", body = OrderDto),
        (status = 400, description = "No status given", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Order not found", body = ErrorDto)
    ),
)]
pub async fn update_order_status(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateOrderStatusDto>,
) -> Result<impl IntoResponse, AppError> {
    require_admin(&state, &session).await?;

    let order = OrderService::new(&state.db)
        .update_status(id, UpdateOrderStatusParams::from_dto(payload))
        .await?
        .ok_or_else(|| not_found("Order"))?;

    Ok((StatusCode::OK, Json(order.into_dto())))
}
