use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tower_sessions::Session;
use validator::Validate;

use crate::{
    model::{
        api::ErrorDto,
        booking::{BookingDto, CreateBookingDto},
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::booking::{Booking, CreateBookingParams},
        service::booking::BookingService,
        state::AppState,
    },
};

/// Tag for grouping booking endpoints in OpenAPI documentation
pub static BOOKING_TAG: &str = "bookings";

/// Book a package directly, outside the cart.
///
/// # Access Control
/// - Any logged-in user
///
/// # Returns
/// - `201 Created` - Pending booking with its total price
/// - `400 Bad Request` - Invalid traveller counts or travel date in the past
/// - `401 Unauthorized` - Not logged in
/// - `404 Not Found` - Package missing or inactive
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/bookings",
    tag = BOOKING_TAG,
    request_body = CreateBookingDto,
    responses(
        (status = 201, description = "Booking created", body = BookingDto),
        (status = 400, description = "Invalid booking data", body = ErrorDto),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 404, description = "Package not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_booking(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<CreateBookingDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    payload.validate()?;

    let booking = BookingService::new(&state.db)
        .create(user.id, CreateBookingParams::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(booking.into_dto())))
}

#[utoipa::path(
    get,
    path = "/api/bookings",
    tag = BOOKING_TAG,
    responses(
        (status = 200, description = "User's bookings, newest first", body = Vec<BookingDto>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_bookings(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let bookings = BookingService::new(&state.db).get_for_user(user.id).await?;

    let dtos: Vec<BookingDto> = bookings.into_iter().map(Booking::into_dto).collect();

    Ok((StatusCode::OK, Json(dtos)))
}
