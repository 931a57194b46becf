//! Back-office management of catalog products.
//!
//! Deleting a destination, package, tour, hotel or visa deactivates it so existing cart
//! lines, orders and bookings keep their references. Rooms and transport types are
//! removed outright.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;
use validator::Validate;

use crate::{
    model::{
        api::{ErrorDto, PaginatedDto, PaginationParams},
        destination::{DestinationDto, SaveDestinationDto},
        hotel::{HotelDto, RoomDto, SaveHotelDto, SaveRoomDto},
        package::{PackageDetailDto, PackageDto, SavePackageDto},
        tour::{SaveTourDto, TourDto},
        transport::{SaveTransportTypeDto, TransportTypeDto},
        visa::{SaveVisaDto, VisaDto},
    },
    server::{
        controller::admin::{deleted, not_found, require_admin},
        error::AppError,
        model::{
            destination::{Destination, SaveDestinationParams},
            hotel::{Hotel, Room, SaveHotelParams, SaveRoomParams},
            package::{Package, SavePackageParams},
            pagination::PageParams,
            tour::{SaveTourParams, Tour},
            transport::{SaveTransportTypeParams, TransportType},
            visa::{SaveVisaParams, Visa},
        },
        service::{
            destination::DestinationService, hotel::HotelService, package::PackageService,
            tour::TourService, transport::TransportTypeService, visa::VisaService,
        },
        state::AppState,
    },
};

/// Tag for grouping admin catalog endpoints in OpenAPI documentation
pub static ADMIN_CATALOG_TAG: &str = "admin-catalog";

// Destinations

/// List all destinations, including inactive ones.
///
/// # Access Control
/// - `Admin` - Only admins can manage the catalog
///
/// # Returns
/// - `200 OK` - Page of destinations
/// - `401 Unauthorized` - Not logged in
/// - `403 Forbidden` - Not an admin
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/admin/destinations",
    tag = ADMIN_CATALOG_TAG,
    params(PaginationParams),
    responses(
        (status = 200, description = "Page of destinations", body = PaginatedDto<DestinationDto>),
        (status = 401, description = "Not logged in", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_destinations(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<PaginationParams>,
) -> Result<impl IntoResponse, AppError> {
    require_admin(&state, &session).await?;

    let page = DestinationService::new(&state.db)
        .get_paginated(PageParams::from_dto(params))
        .await?;

    Ok((StatusCode::OK, Json(page.into_dto(Destination::into_dto))))
}

#[utoipa::path(
    get,
    path = "/api/admin/destinations/{id}",
    tag = ADMIN_CATALOG_TAG,
    params(("id" = i32, Path, description = "Destination ID")),
    responses(
        (status = 200, description = "Destination", body = DestinationDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Destination not found", body = ErrorDto)
    ),
)]
pub async fn get_destination(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    require_admin(&state, &session).await?;

    let destination = DestinationService::new(&state.db)
        .get_by_id(id, false)
        .await?
        .ok_or_else(|| not_found("Destination"))?;

    Ok((StatusCode::OK, Json(destination.into_dto())))
}

/// Create a destination.
///
/// # Returns
/// - `201 Created` - Destination created
/// - `400 Bad Request` - Invalid data or unknown country
/// - `409 Conflict` - Slug already in use
#[utoipa::path(
    post,
    path = "/api/admin/destinations",
    tag = ADMIN_CATALOG_TAG,
    request_body = SaveDestinationDto,
    responses(
        (status = 201, description = "Destination created", body = DestinationDto),
        (status = 400, description = "Invalid destination data", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 409, description = "Slug already in use", body = ErrorDto)
    ),
)]
pub async fn create_destination(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<SaveDestinationDto>,
) -> Result<impl IntoResponse, AppError> {
    require_admin(&state, &session).await?;
    payload.validate()?;

    let destination = DestinationService::new(&state.db)
        .create(SaveDestinationParams::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(destination.into_dto())))
}

#[utoipa::path(
    put,
    path = "/api/admin/destinations/{id}",
    tag = ADMIN_CATALOG_TAG,
    params(("id" = i32, Path, description = "Destination ID")),
    request_body = SaveDestinationDto,
    responses(
        (status = 200, description = "Destination updated", body = DestinationDto),
        (status = 400, description = "Invalid destination data", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Destination not found", body = ErrorDto),
        (status = 409, description = "Slug already in use", body = ErrorDto)
    ),
)]
pub async fn update_destination(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<SaveDestinationDto>,
) -> Result<impl IntoResponse, AppError> {
    require_admin(&state, &session).await?;
    payload.validate()?;

    let destination = DestinationService::new(&state.db)
        .update(id, SaveDestinationParams::from_dto(payload))
        .await?
        .ok_or_else(|| not_found("Destination"))?;

    Ok((StatusCode::OK, Json(destination.into_dto())))
}

#[utoipa::path(
    delete,
    path = "/api/admin/destinations/{id}",
    tag = ADMIN_CATALOG_TAG,
    params(("id" = i32, Path, description = "Destination ID")),
    responses(
        (status = 204, description = "Destination deactivated"),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Destination not found", body = ErrorDto)
    ),
)]
pub async fn delete_destination(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    require_admin(&state, &session).await?;

    let removed = DestinationService::new(&state.db).delete(id).await?;

    deleted(removed, "Destination")
}

// Packages

#[utoipa::path(
    get,
    path = "/api/admin/packages",
    tag = ADMIN_CATALOG_TAG,
    params(PaginationParams),
    responses(
        (status = 200, description = "Page of packages", body = PaginatedDto<PackageDto>),
        (status = 403, description = "Not an admin", body = ErrorDto)
    ),
)]
pub async fn get_packages(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<PaginationParams>,
) -> Result<impl IntoResponse, AppError> {
    require_admin(&state, &session).await?;

    let page = PackageService::new(&state.db)
        .get_paginated(PageParams::from_dto(params))
        .await?;

    Ok((StatusCode::OK, Json(page.into_dto(Package::into_dto))))
}

#[utoipa::path(
    get,
    path = "/api/admin/packages/{id}",
    tag = ADMIN_CATALOG_TAG,
    params(("id" = i32, Path, description = "Package ID")),
    responses(
        (status = 200, description = "Package with all linked hotels", body = PackageDetailDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Package not found", body = ErrorDto)
    ),
)]
pub async fn get_package(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    require_admin(&state, &session).await?;

    let package = PackageService::new(&state.db)
        .get_by_id(id, false)
        .await?
        .ok_or_else(|| not_found("Package"))?;

    Ok((StatusCode::OK, Json(package.into_dto())))
}

/// Create a package and link its hotels.
///
/// The slug is derived from the title when omitted.
///
/// # Returns
/// - `201 Created` - Package created with linked hotels
/// - `400 Bad Request` - Invalid data, unknown destination or hotel, discount above price
/// - `409 Conflict` - Slug already in use
#[utoipa::path(
    post,
    path = "/api/admin/packages",
    tag = ADMIN_CATALOG_TAG,
    request_body = SavePackageDto,
    responses(
        (status = 201, description = "Package created", body = PackageDetailDto),
        (status = 400, description = "Invalid package data", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 409, description = "Slug already in use", body = ErrorDto)
    ),
)]
pub async fn create_package(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<SavePackageDto>,
) -> Result<impl IntoResponse, AppError> {
    require_admin(&state, &session).await?;
    payload.validate()?;

    let package = PackageService::new(&state.db)
        .create(SavePackageParams::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(package.into_dto())))
}

/// Update a package, replacing its hotel links with `hotel_ids`.
#[utoipa::path(
    put,
    path = "/api/admin/packages/{id}",
    tag = ADMIN_CATALOG_TAG,
    params(("id" = i32, Path, description = "Package ID")),
    request_body = SavePackageDto,
    responses(
        (status = 200, description = "Package updated", body = PackageDetailDto),
        (status = 400, description = "Invalid package data", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Package not found", body = ErrorDto),
        (status = 409, description = "Slug already in use", body = ErrorDto)
    ),
)]
pub async fn update_package(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<SavePackageDto>,
) -> Result<impl IntoResponse, AppError> {
    require_admin(&state, &session).await?;
    payload.validate()?;

    let package = PackageService::new(&state.db)
        .update(id, SavePackageParams::from_dto(payload))
        .await?
        .ok_or_else(|| not_found("Package"))?;

    Ok((StatusCode::OK, Json(package.into_dto())))
}

#[utoipa::path(
    delete,
    path = "/api/admin/packages/{id}",
    tag = ADMIN_CATALOG_TAG,
    params(("id" = i32, Path, description = "Package ID")),
    responses(
        (status = 204, description = "Package deactivated"),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Package not found", body = ErrorDto)
    ),
)]
pub async fn delete_package(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    require_admin(&state, &session).await?;

    let removed = PackageService::new(&state.db).delete(id).await?;

    deleted(removed, "Package")
}

// Tours

#[utoipa::path(
    get,
    path = "/api/admin/tours",
    tag = ADMIN_CATALOG_TAG,
    params(PaginationParams),
    responses(
        (status = 200, description = "Page of tours", body = PaginatedDto<TourDto>),
        (status = 403, description = "Not an admin", body = ErrorDto)
    ),
)]
pub async fn get_tours(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<PaginationParams>,
) -> Result<impl IntoResponse, AppError> {
    require_admin(&state, &session).await?;

    let page = TourService::new(&state.db)
        .get_paginated(PageParams::from_dto(params))
        .await?;

    Ok((StatusCode::OK, Json(page.into_dto(Tour::into_dto))))
}

#[utoipa::path(
    get,
    path = "/api/admin/tours/{id}",
    tag = ADMIN_CATALOG_TAG,
    params(("id" = i32, Path, description = "Tour ID")),
    responses(
        (status = 200, description = "Tour", body = TourDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Tour not found", body = ErrorDto)
    ),
)]
pub async fn get_tour(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    require_admin(&state, &session).await?;

    let tour = TourService::new(&state.db)
        .get_by_id(id, false)
        .await?
        .ok_or_else(|| not_found("Tour"))?;

    Ok((StatusCode::OK, Json(tour.into_dto())))
}

#[utoipa::path(
    post,
    path = "/api/admin/tours",
    tag = ADMIN_CATALOG_TAG,
    request_body = SaveTourDto,
    responses(
        (status = 201, description = "Tour created", body = TourDto),
        (status = 400, description = "Invalid tour data", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 409, description = "Slug already in use", body = ErrorDto)
    ),
)]
pub async fn create_tour(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<SaveTourDto>,
) -> Result<impl IntoResponse, AppError> {
    require_admin(&state, &session).await?;
    payload.validate()?;

    let tour = TourService::new(&state.db)
        .create(SaveTourParams::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(tour.into_dto())))
}

#[utoipa::path(
    put,
    path = "/api/admin/tours/{id}",
    tag = ADMIN_CATALOG_TAG,
    params(("id" = i32, Path, description = "Tour ID")),
    request_body = SaveTourDto,
    responses(
        (status = 200, description = "Tour updated", body = TourDto),
        (status = 400, description = "Invalid tour data", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Tour not found", body = ErrorDto),
        (status = 409, description = "Slug already in use", body = ErrorDto)
    ),
)]
pub async fn update_tour(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<SaveTourDto>,
) -> Result<impl IntoResponse, AppError> {
    require_admin(&state, &session).await?;
    payload.validate()?;

    let tour = TourService::new(&state.db)
        .update(id, SaveTourParams::from_dto(payload))
        .await?
        .ok_or_else(|| not_found("Tour"))?;

    Ok((StatusCode::OK, Json(tour.into_dto())))
}

#[utoipa::path(
    delete,
    path = "/api/admin/tours/{id}",
    tag = ADMIN_CATALOG_TAG,
    params(("id" = i32, Path, description = "Tour ID")),
    responses(
        (status = 204, description = "Tour deactivated"),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Tour not found", body = ErrorDto)
    ),
)]
pub async fn delete_tour(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    require_admin(&state, &session).await?;

    let removed = TourService::new(&state.db).delete(id).await?;

    deleted(removed, "Tour")
}

// Hotels and rooms

#[utoipa::path(
    get,
    path = "/api/admin/hotels",
    tag = ADMIN_CATALOG_TAG,
    params(PaginationParams),
    responses(
        (status = 200, description = "Page of hotels", body = PaginatedDto<HotelDto>),
        (status = 403, description = "Not an admin", body = ErrorDto)
    ),
)]
pub async fn get_hotels(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<PaginationParams>,
) -> Result<impl IntoResponse, AppError> {
    require_admin(&state, &session).await?;

    let page = HotelService::new(&state.db)
        .get_paginated(PageParams::from_dto(params))
        .await?;

    Ok((StatusCode::OK, Json(page.into_dto(Hotel::into_dto))))
}

#[utoipa::path(
    get,
    path = "/api/admin/hotels/{id}",
    tag = ADMIN_CATALOG_TAG,
    params(("id" = i32, Path, description = "Hotel ID")),
    responses(
        (status = 200, description = "Hotel", body = HotelDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Hotel not found", body = ErrorDto)
    ),
)]
pub async fn get_hotel(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    require_admin(&state, &session).await?;

    let hotel = HotelService::new(&state.db)
        .get_by_id(id, false)
        .await?
        .ok_or_else(|| not_found("Hotel"))?;

    Ok((StatusCode::OK, Json(hotel.into_dto())))
}

#[utoipa::path(
    post,
    path = "/api/admin/hotels",
    tag = ADMIN_CATALOG_TAG,
    request_body = SaveHotelDto,
    responses(
        (status = 201, description = "Hotel created", body = HotelDto),
        (status = 400, description = "Invalid hotel data", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto)
    ),
)]
pub async fn create_hotel(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<SaveHotelDto>,
) -> Result<impl IntoResponse, AppError> {
    require_admin(&state, &session).await?;
    payload.validate()?;

    let hotel = HotelService::new(&state.db)
        .create(SaveHotelParams::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(hotel.into_dto())))
}

#[utoipa::path(
    put,
    path = "/api/admin/hotels/{id}",
    tag = ADMIN_CATALOG_TAG,
    params(("id" = i32, Path, description = "Hotel ID")),
    request_body = SaveHotelDto,
    responses(
        (status = 200, description = "Hotel updated", body = HotelDto),
        (status = 400, description = "Invalid hotel data", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Hotel not found", body = ErrorDto)
    ),
)]
pub async fn update_hotel(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<SaveHotelDto>,
) -> Result<impl IntoResponse, AppError> {
    require_admin(&state, &session).await?;
    payload.validate()?;

    let hotel = HotelService::new(&state.db)
        .update(id, SaveHotelParams::from_dto(payload))
        .await?
        .ok_or_else(|| not_found("Hotel"))?;

    Ok((StatusCode::OK, Json(hotel.into_dto())))
}

#[utoipa::path(
    delete,
    path = "/api/admin/hotels/{id}",
    tag = ADMIN_CATALOG_TAG,
    params(("id" = i32, Path, description = "Hotel ID")),
    responses(
        (status = 204, description = "Hotel deactivated"),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Hotel not found", body = ErrorDto)
    ),
)]
pub async fn delete_hotel(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    require_admin(&state, &session).await?;

    let removed = HotelService::new(&state.db).delete(id).await?;

    deleted(removed, "Hotel")
}

/// List every room of a hotel, including unavailable ones.
#[utoipa::path(
    get,
    path = "/api/admin/hotels/{id}/rooms",
    tag = ADMIN_CATALOG_TAG,
    params(("id" = i32, Path, description = "Hotel ID")),
    responses(
        (status = 200, description = "Rooms of the hotel", body = Vec<RoomDto>),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Hotel not found", body = ErrorDto)
    ),
)]
pub async fn get_hotel_rooms(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    require_admin(&state, &session).await?;

    let rooms = HotelService::new(&state.db)
        .get_rooms(id, false)
        .await?
        .ok_or_else(|| not_found("Hotel"))?;

    let dtos: Vec<RoomDto> = rooms.into_iter().map(Room::into_dto).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

#[utoipa::path(
    post,
    path = "/api/admin/hotels/{id}/rooms",
    tag = ADMIN_CATALOG_TAG,
    params(("id" = i32, Path, description = "Hotel ID")),
    request_body = SaveRoomDto,
    responses(
        (status = 201, description = "Room created", body = RoomDto),
        (status = 400, description = "Invalid room data", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Hotel not found", body = ErrorDto)
    ),
)]
pub async fn create_room(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<SaveRoomDto>,
) -> Result<impl IntoResponse, AppError> {
    require_admin(&state, &session).await?;
    payload.validate()?;

    let room = HotelService::new(&state.db)
        .create_room(id, SaveRoomParams::from_dto(payload))
        .await?
        .ok_or_else(|| not_found("Hotel"))?;

    Ok((StatusCode::CREATED, Json(room.into_dto())))
}

#[utoipa::path(
    put,
    path = "/api/admin/rooms/{id}",
    tag = ADMIN_CATALOG_TAG,
    params(("id" = i32, Path, description = "Room ID")),
    request_body = SaveRoomDto,
    responses(
        (status = 200, description = "Room updated", body = RoomDto),
        (status = 400, description = "Invalid room data", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Room not found", body = ErrorDto)
    ),
)]
pub async fn update_room(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<SaveRoomDto>,
) -> Result<impl IntoResponse, AppError> {
    require_admin(&state, &session).await?;
    payload.validate()?;

    let room = HotelService::new(&state.db)
        .update_room(id, SaveRoomParams::from_dto(payload))
        .await?
        .ok_or_else(|| not_found("Room"))?;

    Ok((StatusCode::OK, Json(room.into_dto())))
}

#[utoipa::path(
    delete,
    path = "/api/admin/rooms/{id}",
    tag = ADMIN_CATALOG_TAG,
    params(("id" = i32, Path, description = "Room ID")),
    responses(
        (status = 204, description = "Room deleted"),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Room not found", body = ErrorDto)
    ),
)]
pub async fn delete_room(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    require_admin(&state, &session).await?;

    let removed = HotelService::new(&state.db).delete_room(id).await?;

    deleted(removed, "Room")
}

// Visas

#[utoipa::path(
    get,
    path = "/api/admin/visas",
    tag = ADMIN_CATALOG_TAG,
    params(PaginationParams),
    responses(
        (status = 200, description = "Page of visa products", body = PaginatedDto<VisaDto>),
        (status = 403, description = "Not an admin", body = ErrorDto)
    ),
)]
pub async fn get_visas(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<PaginationParams>,
) -> Result<impl IntoResponse, AppError> {
    require_admin(&state, &session).await?;

    let page = VisaService::new(&state.db)
        .get_paginated(PageParams::from_dto(params))
        .await?;

    Ok((StatusCode::OK, Json(page.into_dto(Visa::into_dto))))
}

#[utoipa::path(
    get,
    path = "/api/admin/visas/{id}",
    tag = ADMIN_CATALOG_TAG,
    params(("id" = i32, Path, description = "Visa ID")),
    responses(
        (status = 200, description = "Visa product", body = VisaDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Visa not found", body = ErrorDto)
    ),
)]
pub async fn get_visa(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    require_admin(&state, &session).await?;

    let visa = VisaService::new(&state.db)
        .get_by_id(id)
        .await?
        .ok_or_else(|| not_found("Visa"))?;

    Ok((StatusCode::OK, Json(visa.into_dto())))
}

#[utoipa::path(
    post,
    path = "/api/admin/visas",
    tag = ADMIN_CATALOG_TAG,
    request_body = SaveVisaDto,
    responses(
        (status = 201, description = "Visa product created", body = VisaDto),
        (status = 400, description = "Invalid visa data", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto)
    ),
)]
pub async fn create_visa(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<SaveVisaDto>,
) -> Result<impl IntoResponse, AppError> {
    require_admin(&state, &session).await?;
    payload.validate()?;

    let visa = VisaService::new(&state.db)
        .create(SaveVisaParams::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(visa.into_dto())))
}

#[utoipa::path(
    put,
    path = "/api/admin/visas/{id}",
    tag = ADMIN_CATALOG_TAG,
    params(("id" = i32, Path, description = "Visa ID")),
    request_body = SaveVisaDto,
    responses(
        (status = 200, description = "Visa product updated", body = VisaDto),
        (status = 400, description = "Invalid visa data", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Visa not found", body = ErrorDto)
    ),
)]
pub async fn update_visa(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<SaveVisaDto>,
) -> Result<impl IntoResponse, AppError> {
    require_admin(&state, &session).await?;
    payload.validate()?;

    let visa = VisaService::new(&state.db)
        .update(id, SaveVisaParams::from_dto(payload))
        .await?
        .ok_or_else(|| not_found("Visa"))?;

    Ok((StatusCode::OK, Json(visa.into_dto())))
}

#[utoipa::path(
    delete,
    path = "/api/admin/visas/{id}",
    tag = ADMIN_CATALOG_TAG,
    params(("id" = i32, Path, description = "Visa ID")),
    responses(
        (status = 204, description = "Visa product deactivated"),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Visa not found", body = ErrorDto)
    ),
)]
pub async fn delete_visa(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    require_admin(&state, &session).await?;

    let removed = VisaService::new(&state.db).delete(id).await?;

    deleted(removed, "Visa")
}

// Transport types

#[utoipa::path(
    get,
    path = "/api/admin/transport-types",
    tag = ADMIN_CATALOG_TAG,
    responses(
        (status = 200, description = "All transport options", body = Vec<TransportTypeDto>),
        (status = 403, description = "Not an admin", body = ErrorDto)
    ),
)]
pub async fn get_transport_types(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    require_admin(&state, &session).await?;

    let types = TransportTypeService::new(&state.db).get_all().await?;

    let dtos: Vec<TransportTypeDto> = types.into_iter().map(TransportType::into_dto).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Create a transport option. `multiplier_percent` of 125 raises package and tour prices by 25%.
#[utoipa::path(
    post,
    path = "/api/admin/transport-types",
    tag = ADMIN_CATALOG_TAG,
    request_body = SaveTransportTypeDto,
    responses(
        (status = 201, description = "Transport option created", body = TransportTypeDto),
        (status = 400, description = "Invalid transport option", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto)
    ),
)]
pub async fn create_transport_type(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<SaveTransportTypeDto>,
) -> Result<impl IntoResponse, AppError> {
    require_admin(&state, &session).await?;
    payload.validate()?;

    let transport = TransportTypeService::new(&state.db)
        .create(SaveTransportTypeParams::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(transport.into_dto())))
}

#[utoipa::path(
    put,
    path = "/api/admin/transport-types/{id}",
    tag = ADMIN_CATALOG_TAG,
    params(("id" = i32, Path, description = "Transport type ID")),
    request_body = SaveTransportTypeDto,
    responses(
        (status = 200, description = "Transport option updated", body = TransportTypeDto),
        (status = 400, description = "Invalid transport option", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Transport type not found", body = ErrorDto)
    ),
)]
pub async fn update_transport_type(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<SaveTransportTypeDto>,
) -> Result<impl IntoResponse, AppError> {
    require_admin(&state, &session).await?;
    payload.validate()?;

    let transport = TransportTypeService::new(&state.db)
        .update(id, SaveTransportTypeParams::from_dto(payload))
        .await?
        .ok_or_else(|| not_found("Transport type"))?;

    Ok((StatusCode::OK, Json(transport.into_dto())))
}

#[utoipa::path(
    delete,
    path = "/api/admin/transport-types/{id}",
    tag = ADMIN_CATALOG_TAG,
    params(("id" = i32, Path, description = "Transport type ID")),
    responses(
        (status = 204, description = "Transport option deleted"),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Transport type not found", body = ErrorDto)
    ),
)]
pub async fn delete_transport_type(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    require_admin(&state, &session).await?;

    let removed = TransportTypeService::new(&state.db).delete(id).await?;

    deleted(removed, "Transport type")
}
