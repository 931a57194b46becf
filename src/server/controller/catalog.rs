//! Public, read-only catalog endpoints.
//!
//! Only active records are listed. Inactive or missing records answer 404 so hidden
//! products cannot be told apart from deleted ones.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        destination::{DestinationDto, DestinationQuery},
        hotel::{HotelDto, HotelQuery, RoomDto},
        package::{CatalogQuery, PackageDetailDto, PackageDto},
        tour::TourDto,
        transport::TransportTypeDto,
        visa::{VisaDto, VisaQuery},
    },
    server::{
        error::AppError,
        model::{
            destination::{Destination, DestinationFilter},
            hotel::{Hotel, HotelFilter, Room},
            package::{Package, ProductFilter},
            tour::Tour,
            transport::TransportType,
            visa::Visa,
        },
        service::{
            destination::DestinationService, hotel::HotelService, package::PackageService,
            tour::TourService, transport::TransportTypeService, visa::VisaService,
        },
        state::AppState,
    },
};

/// Tag for grouping catalog endpoints in OpenAPI documentation
pub static CATALOG_TAG: &str = "catalog";

fn product_filter(query: CatalogQuery) -> ProductFilter {
    ProductFilter {
        destination_id: query.destination_id,
        featured: query.featured,
        active_only: true,
    }
}

/// List active destinations, optionally only featured ones.
#[utoipa::path(
    get,
    path = "/api/destinations",
    tag = CATALOG_TAG,
    params(DestinationQuery),
    responses(
        (status = 200, description = "Active destinations", body = Vec<DestinationDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_destinations(
    State(state): State<AppState>,
    Query(query): Query<DestinationQuery>,
) -> Result<impl IntoResponse, AppError> {
    let destinations = DestinationService::new(&state.db)
        .get_all(DestinationFilter {
            featured: query.featured,
            active_only: true,
        })
        .await?;

    let dtos: Vec<DestinationDto> = destinations
        .into_iter()
        .map(Destination::into_dto)
        .collect();

    Ok((StatusCode::OK, Json(dtos)))
}

#[utoipa::path(
    get,
    path = "/api/destinations/{id}",
    tag = CATALOG_TAG,
    params(("id" = i32, Path, description = "Destination ID")),
    responses(
        (status = 200, description = "Destination", body = DestinationDto),
        (status = 404, description = "Destination not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_destination(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let destination = DestinationService::new(&state.db)
        .get_by_id(id, true)
        .await?
        .ok_or_else(|| AppError::NotFound("Destination not found".to_string()))?;

    Ok((StatusCode::OK, Json(destination.into_dto())))
}

/// List active packages, filtered by destination and featured flag.
#[utoipa::path(
    get,
    path = "/api/packages",
    tag = CATALOG_TAG,
    params(CatalogQuery),
    responses(
        (status = 200, description = "Active packages", body = Vec<PackageDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_packages(
    State(state): State<AppState>,
    Query(query): Query<CatalogQuery>,
) -> Result<impl IntoResponse, AppError> {
    let packages = PackageService::new(&state.db)
        .get_all(product_filter(query))
        .await?;

    let dtos: Vec<PackageDto> = packages.into_iter().map(Package::into_dto).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Get a package with its active hotels.
#[utoipa::path(
    get,
    path = "/api/packages/{id}",
    tag = CATALOG_TAG,
    params(("id" = i32, Path, description = "Package ID")),
    responses(
        (status = 200, description = "Package with hotels", body = PackageDetailDto),
        (status = 404, description = "Package not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_package(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let package = PackageService::new(&state.db)
        .get_by_id(id, true)
        .await?
        .ok_or_else(|| AppError::NotFound("Package not found".to_string()))?;

    Ok((StatusCode::OK, Json(package.into_dto())))
}

#[utoipa::path(
    get,
    path = "/api/packages/slug/{slug}",
    tag = CATALOG_TAG,
    params(("slug" = String, Path, description = "Package slug")),
    responses(
        (status = 200, description = "Package with hotels", body = PackageDetailDto),
        (status = 404, description = "Package not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_package_by_slug(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let package = PackageService::new(&state.db)
        .get_by_slug(&slug, true)
        .await?
        .ok_or_else(|| AppError::NotFound("Package not found".to_string()))?;

    Ok((StatusCode::OK, Json(package.into_dto())))
}

#[utoipa::path(
    get,
    path = "/api/tours",
    tag = CATALOG_TAG,
    params(CatalogQuery),
    responses(
        (status = 200, description = "Active tours", body = Vec<TourDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_tours(
    State(state): State<AppState>,
    Query(query): Query<CatalogQuery>,
) -> Result<impl IntoResponse, AppError> {
    let tours = TourService::new(&state.db)
        .get_all(product_filter(query))
        .await?;

    let dtos: Vec<TourDto> = tours.into_iter().map(Tour::into_dto).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

#[utoipa::path(
    get,
    path = "/api/tours/{id}",
    tag = CATALOG_TAG,
    params(("id" = i32, Path, description = "Tour ID")),
    responses(
        (status = 200, description = "Tour", body = TourDto),
        (status = 404, description = "Tour not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_tour(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let tour = TourService::new(&state.db)
        .get_by_id(id, true)
        .await?
        .ok_or_else(|| AppError::NotFound("Tour not found".to_string()))?;

    Ok((StatusCode::OK, Json(tour.into_dto())))
}

/// List active hotels, filtered by destination, city and featured flag.
#[utoipa::path(
    get,
    path = "/api/hotels",
    tag = CATALOG_TAG,
    params(HotelQuery),
    responses(
        (status = 200, description = "Active hotels", body = Vec<HotelDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_hotels(
    State(state): State<AppState>,
    Query(query): Query<HotelQuery>,
) -> Result<impl IntoResponse, AppError> {
    let hotels = HotelService::new(&state.db)
        .get_all(HotelFilter {
            destination_id: query.destination_id,
            city_id: query.city_id,
            featured: query.featured,
            active_only: true,
        })
        .await?;

    let dtos: Vec<HotelDto> = hotels.into_iter().map(Hotel::into_dto).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

#[utoipa::path(
    get,
    path = "/api/hotels/{id}",
    tag = CATALOG_TAG,
    params(("id" = i32, Path, description = "Hotel ID")),
    responses(
        (status = 200, description = "Hotel", body = HotelDto),
        (status = 404, description = "Hotel not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_hotel(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let hotel = HotelService::new(&state.db)
        .get_by_id(id, true)
        .await?
        .ok_or_else(|| AppError::NotFound("Hotel not found".to_string()))?;

    Ok((StatusCode::OK, Json(hotel.into_dto())))
}

/// List the bookable rooms of an active hotel.
#[utoipa::path(
    get,
    path = "/api/hotels/{id}/rooms",
    tag = CATALOG_TAG,
    params(("id" = i32, Path, description = "Hotel ID")),
    responses(
        (status = 200, description = "Available rooms", body = Vec<RoomDto>),
        (status = 404, description = "Hotel not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_hotel_rooms(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let rooms = HotelService::new(&state.db)
        .get_rooms(id, true)
        .await?
        .ok_or_else(|| AppError::NotFound("Hotel not found".to_string()))?;

    let dtos: Vec<RoomDto> = rooms.into_iter().map(Room::into_dto).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

#[utoipa::path(
    get,
    path = "/api/rooms/{id}",
    tag = CATALOG_TAG,
    params(("id" = i32, Path, description = "Room ID")),
    responses(
        (status = 200, description = "Room", body = RoomDto),
        (status = 404, description = "Room not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_room(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let room = HotelService::new(&state.db)
        .get_room(id, true)
        .await?
        .ok_or_else(|| AppError::NotFound("Room not found".to_string()))?;

    Ok((StatusCode::OK, Json(room.into_dto())))
}

#[utoipa::path(
    get,
    path = "/api/visas",
    tag = CATALOG_TAG,
    params(VisaQuery),
    responses(
        (status = 200, description = "Active visa products", body = Vec<VisaDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_visas(
    State(state): State<AppState>,
    Query(query): Query<VisaQuery>,
) -> Result<impl IntoResponse, AppError> {
    let visas = VisaService::new(&state.db)
        .get_all(query.country_id, true)
        .await?;

    let dtos: Vec<VisaDto> = visas.into_iter().map(Visa::into_dto).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

#[utoipa::path(
    get,
    path = "/api/transport-types",
    tag = CATALOG_TAG,
    responses(
        (status = 200, description = "Transport options", body = Vec<TransportTypeDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_transport_types(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let types = TransportTypeService::new(&state.db).get_all().await?;

    let dtos: Vec<TransportTypeDto> = types.into_iter().map(TransportType::into_dto).collect();

    Ok((StatusCode::OK, Json(dtos)))
}
