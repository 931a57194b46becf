//! Back-office management of countries, cities and airports.
//!
//! These lists are small reference data and are returned whole rather than paginated.

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
        api::ErrorDto,
        geo::{
            AirportDto, AirportQuery, CityDto, CityQuery, CountryDto, SaveAirportDto,
            SaveCityDto, SaveCountryDto,
        },
    },
    server::{
        controller::admin::{deleted, not_found, require_admin},
        error::AppError,
        model::geo::{
            Airport, City, Country, SaveAirportParams, SaveCityParams, SaveCountryParams,
        },
        service::geo::GeoService,
        state::AppState,
    },
};

/// Tag for grouping admin geography endpoints in OpenAPI documentation
pub static ADMIN_GEO_TAG: &str = "admin-geo";

#[utoipa::path(
    get,
    path = "/api/admin/countries",
    tag = ADMIN_GEO_TAG,
    responses(
        (status = 200, description = "All countries", body = Vec<CountryDto>),
        (status = 403, description = "Not an admin", body = ErrorDto)
    ),
)]
pub async fn get_countries(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    require_admin(&state, &session).await?;

    let countries = GeoService::new(&state.db).get_countries().await?;

    let dtos: Vec<CountryDto> = countries.into_iter().map(Country::into_dto).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

/// Create a country. Names and ISO codes are unique.
#[utoipa::path(
    post,
    path = "/api/admin/countries",
    tag = ADMIN_GEO_TAG,
    request_body = SaveCountryDto,
    responses(
        (status = 201, description = "Country created", body = CountryDto),
        (status = 400, description = "Invalid country data", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 409, description = "Name or code already in use", body = ErrorDto)
    ),
)]
pub async fn create_country(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<SaveCountryDto>,
) -> Result<impl IntoResponse, AppError> {
    require_admin(&state, &session).await?;
    payload.validate()?;

    let country = GeoService::new(&state.db)
        .create_country(SaveCountryParams::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(country.into_dto())))
}

#[utoipa::path(
    put,
    path = "/api/admin/countries/{id}",
    tag = ADMIN_GEO_TAG,
    params(("id" = i32, Path, description = "Country ID")),
    request_body = SaveCountryDto,
    responses(
        (status = 200, description = "Country updated", body = CountryDto),
        (status = 400, description = "Invalid country data", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Country not found", body = ErrorDto),
        (status = 409, description = "Name or code already in use", body = ErrorDto)
    ),
)]
pub async fn update_country(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<SaveCountryDto>,
) -> Result<impl IntoResponse, AppError> {
    require_admin(&state, &session).await?;
    payload.validate()?;

    let country = GeoService::new(&state.db)
        .update_country(id, SaveCountryParams::from_dto(payload))
        .await?
        .ok_or_else(|| not_found("Country"))?;

    Ok((StatusCode::OK, Json(country.into_dto())))
}

#[utoipa::path(
    delete,
    path = "/api/admin/countries/{id}",
    tag = ADMIN_GEO_TAG,
    params(("id" = i32, Path, description = "Country ID")),
    responses(
        (status = 204, description = "Country deleted"),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Country not found", body = ErrorDto)
    ),
)]
pub async fn delete_country(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    require_admin(&state, &session).await?;

    let removed = GeoService::new(&state.db).delete_country(id).await?;

    deleted(removed, "Country")
}

#[utoipa::path(
    get,
    path = "/api/admin/cities",
    tag = ADMIN_GEO_TAG,
    params(CityQuery),
    responses(
        (status = 200, description = "Cities, optionally of one country", body = Vec<CityDto>),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Country not found", body = ErrorDto)
    ),
)]
pub async fn get_cities(
    State(state): State<AppState>,
    session: Session,
    Query(query): Query<CityQuery>,
) -> Result<impl IntoResponse, AppError> {
    require_admin(&state, &session).await?;

    let cities = GeoService::new(&state.db)
        .get_cities(query.country_id)
        .await?
        .ok_or_else(|| not_found("Country"))?;

    let dtos: Vec<CityDto> = cities.into_iter().map(City::into_dto).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

#[utoipa::path(
    post,
    path = "/api/admin/cities",
    tag = ADMIN_GEO_TAG,
    request_body = SaveCityDto,
    responses(
        (status = 201, description = "City created", body = CityDto),
        (status = 400, description = "Invalid city data or unknown country", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto)
    ),
)]
pub async fn create_city(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<SaveCityDto>,
) -> Result<impl IntoResponse, AppError> {
    require_admin(&state, &session).await?;
    payload.validate()?;

    let city = GeoService::new(&state.db)
        .create_city(SaveCityParams::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(city.into_dto())))
}

#[utoipa::path(
    put,
    path = "/api/admin/cities/{id}",
    tag = ADMIN_GEO_TAG,
    params(("id" = i32, Path, description = "City ID")),
    request_body = SaveCityDto,
    responses(
        (status = 200, description = "City updated", body = CityDto),
        (status = 400, description = "Invalid city data or unknown country", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "City not found", body = ErrorDto)
    ),
)]
pub async fn update_city(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<SaveCityDto>,
) -> Result<impl IntoResponse, AppError> {
    require_admin(&state, &session).await?;
    payload.validate()?;

    let city = GeoService::new(&state.db)
        .update_city(id, SaveCityParams::from_dto(payload))
        .await?
        .ok_or_else(|| not_found("City"))?;

    Ok((StatusCode::OK, Json(city.into_dto())))
}

#[utoipa::path(
    delete,
    path = "/api/admin/cities/{id}",
    tag = ADMIN_GEO_TAG,
    params(("id" = i32, Path, description = "City ID")),
    responses(
        (status = 204, description = "City deleted"),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "City not found", body = ErrorDto)
    ),
)]
pub async fn delete_city(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    require_admin(&state, &session).await?;

    let removed = GeoService::new(&state.db).delete_city(id).await?;

    deleted(removed, "City")
}

#[utoipa::path(
    get,
    path = "/api/admin/airports",
    tag = ADMIN_GEO_TAG,
    params(AirportQuery),
    responses(
        (status = 200, description = "Airports, optionally of one city", body = Vec<AirportDto>),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "City not found", body = ErrorDto)
    ),
)]
pub async fn get_airports(
    State(state): State<AppState>,
    session: Session,
    Query(query): Query<AirportQuery>,
) -> Result<impl IntoResponse, AppError> {
    require_admin(&state, &session).await?;

    let airports = GeoService::new(&state.db)
        .get_airports(query.city_id)
        .await?
        .ok_or_else(|| not_found("City"))?;

    let dtos: Vec<AirportDto> = airports.into_iter().map(Airport::into_dto).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

#[utoipa::path(
    post,
    path = "/api/admin/airports",
    tag = ADMIN_GEO_TAG,
    request_body = SaveAirportDto,
    responses(
        (status = 201, description = "Airport created", body = AirportDto),
        (status = 400, description = "Invalid airport data or unknown city", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto)
    ),
)]
pub async fn create_airport(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<SaveAirportDto>,
) -> Result<impl IntoResponse, AppError> {
    require_admin(&state, &session).await?;
    payload.validate()?;

    let airport = GeoService::new(&state.db)
        .create_airport(SaveAirportParams::from_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(airport.into_dto())))
}

#[utoipa::path(
    put,
    path = "/api/admin/airports/{id}",
    tag = ADMIN_GEO_TAG,
    params(("id" = i32, Path, description = "Airport ID")),
    request_body = SaveAirportDto,
    responses(
        (status = 200, description = "Airport updated", body = AirportDto),
        (status = 400, description = "Invalid airport data or unknown city", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Airport not found", body = ErrorDto)
    ),
)]
pub async fn update_airport(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
    Json(payload): Json<SaveAirportDto>,
) -> Result<impl IntoResponse, AppError> {
    require_admin(&state, &session).await?;
    payload.validate()?;

    let airport = GeoService::new(&state.db)
        .update_airport(id, SaveAirportParams::from_dto(payload))
        .await?
        .ok_or_else(|| not_found("Airport"))?;

    Ok((StatusCode::OK, Json(airport.into_dto())))
}

#[utoipa::path(
    delete,
    path = "/api/admin/airports/{id}",
    tag = ADMIN_GEO_TAG,
    params(("id" = i32, Path, description = "Airport ID")),
    responses(
        (status = 204, description = "Airport deleted"),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Airport not found", body = ErrorDto)
    ),
)]
pub async fn delete_airport(
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    require_admin(&state, &session).await?;

    let removed = GeoService::new(&state.db).delete_airport(id).await?;

    deleted(removed, "Airport")
}
