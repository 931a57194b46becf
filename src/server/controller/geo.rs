use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        geo::{AirportDto, CityDto, CountryDto},
    },
    server::{
        error::AppError,
        model::geo::{Airport, City, Country},
        service::geo::GeoService,
        state::AppState,
    },
};

/// Tag for grouping geography endpoints in OpenAPI documentation
pub static GEO_TAG: &str = "geo";

#[utoipa::path(
    get,
    path = "/api/countries",
    tag = GEO_TAG,
    responses(
        (status = 200, description = "All countries", body = Vec<CountryDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_countries(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let countries = GeoService::new(&state.db).get_countries().await?;

    let dtos: Vec<CountryDto> = countries.into_iter().map(Country::into_dto).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

#[utoipa::path(
    get,
    path = "/api/countries/{id}/cities",
    tag = GEO_TAG,
    params(("id" = i32, Path, description = "Country ID")),
    responses(
        (status = 200, description = "Cities of the country", body = Vec<CityDto>),
        (status = 404, description = "Country not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_country_cities(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let cities = GeoService::new(&state.db)
        .get_cities(Some(id))
        .await?
        .ok_or_else(|| AppError::NotFound("Country not found".to_string()))?;

    let dtos: Vec<CityDto> = cities.into_iter().map(City::into_dto).collect();

    Ok((StatusCode::OK, Json(dtos)))
}

#[utoipa::path(
    get,
    path = "/api/cities/{id}/airports",
    tag = GEO_TAG,
    params(("id" = i32, Path, description = "City ID")),
    responses(
        (status = 200, description = "Airports of the city", body = Vec<AirportDto>),
        (status = 404, description = "City not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_city_airports(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let airports = GeoService::new(&state.db)
        .get_airports(Some(id))
        .await?
        .ok_or_else(|| AppError::NotFound("City not found".to_string()))?;

    let dtos: Vec<AirportDto> = airports.into_iter().map(Airport::into_dto).collect();

    Ok((StatusCode::OK, Json(dtos)))
}
