use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

#[derive(Serialize, Deserialize, ToSchema, Clone, Debug, PartialEq)]
pub struct CountryDto {
    pub id: i32,
    pub name: String,
    pub code: String,
}

#[derive(Deserialize, ToSchema, Validate, Debug, Clone)]
pub struct SaveCountryDto {
    #[validate(length(min = 1, max = 120))]
    pub name: String,
    #[validate(length(equal = 2, message = "must be a two letter ISO code"))]
    pub code: String,
}

#[derive(Serialize, Deserialize, ToSchema, Clone, Debug, PartialEq)]
pub struct CityDto {
    pub id: i32,
    pub country_id: i32,
    pub name: String,
}

#[derive(Deserialize, ToSchema, Validate, Debug, Clone)]
pub struct SaveCityDto {
    pub country_id: i32,
    #[validate(length(min = 1, max = 120))]
    pub name: String,
}

#[derive(Serialize, Deserialize, ToSchema, Clone, Debug, PartialEq)]
pub struct AirportDto {
    pub id: i32,
    pub city_id: i32,
    pub name: String,
    pub code: String,
}

#[derive(Deserialize, ToSchema, Validate, Debug, Clone)]
pub struct SaveAirportDto {
    pub city_id: i32,
    #[validate(length(min = 1, max = 160))]
    pub name: String,
    #[validate(length(equal = 3, message = "must be a three letter IATA code"))]
    pub code: String,
}

#[derive(Deserialize, IntoParams, Debug, Default, Clone, Copy)]
pub struct CityQuery {
    pub country_id: Option<i32>,
}

#[derive(Deserialize, IntoParams, Debug, Default, Clone, Copy)]
pub struct AirportQuery {
    pub city_id: Option<i32>,
}
