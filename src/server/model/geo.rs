//! Countries, cities and airports used by destinations, hotels and visas.

use crate::model::geo::{
    AirportDto, CityDto, CountryDto, SaveAirportDto, SaveCityDto, SaveCountryDto,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Country {
    pub id: i32,
    pub name: String,
    pub code: String,
}

impl Country {
    pub fn into_dto(self) -> CountryDto {
        CountryDto {
            id: self.id,
            name: self.name,
            code: self.code,
        }
    }

    pub fn from_entity(entity: entity::country::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            code: entity.code,
        }
    }
}

#[derive(Debug, Clone)]
pub struct SaveCountryParams {
    pub name: String,
    /// ISO 3166-1 alpha-2, stored upper-case.
    pub code: String,
}

impl SaveCountryParams {
    pub fn from_dto(dto: SaveCountryDto) -> Self {
        Self {
            name: dto.name.trim().to_string(),
            code: dto.code.trim().to_uppercase(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct City {
    pub id: i32,
    pub country_id: i32,
    pub name: String,
}

impl City {
    pub fn into_dto(self) -> CityDto {
        CityDto {
            id: self.id,
            country_id: self.country_id,
            name: self.name,
        }
    }

    pub fn from_entity(entity: entity::city::Model) -> Self {
        Self {
            id: entity.id,
            country_id: entity.country_id,
            name: entity.name,
        }
    }
}

#[derive(Debug, Clone)]
pub struct SaveCityParams {
    pub country_id: i32,
    pub name: String,
}

impl SaveCityParams {
    pub fn from_dto(dto: SaveCityDto) -> Self {
        Self {
            country_id: dto.country_id,
            name: dto.name.trim().to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Airport {
    pub id: i32,
    pub city_id: i32,
    pub name: String,
    pub code: String,
}

impl Airport {
    pub fn into_dto(self) -> AirportDto {
        AirportDto {
            id: self.id,
            city_id: self.city_id,
            name: self.name,
            code: self.code,
        }
    }

    pub fn from_entity(entity: entity::airport::Model) -> Self {
        Self {
            id: entity.id,
            city_id: entity.city_id,
            name: entity.name,
            code: entity.code,
        }
    }
}

#[derive(Debug, Clone)]
pub struct SaveAirportParams {
    pub city_id: i32,
    pub name: String,
    /// IATA code, stored upper-case.
    pub code: String,
}

impl SaveAirportParams {
    pub fn from_dto(dto: SaveAirportDto) -> Self {
        Self {
            city_id: dto.city_id,
            name: dto.name.trim().to_string(),
            code: dto.code.trim().to_uppercase(),
        }
    }
}
