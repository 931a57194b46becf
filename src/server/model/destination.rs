use chrono::{DateTime, Utc};

use crate::model::destination::{DestinationDto, SaveDestinationDto};

#[derive(Debug, Clone, PartialEq)]
pub struct Destination {
    pub id: i32,
    pub name: String,
    pub country_id: Option<i32>,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub featured: bool,
    pub active: bool,
    pub created_at: DateTime<Utc>,
}

impl Destination {
    pub fn into_dto(self) -> DestinationDto {
        DestinationDto {
            id: self.id,
            name: self.name,
            country_id: self.country_id,
            description: self.description,
            image_url: self.image_url,
            featured: self.featured,
            active: self.active,
            created_at: self.created_at,
        }
    }

    pub fn from_entity(entity: entity::destination::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            country_id: entity.country_id,
            description: entity.description,
            image_url: entity.image_url,
            featured: entity.featured,
            active: entity.active,
            created_at: entity.created_at,
        }
    }
}

/// Full set of editable destination fields, used for create and update.
#[derive(Debug, Clone)]
pub struct SaveDestinationParams {
    pub name: String,
    pub country_id: Option<i32>,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub featured: bool,
    pub active: bool,
}

impl SaveDestinationParams {
    pub fn from_dto(dto: SaveDestinationDto) -> Self {
        Self {
            name: dto.name.trim().to_string(),
            country_id: dto.country_id,
            description: dto.description,
            image_url: dto.image_url,
            featured: dto.featured,
            active: dto.active,
        }
    }
}

/// Listing filter; `active_only` is set for public endpoints.
#[derive(Debug, Clone, Copy, Default)]
pub struct DestinationFilter {
    pub featured: Option<bool>,
    pub active_only: bool,
}
