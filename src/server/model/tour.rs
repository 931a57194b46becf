use chrono::{DateTime, Utc};

use crate::{
    model::tour::{SaveTourDto, TourDto},
    server::util::json::string_list,
};

#[derive(Debug, Clone, PartialEq)]
pub struct Tour {
    pub id: i32,
    pub destination_id: i32,
    pub title: String,
    pub slug: String,
    pub description: Option<String>,
    pub duration_hours: i32,
    pub price: i64,
    pub child_price: Option<i64>,
    pub image_url: Option<String>,
    pub gallery: Vec<String>,
    pub featured: bool,
    pub active: bool,
    pub created_at: DateTime<Utc>,
}

impl Tour {
    pub fn into_dto(self) -> TourDto {
        TourDto {
            id: self.id,
            destination_id: self.destination_id,
            title: self.title,
            slug: self.slug,
            description: self.description,
            duration_hours: self.duration_hours,
            price: self.price,
            child_price: self.child_price,
            image_url: self.image_url,
            gallery: self.gallery,
            featured: self.featured,
            active: self.active,
            created_at: self.created_at,
        }
    }

    pub fn from_entity(entity: entity::tour::Model) -> Self {
        Self {
            id: entity.id,
            destination_id: entity.destination_id,
            title: entity.title,
            slug: entity.slug,
            description: entity.description,
            duration_hours: entity.duration_hours,
            price: entity.price,
            child_price: entity.child_price,
            image_url: entity.image_url,
            gallery: string_list(entity.gallery),
            featured: entity.featured,
            active: entity.active,
            created_at: entity.created_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct SaveTourParams {
    pub destination_id: i32,
    pub title: String,
    pub slug: Option<String>,
    pub description: Option<String>,
    pub duration_hours: i32,
    pub price: i64,
    pub child_price: Option<i64>,
    pub image_url: Option<String>,
    pub gallery: Vec<String>,
    pub featured: bool,
    pub active: bool,
}

impl SaveTourParams {
    pub fn from_dto(dto: SaveTourDto) -> Self {
        Self {
            destination_id: dto.destination_id,
            title: dto.title.trim().to_string(),
            slug: dto.slug.map(|s| s.trim().to_string()).filter(|s| !s.is_empty()),
            description: dto.description,
            duration_hours: dto.duration_hours,
            price: dto.price,
            child_price: dto.child_price,
            image_url: dto.image_url,
            gallery: dto.gallery,
            featured: dto.featured,
            active: dto.active,
        }
    }
}
