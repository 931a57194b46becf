use chrono::{DateTime, Utc};

use crate::{
    model::hotel::{HotelDto, RoomDto, SaveHotelDto, SaveRoomDto},
    server::util::json::string_list,
};

#[derive(Debug, Clone, PartialEq)]
pub struct Hotel {
    pub id: i32,
    pub destination_id: Option<i32>,
    pub city_id: Option<i32>,
    pub name: String,
    pub description: Option<String>,
    pub address: Option<String>,
    pub stars: i32,
    pub base_price: i64,
    pub image_url: Option<String>,
    pub gallery: Vec<String>,
    pub amenities: Vec<String>,
    pub featured: bool,
    pub active: bool,
    pub created_at: DateTime<Utc>,
}

impl Hotel {
    pub fn into_dto(self) -> HotelDto {
        HotelDto {
            id: self.id,
            destination_id: self.destination_id,
            city_id: self.city_id,
            name: self.name,
            description: self.description,
            address: self.address,
            stars: self.stars,
            base_price: self.base_price,
            image_url: self.image_url,
            gallery: self.gallery,
            amenities: self.amenities,
            featured: self.featured,
            active: self.active,
            created_at: self.created_at,
        }
    }

    pub fn from_entity(entity: entity::hotel::Model) -> Self {
        Self {
            id: entity.id,
            destination_id: entity.destination_id,
            city_id: entity.city_id,
            name: entity.name,
            description: entity.description,
            address: entity.address,
            stars: entity.stars,
            base_price: entity.base_price,
            image_url: entity.image_url,
            gallery: string_list(entity.gallery),
            amenities: string_list(entity.amenities),
            featured: entity.featured,
            active: entity.active,
            created_at: entity.created_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct SaveHotelParams {
    pub destination_id: Option<i32>,
    pub city_id: Option<i32>,
    pub name: String,
    pub description: Option<String>,
    pub address: Option<String>,
    pub stars: i32,
    pub base_price: i64,
    pub image_url: Option<String>,
    pub gallery: Vec<String>,
    pub amenities: Vec<String>,
    pub featured: bool,
    pub active: bool,
}

impl SaveHotelParams {
    pub fn from_dto(dto: SaveHotelDto) -> Self {
        Self {
            destination_id: dto.destination_id,
            city_id: dto.city_id,
            name: dto.name.trim().to_string(),
            description: dto.description,
            address: dto.address,
            stars: dto.stars,
            base_price: dto.base_price,
            image_url: dto.image_url,
            gallery: dto.gallery,
            amenities: dto.amenities,
            featured: dto.featured,
            active: dto.active,
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct HotelFilter {
    pub destination_id: Option<i32>,
    pub city_id: Option<i32>,
    pub featured: Option<bool>,
    pub active_only: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Room {
    pub id: i32,
    pub hotel_id: i32,
    pub name: String,
    pub description: Option<String>,
    pub max_adults: i32,
    pub max_children: i32,
    /// Price per night.
    pub price: i64,
    pub available: bool,
    pub image_url: Option<String>,
}

impl Room {
    pub fn into_dto(self) -> RoomDto {
        RoomDto {
            id: self.id,
            hotel_id: self.hotel_id,
            name: self.name,
            description: self.description,
            max_adults: self.max_adults,
            max_children: self.max_children,
            price: self.price,
            available: self.available,
            image_url: self.image_url,
        }
    }

    pub fn from_entity(entity: entity::room::Model) -> Self {
        Self {
            id: entity.id,
            hotel_id: entity.hotel_id,
            name: entity.name,
            description: entity.description,
            max_adults: entity.max_adults,
            max_children: entity.max_children,
            price: entity.price,
            available: entity.available,
            image_url: entity.image_url,
        }
    }
}

#[derive(Debug, Clone)]
pub struct SaveRoomParams {
    pub name: String,
    pub description: Option<String>,
    pub max_adults: i32,
    pub max_children: i32,
    pub price: i64,
    pub available: bool,
    pub image_url: Option<String>,
}

impl SaveRoomParams {
    pub fn from_dto(dto: SaveRoomDto) -> Self {
        Self {
            name: dto.name.trim().to_string(),
            description: dto.description,
            max_adults: dto.max_adults,
            max_children: dto.max_children,
            price: dto.price,
            available: dto.available,
            image_url: dto.image_url,
        }
    }
}
