use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::model::destination::default_true;

#[derive(Serialize, Deserialize, ToSchema, Clone, Debug, PartialEq)]
pub struct HotelDto {
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

#[derive(Deserialize, ToSchema, Validate, Debug, Clone)]
pub struct SaveHotelDto {
    pub destination_id: Option<i32>,
    pub city_id: Option<i32>,
    #[validate(length(min = 1, max = 200, message = "must be between 1 and 200 characters"))]
    pub name: String,
    pub description: Option<String>,
    pub address: Option<String>,
    #[validate(range(min = 1, max = 5, message = "must be between 1 and 5"))]
    pub stars: i32,
    #[validate(range(min = 0, message = "must not be negative"))]
    pub base_price: i64,
    pub image_url: Option<String>,
    #[serde(default)]
    pub gallery: Vec<String>,
    #[serde(default)]
    pub amenities: Vec<String>,
    #[serde(default)]
    pub featured: bool,
    #[serde(default = "default_true")]
    pub active: bool,
}

#[derive(Deserialize, IntoParams, Debug, Default, Clone, Copy)]
pub struct HotelQuery {
    pub destination_id: Option<i32>,
    pub city_id: Option<i32>,
    pub featured: Option<bool>,
}

#[derive(Serialize, Deserialize, ToSchema, Clone, Debug, PartialEq)]
pub struct RoomDto {
    pub id: i32,
    pub hotel_id: i32,
    pub name: String,
    pub description: Option<String>,
    pub max_adults: i32,
    pub max_children: i32,
    pub price: i64,
    pub available: bool,
    pub image_url: Option<String>,
}

#[derive(Deserialize, ToSchema, Validate, Debug, Clone)]
pub struct SaveRoomDto {
    #[validate(length(min = 1, max = 120, message = "must be between 1 and 120 characters"))]
    pub name: String,
    pub description: Option<String>,
    #[validate(range(min = 1, message = "must be at least 1"))]
    pub max_adults: i32,
    #[validate(range(min = 0, message = "must not be negative"))]
    pub max_children: i32,
    #[validate(range(min = 0, message = "must not be negative"))]
    pub price: i64,
    #[serde(default = "default_true")]
    pub available: bool,
    pub image_url: Option<String>,
}
