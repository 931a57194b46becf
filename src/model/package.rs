use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::model::{destination::default_true, hotel::HotelDto};

#[derive(Serialize, Deserialize, ToSchema, Clone, Debug, PartialEq, Eq, Validate)]
pub struct ItineraryDayDto {
    #[validate(range(min = 1))]
    pub day: i32,
    #[validate(length(min = 1, max = 200))]
    pub title: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Serialize, Deserialize, ToSchema, Clone, Debug, PartialEq)]
pub struct PackageDto {
    pub id: i32,
    pub destination_id: i32,
    pub title: String,
    pub slug: String,
    pub description: Option<String>,
    pub duration_days: i32,
    pub price: i64,
    pub discounted_price: Option<i64>,
    pub child_price: Option<i64>,
    pub image_url: Option<String>,
    pub gallery: Vec<String>,
    pub itinerary: Vec<ItineraryDayDto>,
    pub included: Vec<String>,
    pub excluded: Vec<String>,
    pub featured: bool,
    pub active: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, ToSchema, Clone, Debug, PartialEq)]
pub struct PackageDetailDto {
    #[serde(flatten)]
    pub package: PackageDto,
    pub hotels: Vec<HotelDto>,
}

#[derive(Deserialize, ToSchema, Validate, Debug, Clone)]
pub struct SavePackageDto {
    pub destination_id: i32,
    #[validate(length(min = 1, max = 200, message = "must be between 1 and 200 characters"))]
    pub title: String,
    /// Generated from the title when omitted.
    #[validate(length(min = 1, max = 200))]
    pub slug: Option<String>,
    pub description: Option<String>,
    #[validate(range(min = 1, message = "must be at least 1 day"))]
    pub duration_days: i32,
    #[validate(range(min = 0, message = "must not be negative"))]
    pub price: i64,
    #[validate(range(min = 0, message = "must not be negative"))]
    pub discounted_price: Option<i64>,
    #[validate(range(min = 0, message = "must not be negative"))]
    pub child_price: Option<i64>,
    pub image_url: Option<String>,
    #[serde(default)]
    pub gallery: Vec<String>,
    #[serde(default)]
    #[validate(nested)]
    pub itinerary: Vec<ItineraryDayDto>,
    #[serde(default)]
    pub included: Vec<String>,
    #[serde(default)]
    pub excluded: Vec<String>,
    #[serde(default)]
    pub featured: bool,
    #[serde(default = "default_true")]
    pub active: bool,
    #[serde(default)]
    pub hotel_ids: Vec<i32>,
}

/// Filters accepted by the public package and tour listings.
#[derive(Deserialize, IntoParams, Debug, Default, Clone, Copy)]
pub struct CatalogQuery {
    pub destination_id: Option<i32>,
    pub featured: Option<bool>,
}
