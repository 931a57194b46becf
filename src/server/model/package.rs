use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{
    model::package::{ItineraryDayDto, PackageDetailDto, PackageDto, SavePackageDto},
    server::{model::hotel::Hotel, util::json::string_list},
};

/// One day of a package itinerary, stored as an element of the package's JSON column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItineraryDay {
    pub day: i32,
    pub title: String,
    #[serde(default)]
    pub description: String,
}

impl ItineraryDay {
    pub fn into_dto(self) -> ItineraryDayDto {
        ItineraryDayDto {
            day: self.day,
            title: self.title,
            description: self.description,
        }
    }

    pub fn from_dto(dto: ItineraryDayDto) -> Self {
        Self {
            day: dto.day,
            title: dto.title,
            description: dto.description,
        }
    }
}

/// Parses the itinerary column, ignoring malformed content.
pub fn parse_itinerary(value: Value) -> Vec<ItineraryDay> {
    serde_json::from_value(value).unwrap_or_default()
}

pub fn itinerary_value(days: &[ItineraryDay]) -> Value {
    Value::Array(
        days.iter()
            .map(|day| {
                serde_json::json!({
                    "day": day.day,
                    "title": day.title,
                    "description": day.description,
                })
            })
            .collect(),
    )
}

#[derive(Debug, Clone, PartialEq)]
pub struct Package {
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
    pub itinerary: Vec<ItineraryDay>,
    pub included: Vec<String>,
    pub excluded: Vec<String>,
    pub featured: bool,
    pub active: bool,
    pub created_at: DateTime<Utc>,
}

impl Package {
    pub fn into_dto(self) -> PackageDto {
        PackageDto {
            id: self.id,
            destination_id: self.destination_id,
            title: self.title,
            slug: self.slug,
            description: self.description,
            duration_days: self.duration_days,
            price: self.price,
            discounted_price: self.discounted_price,
            child_price: self.child_price,
            image_url: self.image_url,
            gallery: self.gallery,
            itinerary: self.itinerary.into_iter().map(ItineraryDay::into_dto).collect(),
            included: self.included,
            excluded: self.excluded,
            featured: self.featured,
            active: self.active,
            created_at: self.created_at,
        }
    }

    pub fn from_entity(entity: entity::package::Model) -> Self {
        Self {
            id: entity.id,
            destination_id: entity.destination_id,
            title: entity.title,
            slug: entity.slug,
            description: entity.description,
            duration_days: entity.duration_days,
            price: entity.price,
            discounted_price: entity.discounted_price,
            child_price: entity.child_price,
            image_url: entity.image_url,
            gallery: string_list(entity.gallery),
            itinerary: parse_itinerary(entity.itinerary),
            included: string_list(entity.included),
            excluded: string_list(entity.excluded),
            featured: entity.featured,
            active: entity.active,
            created_at: entity.created_at,
        }
    }
}

/// Package together with the hotels it includes.
#[derive(Debug, Clone, PartialEq)]
pub struct PackageDetail {
    pub package: Package,
    pub hotels: Vec<Hotel>,
}

impl PackageDetail {
    pub fn into_dto(self) -> PackageDetailDto {
        PackageDetailDto {
            package: self.package.into_dto(),
            hotels: self.hotels.into_iter().map(Hotel::into_dto).collect(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct SavePackageParams {
    pub destination_id: i32,
    pub title: String,
    /// Requested slug; derived from the title by the service when `None`.
    pub slug: Option<String>,
    pub description: Option<String>,
    pub duration_days: i32,
    pub price: i64,
    pub discounted_price: Option<i64>,
    pub child_price: Option<i64>,
    pub image_url: Option<String>,
    pub gallery: Vec<String>,
    pub itinerary: Vec<ItineraryDay>,
    pub included: Vec<String>,
    pub excluded: Vec<String>,
    pub featured: bool,
    pub active: bool,
    pub hotel_ids: Vec<i32>,
}

impl SavePackageParams {
    pub fn from_dto(dto: SavePackageDto) -> Self {
        let mut hotel_ids = dto.hotel_ids;
        hotel_ids.sort_unstable();
        hotel_ids.dedup();

        Self {
            destination_id: dto.destination_id,
            title: dto.title.trim().to_string(),
            slug: dto.slug.map(|s| s.trim().to_string()).filter(|s| !s.is_empty()),
            description: dto.description,
            duration_days: dto.duration_days,
            price: dto.price,
            discounted_price: dto.discounted_price,
            child_price: dto.child_price,
            image_url: dto.image_url,
            gallery: dto.gallery,
            itinerary: dto.itinerary.into_iter().map(ItineraryDay::from_dto).collect(),
            included: dto.included,
            excluded: dto.excluded,
            featured: dto.featured,
            active: dto.active,
            hotel_ids,
        }
    }
}

/// Listing filter shared by packages and tours; `active_only` is set for public endpoints.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProductFilter {
    pub destination_id: Option<i32>,
    pub featured: Option<bool>,
    pub active_only: bool,
}
