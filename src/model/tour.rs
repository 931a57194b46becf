use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::model::destination::default_true;

#[derive(Serialize, Deserialize, ToSchema, Clone, Debug, PartialEq)]
pub struct TourDto {
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

#[derive(Deserialize, ToSchema, Validate, Debug, Clone)]
pub struct SaveTourDto {
    pub destination_id: i32,
    #[validate(length(min = 1, max = 200, message = "must be between 1 and 200 characters"))]
    pub title: String,
    #[validate(length(min = 1, max = 200))]
    pub slug: Option<String>,
    pub description: Option<String>,
    #[validate(range(min = 1, message = "must be at least 1 hour"))]
    pub duration_hours: i32,
    #[validate(range(min = 0, message = "must not be negative"))]
    pub price: i64,
    #[validate(range(min = 0, message = "must not be negative"))]
    pub child_price: Option<i64>,
    pub image_url: Option<String>,
    #[serde(default)]
    pub gallery: Vec<String>,
    #[serde(default)]
    pub featured: bool,
    #[serde(default = "default_true")]
    pub active: bool,
}
