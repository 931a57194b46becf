use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

#[derive(Serialize, Deserialize, ToSchema, Clone, Debug, PartialEq)]
pub struct DestinationDto {
    pub id: i32,
    pub name: String,
    pub country_id: Option<i32>,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub featured: bool,
    pub active: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Deserialize, ToSchema, Validate, Debug, Clone)]
pub struct SaveDestinationDto {
    #[validate(length(min = 1, max = 120, message = "must be between 1 and 120 characters"))]
    pub name: String,
    pub country_id: Option<i32>,
    pub description: Option<String>,
    pub image_url: Option<String>,
    #[serde(default)]
    pub featured: bool,
    #[serde(default = "default_true")]
    pub active: bool,
}

#[derive(Deserialize, IntoParams, Debug, Default)]
pub struct DestinationQuery {
    pub featured: Option<bool>,
}

pub(crate) fn default_true() -> bool {
    true
}
