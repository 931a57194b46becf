use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::model::destination::default_true;

#[derive(Serialize, Deserialize, ToSchema, Clone, Debug, PartialEq)]
pub struct VisaDto {
    pub id: i32,
    pub country_id: i32,
    pub title: String,
    pub description: Option<String>,
    pub processing_days: i32,
    pub price: i64,
    pub active: bool,
}

#[derive(Deserialize, ToSchema, Validate, Debug, Clone)]
pub struct SaveVisaDto {
    pub country_id: i32,
    #[validate(length(min = 1, max = 200))]
    pub title: String,
    pub description: Option<String>,
    #[validate(range(min = 0))]
    pub processing_days: i32,
    #[validate(range(min = 0, message = "must not be negative"))]
    pub price: i64,
    #[serde(default = "default_true")]
    pub active: bool,
}

#[derive(Deserialize, IntoParams, Debug, Default, Clone, Copy)]
pub struct VisaQuery {
    pub country_id: Option<i32>,
}
