use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

#[derive(Serialize, Deserialize, ToSchema, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum BookingStatusDto {
    Pending,
    Confirmed,
    Cancelled,
    Completed,
}

#[derive(Serialize, Deserialize, ToSchema, Clone, Debug, PartialEq)]
pub struct BookingDto {
    pub id: i32,
    pub user_id: i32,
    pub package_id: i32,
    pub travel_date: NaiveDate,
    pub adults: i32,
    pub children: i32,
    pub total_price: i64,
    pub status: BookingStatusDto,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Deserialize, ToSchema, Validate, Debug, Clone)]
pub struct CreateBookingDto {
    pub package_id: i32,
    pub travel_date: NaiveDate,
    #[validate(range(min = 1, max = 50, message = "must be between 1 and 50"))]
    pub adults: i32,
    #[serde(default)]
    #[validate(range(min = 0, max = 50, message = "must be between 0 and 50"))]
    pub children: i32,
    #[validate(length(max = 2000))]
    pub notes: Option<String>,
}

#[derive(Deserialize, ToSchema, Debug, Clone, Copy)]
pub struct UpdateBookingStatusDto {
    pub status: BookingStatusDto,
}

#[derive(Deserialize, IntoParams, Debug, Default, Clone, Copy)]
pub struct BookingFilter {
    pub status: Option<BookingStatusDto>,
}
