use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Serialize, Deserialize, ToSchema, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ItemTypeDto {
    Package,
    Tour,
    Hotel,
    Room,
    Visa,
}

#[derive(Serialize, Deserialize, ToSchema, Clone, Debug, PartialEq)]
pub struct CartItemDto {
    pub id: i32,
    pub item_type: ItemTypeDto,
    pub item_id: i32,
    pub item_name: String,
    pub quantity: i32,
    pub adults: i32,
    pub children: i32,
    pub infants: i32,
    pub travel_date: Option<NaiveDate>,
    pub check_in: Option<NaiveDate>,
    pub check_out: Option<NaiveDate>,
    pub transport_type_id: Option<i32>,
    pub unit_price: i64,
    pub total_price: i64,
    pub created_at: DateTime<Utc>,
}

#[derive(Serialize, Deserialize, ToSchema, Clone, Debug, PartialEq)]
pub struct CartDto {
    pub items: Vec<CartItemDto>,
    pub subtotal: i64,
    pub item_count: i32,
}

fn default_one() -> i32 {
    1
}

#[derive(Deserialize, ToSchema, Validate, Debug, Clone)]
pub struct AddCartItemDto {
    pub item_type: ItemTypeDto,
    pub item_id: i32,
    #[serde(default = "default_one")]
    #[validate(range(min = 1, max = 20, message = "must be between 1 and 20"))]
    pub quantity: i32,
    #[serde(default = "default_one")]
    #[validate(range(min = 0, max = 50))]
    pub adults: i32,
    #[serde(default)]
    #[validate(range(min = 0, max = 50))]
    pub children: i32,
    #[serde(default)]
    #[validate(range(min = 0, max = 50))]
    pub infants: i32,
    pub travel_date: Option<NaiveDate>,
    pub check_in: Option<NaiveDate>,
    pub check_out: Option<NaiveDate>,
    pub transport_type_id: Option<i32>,
}

#[derive(Deserialize, ToSchema, Validate, Debug, Clone, Copy)]
pub struct UpdateCartItemDto {
    #[validate(range(min = 1, max = 20, message = "must be between 1 and 20"))]
    pub quantity: i32,
}
