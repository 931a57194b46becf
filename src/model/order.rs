use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::model::cart::ItemTypeDto;

#[derive(Serialize, Deserialize, ToSchema, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatusDto {
    Pending,
    Confirmed,
    Processing,
    Completed,
    Cancelled,
}

#[derive(Serialize, Deserialize, ToSchema, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum PaymentStatusDto {
    Pending,
    Paid,
    Failed,
    Refunded,
}

#[derive(Serialize, Deserialize, ToSchema, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum PaymentMethodDto {
    Card,
    Cash,
    BankTransfer,
}

#[derive(Serialize, Deserialize, ToSchema, Clone, Debug, PartialEq)]
pub struct OrderItemDto {
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
    pub unit_price: i64,
    pub total_price: i64,
}

#[derive(Serialize, Deserialize, ToSchema, Clone, Debug, PartialEq)]
pub struct OrderDto {
    pub id: i32,
    pub order_number: String,
    pub user_id: Option<i32>,
    pub customer_name: String,
    pub customer_email: String,
    pub customer_phone: Option<String>,
    pub status: OrderStatusDto,
    pub payment_status: PaymentStatusDto,
    pub payment_method: PaymentMethodDto,
    pub subtotal: i64,
    pub total: i64,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub items: Vec<OrderItemDto>,
}

#[derive(Deserialize, ToSchema, Validate, Debug, Clone)]
pub struct CheckoutDto {
    #[validate(length(min = 1, max = 120, message = "must be between 1 and 120 characters"))]
    pub customer_name: String,
    #[validate(email(message = "must be a valid email address"))]
    pub customer_email: String,
    #[validate(length(min = 5, max = 32))]
    pub customer_phone: Option<String>,
    pub payment_method: PaymentMethodDto,
    #[validate(length(max = 2000))]
    pub notes: Option<String>,
}

#[derive(Deserialize, ToSchema, Debug, Clone, Copy)]
pub struct UpdateOrderStatusDto {
    pub status: Option<OrderStatusDto>,
    pub payment_status: Option<PaymentStatusDto>,
}

#[derive(Deserialize, IntoParams, Debug, Default, Clone, Copy)]
pub struct OrderFilter {
    pub status: Option<OrderStatusDto>,
}
