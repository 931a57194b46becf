//! Order domain models.
//!
//! Orders are immutable snapshots of a cart at checkout time. Only the fulfilment and
//! payment statuses change afterwards.

use std::{fmt, str::FromStr};

use chrono::{DateTime, NaiveDate, Utc};
use entity::sea_orm_active_enums::{ItemType, OrderStatus, PaymentStatus};
use sea_orm::DbErr;

use crate::{
    model::order::{
        CheckoutDto, OrderDto, OrderItemDto, OrderStatusDto, PaymentMethodDto, PaymentStatusDto,
        UpdateOrderStatusDto,
    },
    server::model::cart::{CartItem, Pax},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaymentMethod {
    Card,
    Cash,
    BankTransfer,
}

impl PaymentMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Card => "card",
            Self::Cash => "cash",
            Self::BankTransfer => "bank_transfer",
        }
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PaymentMethod {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "card" => Ok(Self::Card),
            "cash" => Ok(Self::Cash),
            "bank_transfer" => Ok(Self::BankTransfer),
            other => Err(format!("Unknown payment method '{}'", other)),
        }
    }
}

impl From<PaymentMethodDto> for PaymentMethod {
    fn from(value: PaymentMethodDto) -> Self {
        match value {
            PaymentMethodDto::Card => Self::Card,
            PaymentMethodDto::Cash => Self::Cash,
            PaymentMethodDto::BankTransfer => Self::BankTransfer,
        }
    }
}

impl From<PaymentMethod> for PaymentMethodDto {
    fn from(value: PaymentMethod) -> Self {
        match value {
            PaymentMethod::Card => Self::Card,
            PaymentMethod::Cash => Self::Cash,
            PaymentMethod::BankTransfer => Self::BankTransfer,
        }
    }
}

impl From<OrderStatus> for OrderStatusDto {
    fn from(value: OrderStatus) -> Self {
        match value {
            OrderStatus::Pending => Self::Pending,
            OrderStatus::Confirmed => Self::Confirmed,
            OrderStatus::Processing => Self::Processing,
            OrderStatus::Completed => Self::Completed,
            OrderStatus::Cancelled => Self::Cancelled,
        }
    }
}

impl From<OrderStatusDto> for OrderStatus {
    fn from(value: OrderStatusDto) -> Self {
        match value {
            OrderStatusDto::Pending => Self::Pending,
            OrderStatusDto::Confirmed => Self::Confirmed,
            OrderStatusDto::Processing => Self::Processing,
            OrderStatusDto::Completed => Self::Completed,
            OrderStatusDto::Cancelled => Self::Cancelled,
        }
    }
}

impl From<PaymentStatus> for PaymentStatusDto {
    fn from(value: PaymentStatus) -> Self {
        match value {
            PaymentStatus::Pending => Self::Pending,
            PaymentStatus::Paid => Self::Paid,
            PaymentStatus::Failed => Self::Failed,
            PaymentStatus::Refunded => Self::Refunded,
        }
    }
}

impl From<PaymentStatusDto> for PaymentStatus {
    fn from(value: PaymentStatusDto) -> Self {
        match value {
            PaymentStatusDto::Pending => Self::Pending,
            PaymentStatusDto::Paid => Self::Paid,
            PaymentStatusDto::Failed => Self::Failed,
            PaymentStatusDto::Refunded => Self::Refunded,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct OrderItem {
    pub id: i32,
    pub item_type: ItemType,
    pub item_id: i32,
    pub item_name: String,
    pub quantity: i32,
    pub pax: Pax,
    pub travel_date: Option<NaiveDate>,
    pub check_in: Option<NaiveDate>,
    pub check_out: Option<NaiveDate>,
    pub unit_price: i64,
    pub total_price: i64,
}

impl OrderItem {
    pub fn into_dto(self) -> OrderItemDto {
        OrderItemDto {
            id: self.id,
            item_type: self.item_type.into(),
            item_id: self.item_id,
            item_name: self.item_name,
            quantity: self.quantity,
            adults: self.pax.adults,
            children: self.pax.children,
            infants: self.pax.infants,
            travel_date: self.travel_date,
            check_in: self.check_in,
            check_out: self.check_out,
            unit_price: self.unit_price,
            total_price: self.total_price,
        }
    }

    pub fn from_entity(entity: entity::order_item::Model) -> Self {
        Self {
            id: entity.id,
            item_type: entity.item_type,
            item_id: entity.item_id,
            item_name: entity.item_name,
            quantity: entity.quantity,
            pax: Pax {
                adults: entity.adults,
                children: entity.children,
                infants: entity.infants,
            },
            travel_date: entity.travel_date,
            check_in: entity.check_in,
            check_out: entity.check_out,
            unit_price: entity.unit_price,
            total_price: entity.total_price,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    pub id: i32,
    pub order_number: String,
    pub user_id: Option<i32>,
    pub customer_name: String,
    pub customer_email: String,
    pub customer_phone: Option<String>,
    pub status: OrderStatus,
    pub payment_status: PaymentStatus,
    pub payment_method: PaymentMethod,
    pub subtotal: i64,
    pub total: i64,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub items: Vec<OrderItem>,
}

impl Order {
    pub fn into_dto(self) -> OrderDto {
        OrderDto {
            id: self.id,
            order_number: self.order_number,
            user_id: self.user_id,
            customer_name: self.customer_name,
            customer_email: self.customer_email,
            customer_phone: self.customer_phone,
            status: self.status.into(),
            payment_status: self.payment_status.into(),
            payment_method: self.payment_method.into(),
            subtotal: self.subtotal,
            total: self.total,
            notes: self.notes,
            created_at: self.created_at,
            items: self.items.into_iter().map(OrderItem::into_dto).collect(),
        }
    }

    /// Converts an order row and its item rows at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(Order)` - Converted order
    /// - `Err(DbErr::Type)` - Stored payment method is not a known value
    pub fn from_entity(
        entity: entity::order::Model,
        items: Vec<entity::order_item::Model>,
    ) -> Result<Self, DbErr> {
        let payment_method = entity.payment_method.parse().map_err(DbErr::Type)?;

        Ok(Self {
            id: entity.id,
            order_number: entity.order_number,
            user_id: entity.user_id,
            customer_name: entity.customer_name,
            customer_email: entity.customer_email,
            customer_phone: entity.customer_phone,
            status: entity.status,
            payment_status: entity.payment_status,
            payment_method,
            subtotal: entity.subtotal,
            total: entity.total,
            notes: entity.notes,
            created_at: entity.created_at,
            items: items.into_iter().map(OrderItem::from_entity).collect(),
        })
    }
}

/// Customer details captured at checkout.
#[derive(Debug, Clone)]
pub struct CheckoutParams {
    pub customer_name: String,
    pub customer_email: String,
    pub customer_phone: Option<String>,
    pub payment_method: PaymentMethod,
    pub notes: Option<String>,
}

impl CheckoutParams {
    pub fn from_dto(dto: CheckoutDto) -> Self {
        Self {
            customer_name: dto.customer_name.trim().to_string(),
            customer_email: dto.customer_email.trim().to_lowercase(),
            customer_phone: dto.customer_phone,
            payment_method: dto.payment_method.into(),
            notes: dto.notes.filter(|notes| !notes.trim().is_empty()),
        }
    }
}

#[derive(Debug, Clone)]
pub struct NewOrderItem {
    pub item_type: ItemType,
    pub item_id: i32,
    pub item_name: String,
    pub quantity: i32,
    pub pax: Pax,
    pub travel_date: Option<NaiveDate>,
    pub check_in: Option<NaiveDate>,
    pub check_out: Option<NaiveDate>,
    pub unit_price: i64,
    pub total_price: i64,
}

impl NewOrderItem {
    pub fn from_cart_item(item: CartItem) -> Self {
        Self {
            item_type: item.item_type,
            item_id: item.item_id,
            item_name: item.item_name,
            quantity: item.quantity,
            pax: item.pax,
            travel_date: item.travel_date,
            check_in: item.check_in,
            check_out: item.check_out,
            unit_price: item.unit_price,
            total_price: item.total_price,
        }
    }
}

#[derive(Debug, Clone)]
pub struct NewOrder {
    pub order_number: String,
    pub user_id: Option<i32>,
    pub checkout: CheckoutParams,
    pub subtotal: i64,
    pub total: i64,
    pub items: Vec<NewOrderItem>,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct UpdateOrderStatusParams {
    pub status: Option<OrderStatus>,
    pub payment_status: Option<PaymentStatus>,
}

impl UpdateOrderStatusParams {
    pub fn from_dto(dto: UpdateOrderStatusDto) -> Self {
        Self {
            status: dto.status.map(Into::into),
            payment_status: dto.payment_status.map(Into::into),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.status.is_none() && self.payment_status.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payment_method_round_trips_through_storage_value() {
        for method in [
            PaymentMethod::Card,
            PaymentMethod::Cash,
            PaymentMethod::BankTransfer,
        ] {
            assert_eq!(method.as_str().parse::<PaymentMethod>(), Ok(method));
        }
    }

    #[test]
    fn rejects_unknown_payment_method() {
        assert!("crypto".parse::<PaymentMethod>().is_err());
    }
}
