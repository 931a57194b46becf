//! Cart domain models.
//!
//! A cart belongs either to a logged-in user or to an anonymous guest identified by a
//! random token kept in the session. Each line stores a pricing snapshot taken when the
//! item was added so later catalog price changes do not alter the cart silently.

use chrono::{DateTime, NaiveDate, Utc};
use entity::sea_orm_active_enums::ItemType;

use crate::{
    model::cart::{AddCartItemDto, CartDto, CartItemDto, ItemTypeDto},
    server::error::pricing::PricingError,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CartOwner {
    User(i32),
    Guest(String),
}

impl CartOwner {
    pub fn user_id(&self) -> Option<i32> {
        match self {
            Self::User(id) => Some(*id),
            Self::Guest(_) => None,
        }
    }
}

impl From<ItemType> for ItemTypeDto {
    fn from(value: ItemType) -> Self {
        match value {
            ItemType::Package => ItemTypeDto::Package,
            ItemType::Tour => ItemTypeDto::Tour,
            ItemType::Hotel => ItemTypeDto::Hotel,
            ItemType::Room => ItemTypeDto::Room,
            ItemType::Visa => ItemTypeDto::Visa,
        }
    }
}

impl From<ItemTypeDto> for ItemType {
    fn from(value: ItemTypeDto) -> Self {
        match value {
            ItemTypeDto::Package => ItemType::Package,
            ItemTypeDto::Tour => ItemType::Tour,
            ItemTypeDto::Hotel => ItemType::Hotel,
            ItemTypeDto::Room => ItemType::Room,
            ItemTypeDto::Visa => ItemType::Visa,
        }
    }
}

/// Traveller counts for a line item. Infants travel free for every product type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Pax {
    pub adults: i32,
    pub children: i32,
    pub infants: i32,
}

impl Pax {
    pub fn total(&self) -> i32 {
        self.adults + self.children + self.infants
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CartItem {
    pub id: i32,
    pub user_id: Option<i32>,
    pub guest_token: Option<String>,
    pub item_type: ItemType,
    pub item_id: i32,
    pub item_name: String,
    pub quantity: i32,
    pub pax: Pax,
    pub travel_date: Option<NaiveDate>,
    pub check_in: Option<NaiveDate>,
    pub check_out: Option<NaiveDate>,
    pub transport_type_id: Option<i32>,
    pub unit_price: i64,
    pub total_price: i64,
    pub created_at: DateTime<Utc>,
}

impl CartItem {
    pub fn into_dto(self) -> CartItemDto {
        CartItemDto {
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
            transport_type_id: self.transport_type_id,
            unit_price: self.unit_price,
            total_price: self.total_price,
            created_at: self.created_at,
        }
    }

    pub fn from_entity(entity: entity::cart_item::Model) -> Self {
        Self {
            id: entity.id,
            user_id: entity.user_id,
            guest_token: entity.guest_token,
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
            transport_type_id: entity.transport_type_id,
            unit_price: entity.unit_price,
            total_price: entity.total_price,
            created_at: entity.created_at,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Cart {
    pub items: Vec<CartItem>,
    pub subtotal: i64,
    /// Sum of line quantities.
    pub item_count: i32,
}

impl Cart {
    pub fn empty() -> Self {
        Self {
            items: Vec::new(),
            subtotal: 0,
            item_count: 0,
        }
    }

    /// # Returns
    /// - `Err(PricingError::Overflow)` - Line totals or quantities exceed the integer range
    pub fn from_items(items: Vec<CartItem>) -> Result<Self, PricingError> {
        let subtotal = subtotal(&items)?;
        let item_count = items
            .iter()
            .try_fold(0i32, |count, item| count.checked_add(item.quantity))
            .ok_or(PricingError::Overflow)?;

        Ok(Self {
            items,
            subtotal,
            item_count,
        })
    }

    pub fn into_dto(self) -> CartDto {
        CartDto {
            items: self.items.into_iter().map(CartItem::into_dto).collect(),
            subtotal: self.subtotal,
            item_count: self.item_count,
        }
    }
}

/// Sum of line totals, checked against overflow.
pub fn subtotal(items: &[CartItem]) -> Result<i64, PricingError> {
    items
        .iter()
        .try_fold(0i64, |sum, item| sum.checked_add(item.total_price))
        .ok_or(PricingError::Overflow)
}

#[derive(Debug, Clone)]
pub struct AddCartItemParams {
    pub item_type: ItemType,
    pub item_id: i32,
    pub quantity: i32,
    pub pax: Pax,
    pub travel_date: Option<NaiveDate>,
    pub check_in: Option<NaiveDate>,
    pub check_out: Option<NaiveDate>,
    pub transport_type_id: Option<i32>,
}

impl AddCartItemParams {
    pub fn from_dto(dto: AddCartItemDto) -> Self {
        Self {
            item_type: dto.item_type.into(),
            item_id: dto.item_id,
            quantity: dto.quantity,
            pax: Pax {
                adults: dto.adults,
                children: dto.children,
                infants: dto.infants,
            },
            travel_date: dto.travel_date,
            check_in: dto.check_in,
            check_out: dto.check_out,
            transport_type_id: dto.transport_type_id,
        }
    }
}

/// Fully priced cart line ready for insertion.
#[derive(Debug, Clone)]
pub struct NewCartItem {
    pub owner: CartOwner,
    pub item_type: ItemType,
    pub item_id: i32,
    pub item_name: String,
    pub quantity: i32,
    pub pax: Pax,
    pub travel_date: Option<NaiveDate>,
    pub check_in: Option<NaiveDate>,
    pub check_out: Option<NaiveDate>,
    pub transport_type_id: Option<i32>,
    pub unit_price: i64,
    pub total_price: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(quantity: i32, total_price: i64) -> CartItem {
        CartItem {
            id: 1,
            user_id: Some(1),
            guest_token: None,
            item_type: ItemType::Tour,
            item_id: 1,
            item_name: "Desert Safari".to_string(),
            quantity,
            pax: Pax {
                adults: 1,
                children: 0,
                infants: 0,
            },
            travel_date: None,
            check_in: None,
            check_out: None,
            transport_type_id: None,
            unit_price: total_price / quantity as i64,
            total_price,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn cart_totals_sum_lines() {
        let cart = Cart::from_items(vec![item(2, 40_000), item(1, 15_000)]).unwrap();

        assert_eq!(cart.subtotal, 55_000);
        assert_eq!(cart.item_count, 3);
    }

    #[test]
    fn empty_cart_totals_are_zero() {
        let cart = Cart::from_items(vec![]).unwrap();

        assert_eq!(cart, Cart::empty());
    }

    #[test]
    fn subtotal_overflow_is_rejected() {
        let half = i64::MAX / 2 + 1;

        let result = Cart::from_items(vec![item(1, half), item(1, half)]);

        assert_eq!(result, Err(PricingError::Overflow));
    }
}
