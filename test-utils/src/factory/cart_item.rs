//! Cart item factory for creating test cart entries.

use chrono::{DateTime, Utc};
use entity::sea_orm_active_enums::ItemType;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for cart items owned by a user or a guest token.
///
/// Defaults to one package line for one adult priced at 100_000. The referenced item is not
/// validated, pair with the catalog factories when the test needs the row to exist.
pub struct CartItemFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: Option<i32>,
    guest_token: Option<String>,
    item_type: ItemType,
    item_id: i32,
    quantity: i32,
    unit_price: i64,
    created_at: DateTime<Utc>,
}

impl<'a> CartItemFactory<'a> {
    pub fn for_user(db: &'a DatabaseConnection, user_id: i32) -> Self {
        Self::new(db, Some(user_id), None)
    }

    pub fn for_guest(db: &'a DatabaseConnection, guest_token: impl Into<String>) -> Self {
        Self::new(db, None, Some(guest_token.into()))
    }

    fn new(db: &'a DatabaseConnection, user_id: Option<i32>, guest_token: Option<String>) -> Self {
        Self {
            db,
            user_id,
            guest_token,
            item_type: ItemType::Package,
            item_id: 1,
            quantity: 1,
            unit_price: 100_000,
            created_at: Utc::now(),
        }
    }

    pub fn item(mut self, item_type: ItemType, item_id: i32) -> Self {
        self.item_type = item_type;
        self.item_id = item_id;
        self
    }

    pub fn quantity(mut self, quantity: i32) -> Self {
        self.quantity = quantity;
        self
    }

    pub fn unit_price(mut self, unit_price: i64) -> Self {
        self.unit_price = unit_price;
        self
    }

    /// Overrides the creation timestamp, used for retention tests.
    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    pub async fn build(self) -> Result<entity::cart_item::Model, DbErr> {
        entity::cart_item::ActiveModel {
            user_id: ActiveValue::Set(self.user_id),
            guest_token: ActiveValue::Set(self.guest_token),
            item_type: ActiveValue::Set(self.item_type),
            item_id: ActiveValue::Set(self.item_id),
            item_name: ActiveValue::Set(format!("Item {}", self.item_id)),
            quantity: ActiveValue::Set(self.quantity),
            adults: ActiveValue::Set(1),
            children: ActiveValue::Set(0),
            infants: ActiveValue::Set(0),
            travel_date: ActiveValue::Set(None),
            check_in: ActiveValue::Set(None),
            check_out: ActiveValue::Set(None),
            transport_type_id: ActiveValue::Set(None),
            unit_price: ActiveValue::Set(self.unit_price),
            total_price: ActiveValue::Set(self.unit_price * self.quantity as i64),
            created_at: ActiveValue::Set(self.created_at),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}
