//! Room factory for creating test room entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating rooms in an existing hotel.
///
/// Defaults: two adults, one child, 40_000 per night, available.
pub struct RoomFactory<'a> {
    db: &'a DatabaseConnection,
    hotel_id: i32,
    name: String,
    max_adults: i32,
    max_children: i32,
    price: i64,
    available: bool,
}

impl<'a> RoomFactory<'a> {
    pub fn new(db: &'a DatabaseConnection, hotel_id: i32) -> Self {
        Self {
            db,
            hotel_id,
            name: format!("Room {}", next_id()),
            max_adults: 2,
            max_children: 1,
            price: 40_000,
            available: true,
        }
    }

    pub fn max_adults(mut self, max_adults: i32) -> Self {
        self.max_adults = max_adults;
        self
    }

    pub fn max_children(mut self, max_children: i32) -> Self {
        self.max_children = max_children;
        self
    }

    pub fn price(mut self, price: i64) -> Self {
        self.price = price;
        self
    }

    pub fn available(mut self, available: bool) -> Self {
        self.available = available;
        self
    }

    pub async fn build(self) -> Result<entity::room::Model, DbErr> {
        entity::room::ActiveModel {
            hotel_id: ActiveValue::Set(self.hotel_id),
            name: ActiveValue::Set(self.name),
            description: ActiveValue::Set(None),
            max_adults: ActiveValue::Set(self.max_adults),
            max_children: ActiveValue::Set(self.max_children),
            price: ActiveValue::Set(self.price),
            available: ActiveValue::Set(self.available),
            image_url: ActiveValue::Set(None),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an available room with default values.
pub async fn create_room(
    db: &DatabaseConnection,
    hotel_id: i32,
) -> Result<entity::room::Model, DbErr> {
    RoomFactory::new(db, hotel_id).build().await
}
