//! Hotel factory for creating test hotel entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test hotels.
///
/// Defaults: three stars, base price 50_000 per night, active, no destination.
pub struct HotelFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    destination_id: Option<i32>,
    city_id: Option<i32>,
    stars: i32,
    base_price: i64,
    featured: bool,
    active: bool,
}

impl<'a> HotelFactory<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            name: format!("Hotel {}", next_id()),
            destination_id: None,
            city_id: None,
            stars: 3,
            base_price: 50_000,
            featured: false,
            active: true,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn destination_id(mut self, destination_id: Option<i32>) -> Self {
        self.destination_id = destination_id;
        self
    }

    pub fn city_id(mut self, city_id: Option<i32>) -> Self {
        self.city_id = city_id;
        self
    }

    pub fn stars(mut self, stars: i32) -> Self {
        self.stars = stars;
        self
    }

    pub fn base_price(mut self, base_price: i64) -> Self {
        self.base_price = base_price;
        self
    }

    pub fn featured(mut self, featured: bool) -> Self {
        self.featured = featured;
        self
    }

    pub fn active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }

    pub async fn build(self) -> Result<entity::hotel::Model, DbErr> {
        entity::hotel::ActiveModel {
            destination_id: ActiveValue::Set(self.destination_id),
            city_id: ActiveValue::Set(self.city_id),
            name: ActiveValue::Set(self.name),
            description: ActiveValue::Set(None),
            address: ActiveValue::Set(None),
            stars: ActiveValue::Set(self.stars),
            base_price: ActiveValue::Set(self.base_price),
            image_url: ActiveValue::Set(None),
            gallery: ActiveValue::Set(serde_json::json!([])),
            amenities: ActiveValue::Set(serde_json::json!([])),
            featured: ActiveValue::Set(self.featured),
            active: ActiveValue::Set(self.active),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an active hotel with default values.
pub async fn create_hotel(db: &DatabaseConnection) -> Result<entity::hotel::Model, DbErr> {
    HotelFactory::new(db).build().await
}
