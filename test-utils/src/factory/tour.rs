//! Tour factory for creating test tour entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating tours for an existing destination.
///
/// Defaults: four hours, price 20_000, no child price, active.
pub struct TourFactory<'a> {
    db: &'a DatabaseConnection,
    destination_id: i32,
    title: String,
    slug: String,
    price: i64,
    child_price: Option<i64>,
    featured: bool,
    active: bool,
}

impl<'a> TourFactory<'a> {
    pub fn new(db: &'a DatabaseConnection, destination_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            destination_id,
            title: format!("Tour {}", id),
            slug: format!("tour-{}", id),
            price: 20_000,
            child_price: None,
            featured: false,
            active: true,
        }
    }

    pub fn slug(mut self, slug: impl Into<String>) -> Self {
        self.slug = slug.into();
        self
    }

    pub fn price(mut self, price: i64) -> Self {
        self.price = price;
        self
    }

    pub fn child_price(mut self, child_price: Option<i64>) -> Self {
        self.child_price = child_price;
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

    pub async fn build(self) -> Result<entity::tour::Model, DbErr> {
        entity::tour::ActiveModel {
            destination_id: ActiveValue::Set(self.destination_id),
            title: ActiveValue::Set(self.title),
            slug: ActiveValue::Set(self.slug),
            description: ActiveValue::Set(None),
            duration_hours: ActiveValue::Set(4),
            price: ActiveValue::Set(self.price),
            child_price: ActiveValue::Set(self.child_price),
            image_url: ActiveValue::Set(None),
            gallery: ActiveValue::Set(serde_json::json!([])),
            featured: ActiveValue::Set(self.featured),
            active: ActiveValue::Set(self.active),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an active tour with default values.
pub async fn create_tour(
    db: &DatabaseConnection,
    destination_id: i32,
) -> Result<entity::tour::Model, DbErr> {
    TourFactory::new(db, destination_id).build().await
}
