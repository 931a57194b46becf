//! Package factory for creating test package entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating packages for an existing destination.
///
/// Defaults:
/// - title: `"Package {id}"`, slug: `"package-{id}"`
/// - duration: 5 days, price: 100_000, no discount or child price
/// - active, not featured, empty gallery/itinerary/included/excluded
pub struct PackageFactory<'a> {
    db: &'a DatabaseConnection,
    destination_id: i32,
    title: String,
    slug: String,
    duration_days: i32,
    price: i64,
    discounted_price: Option<i64>,
    child_price: Option<i64>,
    featured: bool,
    active: bool,
}

impl<'a> PackageFactory<'a> {
    pub fn new(db: &'a DatabaseConnection, destination_id: i32) -> Self {
        let id = next_id();
        Self {
            db,
            destination_id,
            title: format!("Package {}", id),
            slug: format!("package-{}", id),
            duration_days: 5,
            price: 100_000,
            discounted_price: None,
            child_price: None,
            featured: false,
            active: true,
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn slug(mut self, slug: impl Into<String>) -> Self {
        self.slug = slug.into();
        self
    }

    pub fn duration_days(mut self, duration_days: i32) -> Self {
        self.duration_days = duration_days;
        self
    }

    pub fn price(mut self, price: i64) -> Self {
        self.price = price;
        self
    }

    pub fn discounted_price(mut self, discounted_price: Option<i64>) -> Self {
        self.discounted_price = discounted_price;
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

    pub async fn build(self) -> Result<entity::package::Model, DbErr> {
        entity::package::ActiveModel {
            destination_id: ActiveValue::Set(self.destination_id),
            title: ActiveValue::Set(self.title),
            slug: ActiveValue::Set(self.slug),
            description: ActiveValue::Set(None),
            duration_days: ActiveValue::Set(self.duration_days),
            price: ActiveValue::Set(self.price),
            discounted_price: ActiveValue::Set(self.discounted_price),
            child_price: ActiveValue::Set(self.child_price),
            image_url: ActiveValue::Set(None),
            gallery: ActiveValue::Set(serde_json::json!([])),
            itinerary: ActiveValue::Set(serde_json::json!([])),
            included: ActiveValue::Set(serde_json::json!([])),
            excluded: ActiveValue::Set(serde_json::json!([])),
            featured: ActiveValue::Set(self.featured),
            active: ActiveValue::Set(self.active),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an active package with default values.
pub async fn create_package(
    db: &DatabaseConnection,
    destination_id: i32,
) -> Result<entity::package::Model, DbErr> {
    PackageFactory::new(db, destination_id).build().await
}
