//! Destination factory for creating test destination entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test destinations.
///
/// Defaults to an active, non-featured destination without a country.
pub struct DestinationFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    country_id: Option<i32>,
    featured: bool,
    active: bool,
}

impl<'a> DestinationFactory<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            name: format!("Destination {}", next_id()),
            country_id: None,
            featured: false,
            active: true,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn country_id(mut self, country_id: Option<i32>) -> Self {
        self.country_id = country_id;
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

    pub async fn build(self) -> Result<entity::destination::Model, DbErr> {
        entity::destination::ActiveModel {
            name: ActiveValue::Set(self.name),
            country_id: ActiveValue::Set(self.country_id),
            description: ActiveValue::Set(None),
            image_url: ActiveValue::Set(None),
            featured: ActiveValue::Set(self.featured),
            active: ActiveValue::Set(self.active),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an active destination with default values.
pub async fn create_destination(
    db: &DatabaseConnection,
) -> Result<entity::destination::Model, DbErr> {
    DestinationFactory::new(db).build().await
}
