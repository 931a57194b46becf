//! Visa factory.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates an active tourist visa offer costing 15_000 per traveller.
pub async fn create_visa(
    db: &DatabaseConnection,
    country_id: i32,
) -> Result<entity::visa::Model, DbErr> {
    entity::visa::ActiveModel {
        country_id: ActiveValue::Set(country_id),
        title: ActiveValue::Set(format!("Tourist Visa {}", next_id())),
        description: ActiveValue::Set(None),
        processing_days: ActiveValue::Set(7),
        price: ActiveValue::Set(15_000),
        active: ActiveValue::Set(true),
        created_at: ActiveValue::Set(Utc::now()),
        ..Default::default()
    }
    .insert(db)
    .await
}
