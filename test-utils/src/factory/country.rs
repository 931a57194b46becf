//! Country factory for creating test country entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a country with a unique name and a two letter code derived from the counter.
pub async fn create_country(db: &DatabaseConnection) -> Result<entity::country::Model, DbErr> {
    let id = next_id();
    let first = (b'A' + (id / 26 % 26) as u8) as char;
    let second = (b'A' + (id % 26) as u8) as char;

    entity::country::ActiveModel {
        name: ActiveValue::Set(format!("Country {}", id)),
        code: ActiveValue::Set(format!("{}{}", first, second)),
        created_at: ActiveValue::Set(Utc::now()),
        ..Default::default()
    }
    .insert(db)
    .await
}

/// Creates a city within the given country.
pub async fn create_city(
    db: &DatabaseConnection,
    country_id: i32,
) -> Result<entity::city::Model, DbErr> {
    entity::city::ActiveModel {
        country_id: ActiveValue::Set(country_id),
        name: ActiveValue::Set(format!("City {}", next_id())),
        created_at: ActiveValue::Set(Utc::now()),
        ..Default::default()
    }
    .insert(db)
    .await
}
