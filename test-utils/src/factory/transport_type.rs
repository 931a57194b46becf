//! Transport type factory.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a transport type with the given price multiplier percentage.
///
/// # Example
///
/// ```rust,ignore
/// // Flights cost 25% more than the base price
/// let flight = create_transport_type(&db, 125).await?;
/// ```
pub async fn create_transport_type(
    db: &DatabaseConnection,
    multiplier_percent: i32,
) -> Result<entity::transport_type::Model, DbErr> {
    entity::transport_type::ActiveModel {
        name: ActiveValue::Set(format!("Transport {}", next_id())),
        multiplier_percent: ActiveValue::Set(multiplier_percent),
        created_at: ActiveValue::Set(Utc::now()),
        ..Default::default()
    }
    .insert(db)
    .await
}
