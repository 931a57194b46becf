//! Translation factory.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a translation entry with the given key and texts.
pub async fn create_translation(
    db: &DatabaseConnection,
    key: impl Into<String>,
    en_text: impl Into<String>,
    ar_text: Option<String>,
) -> Result<entity::translation::Model, DbErr> {
    entity::translation::ActiveModel {
        key: ActiveValue::Set(key.into()),
        en_text: ActiveValue::Set(en_text.into()),
        ar_text: ActiveValue::Set(ar_text),
        category: ActiveValue::Set(None),
        updated_at: ActiveValue::Set(Utc::now()),
        ..Default::default()
    }
    .insert(db)
    .await
}
