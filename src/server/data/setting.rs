//! Site setting data repository. Settings are plain key/value strings upserted by key.

use std::collections::BTreeMap;

use chrono::Utc;
use migration::OnConflict;
use sea_orm::{ActiveValue, DatabaseConnection, DbErr, EntityTrait};

pub struct SettingRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SettingRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_all(&self) -> Result<BTreeMap<String, String>, DbErr> {
        let entities = entity::prelude::Setting::find().all(self.db).await?;

        Ok(entities
            .into_iter()
            .map(|setting| (setting.key, setting.value))
            .collect())
    }

    /// Inserts or overwrites each key; keys not present in `settings` are left as they are.
    pub async fn upsert(&self, settings: BTreeMap<String, String>) -> Result<(), DbErr> {
        if settings.is_empty() {
            return Ok(());
        }

        let now = Utc::now();
        let models = settings
            .into_iter()
            .map(|(key, value)| entity::setting::ActiveModel {
                key: ActiveValue::Set(key),
                value: ActiveValue::Set(value),
                updated_at: ActiveValue::Set(now),
                ..Default::default()
            });

        entity::prelude::Setting::insert_many(models)
            .on_conflict(
                OnConflict::column(entity::setting::Column::Key)
                    .update_columns([
                        entity::setting::Column::Value,
                        entity::setting::Column::UpdatedAt,
                    ])
                    .to_owned(),
            )
            .exec(self.db)
            .await?;

        Ok(())
    }
}
