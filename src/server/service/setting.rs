use std::collections::BTreeMap;

use sea_orm::DatabaseConnection;

use crate::server::{data::setting::SettingRepository, error::AppError};

/// Free-form site settings stored as key/value pairs.
pub struct SettingService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SettingService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_all(&self) -> Result<BTreeMap<String, String>, AppError> {
        Ok(SettingRepository::new(self.db).get_all().await?)
    }

    /// Upserts the given keys and returns the full settings map.
    ///
    /// Keys not present in `settings` are left as they are.
    pub async fn update(
        &self,
        settings: BTreeMap<String, String>,
    ) -> Result<BTreeMap<String, String>, AppError> {
        if settings.keys().any(|key| key.trim().is_empty()) {
            return Err(AppError::BadRequest(
                "Setting keys must not be empty".to_string(),
            ));
        }

        let repo = SettingRepository::new(self.db);
        repo.upsert(settings).await?;

        Ok(repo.get_all().await?)
    }
}
