//! Translation data repository.
//!
//! Keys are unique. `insert_missing` is used by source scanning and never overwrites text
//! an editor has already changed.

use std::collections::HashSet;

use chrono::Utc;
use migration::OnConflict;
use sea_orm::{
    ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait,
    QueryOrder, QuerySelect,
};

use crate::server::model::translation::{SaveTranslationParams, Translation};

pub struct TranslationRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TranslationRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets every translation ordered by key.
    pub async fn get_all(&self) -> Result<Vec<Translation>, DbErr> {
        let entities = entity::prelude::Translation::find()
            .order_by_asc(entity::translation::Column::Key)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Translation::from_entity).collect())
    }

    pub async fn get_all_paginated(
        &self,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<Translation>, u64), DbErr> {
        let paginator = entity::prelude::Translation::find()
            .order_by_asc(entity::translation::Column::Key)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let entities = paginator.fetch_page(page).await?;

        Ok((
            entities.into_iter().map(Translation::from_entity).collect(),
            total,
        ))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Translation>, DbErr> {
        let entity = entity::prelude::Translation::find_by_id(id)
            .one(self.db)
            .await?;

        Ok(entity.map(Translation::from_entity))
    }

    pub async fn create(&self, params: SaveTranslationParams) -> Result<Translation, DbErr> {
        let entity = entity::translation::ActiveModel {
            key: ActiveValue::Set(params.key),
            en_text: ActiveValue::Set(params.en_text),
            ar_text: ActiveValue::Set(params.ar_text),
            category: ActiveValue::Set(params.category),
            updated_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Translation::from_entity(entity))
    }

    pub async fn update(
        &self,
        id: i32,
        params: SaveTranslationParams,
    ) -> Result<Option<Translation>, DbErr> {
        let Some(existing) = entity::prelude::Translation::find_by_id(id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active: entity::translation::ActiveModel = existing.into();
        active.key = ActiveValue::Set(params.key);
        active.en_text = ActiveValue::Set(params.en_text);
        active.ar_text = ActiveValue::Set(params.ar_text);
        active.category = ActiveValue::Set(params.category);
        active.updated_at = ActiveValue::Set(Utc::now());

        let entity = active.update(self.db).await?;

        Ok(Some(Translation::from_entity(entity)))
    }

    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Translation::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Gets the set of keys already stored.
    pub async fn existing_keys(&self) -> Result<HashSet<String>, DbErr> {
        let keys: Vec<String> = entity::prelude::Translation::find()
            .select_only()
            .column(entity::translation::Column::Key)
            .into_tuple()
            .all(self.db)
            .await?;

        Ok(keys.into_iter().collect())
    }

    /// Inserts `(key, en_text)` pairs, skipping keys that already exist.
    ///
    /// # Returns
    /// - `Ok(())` - All new keys inserted; existing keys left untouched
    /// - `Err(DbErr)` - Database error during insert
    pub async fn insert_missing(&self, entries: Vec<(String, String)>) -> Result<(), DbErr> {
        if entries.is_empty() {
            return Ok(());
        }

        let now = Utc::now();
        let models = entries
            .into_iter()
            .map(|(key, en_text)| entity::translation::ActiveModel {
                key: ActiveValue::Set(key),
                en_text: ActiveValue::Set(en_text),
                ar_text: ActiveValue::Set(None),
                category: ActiveValue::Set(None),
                updated_at: ActiveValue::Set(now),
                ..Default::default()
            });

        entity::prelude::Translation::insert_many(models)
            .on_conflict(
                OnConflict::column(entity::translation::Column::Key)
                    .do_nothing()
                    .to_owned(),
            )
            .do_nothing()
            .exec(self.db)
            .await?;

        Ok(())
    }

    /// Stores the Arabic text of a translation.
    ///
    /// # Returns
    /// - `Ok(Some(Translation))` - Updated translation
    /// - `Ok(None)` - No translation with that ID
    pub async fn set_ar_text(&self, id: i32, ar_text: String) -> Result<Option<Translation>, DbErr> {
        let Some(existing) = entity::prelude::Translation::find_by_id(id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active: entity::translation::ActiveModel = existing.into();
        active.ar_text = ActiveValue::Set(Some(ar_text));
        active.updated_at = ActiveValue::Set(Utc::now());

        let entity = active.update(self.db).await?;

        Ok(Some(Translation::from_entity(entity)))
    }
}
