use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait, QueryOrder,
};

use crate::server::model::geo::{Country, SaveCountryParams};

pub struct CountryRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CountryRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: SaveCountryParams) -> Result<Country, DbErr> {
        let entity = entity::country::ActiveModel {
            name: ActiveValue::Set(params.name),
            code: ActiveValue::Set(params.code),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Country::from_entity(entity))
    }

    pub async fn update(
        &self,
        id: i32,
        params: SaveCountryParams,
    ) -> Result<Option<Country>, DbErr> {
        let Some(existing) = entity::prelude::Country::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active: entity::country::ActiveModel = existing.into();
        active.name = ActiveValue::Set(params.name);
        active.code = ActiveValue::Set(params.code);

        let entity = active.update(self.db).await?;

        Ok(Some(Country::from_entity(entity)))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Country>, DbErr> {
        let entity = entity::prelude::Country::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Country::from_entity))
    }

    pub async fn get_all(&self) -> Result<Vec<Country>, DbErr> {
        let entities = entity::prelude::Country::find()
            .order_by_asc(entity::country::Column::Name)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Country::from_entity).collect())
    }

    /// Deletes a country; its cities, airports and visas cascade.
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Country::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
