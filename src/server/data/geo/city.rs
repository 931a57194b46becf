use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder, QueryTrait,
};

use crate::server::model::geo::{City, SaveCityParams};

pub struct CityRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CityRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: SaveCityParams) -> Result<City, DbErr> {
        let entity = entity::city::ActiveModel {
            country_id: ActiveValue::Set(params.country_id),
            name: ActiveValue::Set(params.name),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(City::from_entity(entity))
    }

    pub async fn update(&self, id: i32, params: SaveCityParams) -> Result<Option<City>, DbErr> {
        let Some(existing) = entity::prelude::City::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active: entity::city::ActiveModel = existing.into();
        active.country_id = ActiveValue::Set(params.country_id);
        active.name = ActiveValue::Set(params.name);

        let entity = active.update(self.db).await?;

        Ok(Some(City::from_entity(entity)))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<City>, DbErr> {
        let entity = entity::prelude::City::find_by_id(id).one(self.db).await?;

        Ok(entity.map(City::from_entity))
    }

    /// Lists cities ordered by name, optionally restricted to one country.
    pub async fn get_all(&self, country_id: Option<i32>) -> Result<Vec<City>, DbErr> {
        let entities = entity::prelude::City::find()
            .apply_if(country_id, |query, id| {
                query.filter(entity::city::Column::CountryId.eq(id))
            })
            .order_by_asc(entity::city::Column::Name)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(City::from_entity).collect())
    }

    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::City::delete_by_id(id).exec(self.db).await?;

        Ok(result.rows_affected > 0)
    }
}
