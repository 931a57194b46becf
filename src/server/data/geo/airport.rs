use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder, QueryTrait,
};

use crate::server::model::geo::{Airport, SaveAirportParams};

pub struct AirportRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AirportRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: SaveAirportParams) -> Result<Airport, DbErr> {
        let entity = entity::airport::ActiveModel {
            city_id: ActiveValue::Set(params.city_id),
            name: ActiveValue::Set(params.name),
            code: ActiveValue::Set(params.code),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Airport::from_entity(entity))
    }

    pub async fn update(
        &self,
        id: i32,
        params: SaveAirportParams,
    ) -> Result<Option<Airport>, DbErr> {
        let Some(existing) = entity::prelude::Airport::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active: entity::airport::ActiveModel = existing.into();
        active.city_id = ActiveValue::Set(params.city_id);
        active.name = ActiveValue::Set(params.name);
        active.code = ActiveValue::Set(params.code);

        let entity = active.update(self.db).await?;

        Ok(Some(Airport::from_entity(entity)))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Airport>, DbErr> {
        let entity = entity::prelude::Airport::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Airport::from_entity))
    }

    /// Lists airports ordered by IATA code, optionally restricted to one city.
    pub async fn get_all(&self, city_id: Option<i32>) -> Result<Vec<Airport>, DbErr> {
        let entities = entity::prelude::Airport::find()
            .apply_if(city_id, |query, id| {
                query.filter(entity::airport::Column::CityId.eq(id))
            })
            .order_by_asc(entity::airport::Column::Code)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Airport::from_entity).collect())
    }

    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Airport::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
