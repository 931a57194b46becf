//! Transport type data repository.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait, QueryOrder,
};

use crate::server::model::transport::{SaveTransportTypeParams, TransportType};

pub struct TransportTypeRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TransportTypeRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: SaveTransportTypeParams) -> Result<TransportType, DbErr> {
        let entity = entity::transport_type::ActiveModel {
            name: ActiveValue::Set(params.name),
            multiplier_percent: ActiveValue::Set(params.multiplier_percent),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(TransportType::from_entity(entity))
    }

    pub async fn update(
        &self,
        id: i32,
        params: SaveTransportTypeParams,
    ) -> Result<Option<TransportType>, DbErr> {
        let Some(existing) = entity::prelude::TransportType::find_by_id(id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active: entity::transport_type::ActiveModel = existing.into();
        active.name = ActiveValue::Set(params.name);
        active.multiplier_percent = ActiveValue::Set(params.multiplier_percent);

        let entity = active.update(self.db).await?;

        Ok(Some(TransportType::from_entity(entity)))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<TransportType>, DbErr> {
        let entity = entity::prelude::TransportType::find_by_id(id)
            .one(self.db)
            .await?;

        Ok(entity.map(TransportType::from_entity))
    }

    pub async fn get_all(&self) -> Result<Vec<TransportType>, DbErr> {
        let entities = entity::prelude::TransportType::find()
            .order_by_asc(entity::transport_type::Column::Name)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(TransportType::from_entity).collect())
    }

    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::TransportType::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
