use sea_orm::DatabaseConnection;

use crate::server::{
    data::transport_type::TransportTypeRepository,
    error::AppError,
    model::transport::{SaveTransportTypeParams, TransportType},
};

pub struct TransportTypeService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TransportTypeService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_all(&self) -> Result<Vec<TransportType>, AppError> {
        Ok(TransportTypeRepository::new(self.db).get_all().await?)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<TransportType>, AppError> {
        Ok(TransportTypeRepository::new(self.db).find_by_id(id).await?)
    }

    pub async fn create(&self, params: SaveTransportTypeParams) -> Result<TransportType, AppError> {
        Ok(TransportTypeRepository::new(self.db).create(params).await?)
    }

    pub async fn update(
        &self,
        id: i32,
        params: SaveTransportTypeParams,
    ) -> Result<Option<TransportType>, AppError> {
        Ok(TransportTypeRepository::new(self.db).update(id, params).await?)
    }

    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        Ok(TransportTypeRepository::new(self.db).delete(id).await?)
    }
}
