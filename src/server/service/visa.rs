use sea_orm::DatabaseConnection;

use crate::server::{
    data::visa::VisaRepository,
    error::AppError,
    model::{
        pagination::{PageParams, Paginated},
        visa::{SaveVisaParams, Visa},
    },
};

pub struct VisaService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> VisaService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_all(
        &self,
        country_id: Option<i32>,
        active_only: bool,
    ) -> Result<Vec<Visa>, AppError> {
        Ok(VisaRepository::new(self.db)
            .get_all(country_id, active_only)
            .await?)
    }

    pub async fn get_paginated(&self, page: PageParams) -> Result<Paginated<Visa>, AppError> {
        let (visas, total) = VisaRepository::new(self.db)
            .get_all_paginated(page.page, page.per_page)
            .await?;

        Ok(Paginated::new(visas, total, page))
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<Visa>, AppError> {
        Ok(VisaRepository::new(self.db).find_by_id(id).await?)
    }

    pub async fn create(&self, params: SaveVisaParams) -> Result<Visa, AppError> {
        Ok(VisaRepository::new(self.db).create(params).await?)
    }

    pub async fn update(&self, id: i32, params: SaveVisaParams) -> Result<Option<Visa>, AppError> {
        Ok(VisaRepository::new(self.db).update(id, params).await?)
    }

    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        Ok(VisaRepository::new(self.db).deactivate(id).await?)
    }
}
