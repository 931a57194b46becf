use sea_orm::DatabaseConnection;

use crate::server::{
    data::{destination::DestinationRepository, geo::country::CountryRepository},
    error::AppError,
    model::{
        destination::{Destination, DestinationFilter, SaveDestinationParams},
        pagination::{PageParams, Paginated},
    },
};

pub struct DestinationService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> DestinationService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_all(&self, filter: DestinationFilter) -> Result<Vec<Destination>, AppError> {
        Ok(DestinationRepository::new(self.db).get_all(filter).await?)
    }

    /// Gets a destination, hiding inactive ones when `active_only` is set.
    pub async fn get_by_id(
        &self,
        id: i32,
        active_only: bool,
    ) -> Result<Option<Destination>, AppError> {
        let destination = DestinationRepository::new(self.db).find_by_id(id).await?;

        Ok(destination.filter(|d| d.active || !active_only))
    }

    pub async fn get_paginated(
        &self,
        page: PageParams,
    ) -> Result<Paginated<Destination>, AppError> {
        let (destinations, total) = DestinationRepository::new(self.db)
            .get_all_paginated(page.page, page.per_page)
            .await?;

        Ok(Paginated::new(destinations, total, page))
    }

    pub async fn create(&self, params: SaveDestinationParams) -> Result<Destination, AppError> {
        self.ensure_country(params.country_id).await?;

        Ok(DestinationRepository::new(self.db).create(params).await?)
    }

    /// Returns None if the destination doesn't exist.
    pub async fn update(
        &self,
        id: i32,
        params: SaveDestinationParams,
    ) -> Result<Option<Destination>, AppError> {
        self.ensure_country(params.country_id).await?;

        Ok(DestinationRepository::new(self.db).update(id, params).await?)
    }

    /// Soft deletes a destination. Returns false if it doesn't exist.
    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        Ok(DestinationRepository::new(self.db).deactivate(id).await?)
    }

    async fn ensure_country(&self, country_id: Option<i32>) -> Result<(), AppError> {
        if let Some(country_id) = country_id {
            if CountryRepository::new(self.db)
                .find_by_id(country_id)
                .await?
                .is_none()
            {
                return Err(AppError::BadRequest(format!(
                    "Country {} does not exist",
                    country_id
                )));
            }
        }

        Ok(())
    }
}
