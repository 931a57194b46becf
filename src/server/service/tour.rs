use sea_orm::DatabaseConnection;

use crate::server::{
    data::{destination::DestinationRepository, tour::TourRepository},
    error::AppError,
    model::{
        package::ProductFilter,
        pagination::{PageParams, Paginated},
        tour::{SaveTourParams, Tour},
    },
    service::package::{resolve_slug, slug_conflict},
};

pub struct TourService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TourService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_all(&self, filter: ProductFilter) -> Result<Vec<Tour>, AppError> {
        Ok(TourRepository::new(self.db).get_all(filter).await?)
    }

    pub async fn get_paginated(&self, page: PageParams) -> Result<Paginated<Tour>, AppError> {
        let (tours, total) = TourRepository::new(self.db)
            .get_all_paginated(page.page, page.per_page)
            .await?;

        Ok(Paginated::new(tours, total, page))
    }

    pub async fn get_by_id(&self, id: i32, active_only: bool) -> Result<Option<Tour>, AppError> {
        let tour = TourRepository::new(self.db).find_by_id(id).await?;

        Ok(tour.filter(|t| t.active || !active_only))
    }

    pub async fn create(&self, params: SaveTourParams) -> Result<Tour, AppError> {
        let slug = resolve_slug(params.slug.as_deref(), &params.title)?;
        self.ensure_destination(params.destination_id).await?;

        let repo = TourRepository::new(self.db);
        if repo.slug_exists(&slug, None).await? {
            return Err(slug_conflict(&slug));
        }

        let tour = repo.create(slug, &params).await?;
        tracing::info!("Created tour {} ({})", tour.id, tour.slug);

        Ok(tour)
    }

    /// Returns None if the tour doesn't exist.
    pub async fn update(&self, id: i32, params: SaveTourParams) -> Result<Option<Tour>, AppError> {
        let slug = resolve_slug(params.slug.as_deref(), &params.title)?;
        self.ensure_destination(params.destination_id).await?;

        let repo = TourRepository::new(self.db);
        if repo.slug_exists(&slug, Some(id)).await? {
            return Err(slug_conflict(&slug));
        }

        Ok(repo.update(id, slug, &params).await?)
    }

    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        Ok(TourRepository::new(self.db).deactivate(id).await?)
    }

    async fn ensure_destination(&self, destination_id: i32) -> Result<(), AppError> {
        if DestinationRepository::new(self.db)
            .find_by_id(destination_id)
            .await?
            .is_none()
        {
            return Err(AppError::BadRequest(format!(
                "Destination {} does not exist",
                destination_id
            )));
        }

        Ok(())
    }
}
