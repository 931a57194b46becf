use sea_orm::DatabaseConnection;

use crate::server::{
    data::{destination::DestinationRepository, hotel::HotelRepository, package::PackageRepository},
    error::AppError,
    model::{
        package::{Package, PackageDetail, ProductFilter, SavePackageParams},
        pagination::{PageParams, Paginated},
    },
    util::slug::slugify,
};

pub struct PackageService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PackageService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_all(&self, filter: ProductFilter) -> Result<Vec<Package>, AppError> {
        Ok(PackageRepository::new(self.db).get_all(filter).await?)
    }

    pub async fn get_paginated(&self, page: PageParams) -> Result<Paginated<Package>, AppError> {
        let (packages, total) = PackageRepository::new(self.db)
            .get_all_paginated(page.page, page.per_page)
            .await?;

        Ok(Paginated::new(packages, total, page))
    }

    /// Gets a package with its hotels.
    ///
    /// With `active_only` set, inactive packages are hidden and only active hotels are
    /// listed.
    pub async fn get_by_id(
        &self,
        id: i32,
        active_only: bool,
    ) -> Result<Option<PackageDetail>, AppError> {
        let package = PackageRepository::new(self.db).find_by_id(id).await?;

        self.with_hotels(package, active_only).await
    }

    pub async fn get_by_slug(
        &self,
        slug: &str,
        active_only: bool,
    ) -> Result<Option<PackageDetail>, AppError> {
        let package = PackageRepository::new(self.db).find_by_slug(slug).await?;

        self.with_hotels(package, active_only).await
    }

    /// Creates a package, deriving the slug from the title when none is given.
    ///
    /// # Returns
    /// - `Ok(PackageDetail)` - Created package with linked hotels
    /// - `Err(AppError::Conflict)` - Slug already used by another package
    /// - `Err(AppError::BadRequest)` - Unknown destination or hotel, empty slug, or a
    ///   discount above the regular price
    pub async fn create(&self, params: SavePackageParams) -> Result<PackageDetail, AppError> {
        let slug = resolve_slug(params.slug.as_deref(), &params.title)?;
        self.validate(&params).await?;

        let repo = PackageRepository::new(self.db);
        if repo.slug_exists(&slug, None).await? {
            return Err(slug_conflict(&slug));
        }

        let package = repo.create(slug, &params).await?;
        tracing::info!("Created package {} ({})", package.id, package.slug);

        let hotels = repo.get_hotels(package.id, false).await?;

        Ok(PackageDetail { package, hotels })
    }

    /// Replaces a package and its hotel links. Returns None if the package doesn't exist.
    pub async fn update(
        &self,
        id: i32,
        params: SavePackageParams,
    ) -> Result<Option<PackageDetail>, AppError> {
        let slug = resolve_slug(params.slug.as_deref(), &params.title)?;
        self.validate(&params).await?;

        let repo = PackageRepository::new(self.db);
        if repo.slug_exists(&slug, Some(id)).await? {
            return Err(slug_conflict(&slug));
        }

        let Some(package) = repo.update(id, slug, &params).await? else {
            return Ok(None);
        };
        let hotels = repo.get_hotels(package.id, false).await?;

        Ok(Some(PackageDetail { package, hotels }))
    }

    /// Soft deletes a package. Returns false if it doesn't exist.
    pub async fn delete(&self, id: i32) -> Result<bool, AppError> {
        Ok(PackageRepository::new(self.db).deactivate(id).await?)
    }

    async fn with_hotels(
        &self,
        package: Option<Package>,
        active_only: bool,
    ) -> Result<Option<PackageDetail>, AppError> {
        let Some(package) = package.filter(|p| p.active || !active_only) else {
            return Ok(None);
        };

        let hotels = PackageRepository::new(self.db)
            .get_hotels(package.id, active_only)
            .await?;

        Ok(Some(PackageDetail { package, hotels }))
    }

    async fn validate(&self, params: &SavePackageParams) -> Result<(), AppError> {
        if let Some(discounted) = params.discounted_price {
            if discounted > params.price {
                return Err(AppError::BadRequest(
                    "Discounted price must not exceed the regular price".to_string(),
                ));
            }
        }

        if DestinationRepository::new(self.db)
            .find_by_id(params.destination_id)
            .await?
            .is_none()
        {
            return Err(AppError::BadRequest(format!(
                "Destination {} does not exist",
                params.destination_id
            )));
        }

        let found = HotelRepository::new(self.db)
            .count_existing(&params.hotel_ids)
            .await?;
        if found != params.hotel_ids.len() as u64 {
            return Err(AppError::BadRequest(
                "One or more hotels do not exist".to_string(),
            ));
        }

        Ok(())
    }
}

/// Normalizes the requested slug, or derives one from the title.
///
/// # Returns
/// - `Ok(slug)` - Non-empty URL slug
/// - `Err(AppError::BadRequest)` - Nothing slug-worthy in the input
pub(crate) fn resolve_slug(requested: Option<&str>, title: &str) -> Result<String, AppError> {
    let slug = slugify(requested.unwrap_or(title));
    if slug.is_empty() {
        return Err(AppError::BadRequest(
            "A slug could not be derived, please provide one".to_string(),
        ));
    }

    Ok(slug)
}

pub(crate) fn slug_conflict(slug: &str) -> AppError {
    AppError::Conflict(format!("Slug '{}' is already in use", slug))
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_utils::{builder::TestBuilder, factory};

    fn params(destination_id: i32, title: &str, hotel_ids: Vec<i32>) -> SavePackageParams {
        SavePackageParams {
            destination_id,
            title: title.to_string(),
            slug: None,
            description: None,
            duration_days: 4,
            price: 120_000,
            discounted_price: None,
            child_price: None,
            image_url: None,
            gallery: Vec::new(),
            itinerary: Vec::new(),
            included: Vec::new(),
            excluded: Vec::new(),
            featured: false,
            active: true,
            hotel_ids,
        }
    }

    #[test]
    fn derives_slug_from_title() {
        assert_eq!(resolve_slug(None, "Cairo & Luxor").unwrap(), "cairo-luxor");
        assert_eq!(resolve_slug(Some("My Slug"), "ignored").unwrap(), "my-slug");
        assert!(matches!(
            resolve_slug(None, "رحلة"),
            Err(AppError::BadRequest(_))
        ));
    }

    /// Tests creating a package with a generated slug and linked hotel.
    ///
    /// Expected: slug derived from the title and the hotel listed in the detail
    #[tokio::test]
    async fn creates_with_generated_slug() -> Result<(), AppError> {
        let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();
        let destination = factory::create_destination(db).await?;
        let hotel = factory::create_hotel(db).await?;

        let detail = PackageService::new(db)
            .create(params(destination.id, "Nile Cruise Week", vec![hotel.id]))
            .await?;

        assert_eq!(detail.package.slug, "nile-cruise-week");
        assert_eq!(detail.hotels.len(), 1);
        assert_eq!(detail.hotels[0].id, hotel.id);

        Ok(())
    }

    /// Tests that a second package with the same title conflicts on slug.
    ///
    /// Expected: Err(AppError::Conflict)
    #[tokio::test]
    async fn rejects_duplicate_slug() -> Result<(), AppError> {
        let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();
        let destination = factory::create_destination(db).await?;

        let service = PackageService::new(db);
        service
            .create(params(destination.id, "Petra Explorer", vec![]))
            .await?;
        let result = service
            .create(params(destination.id, "Petra Explorer", vec![]))
            .await;

        assert!(matches!(result, Err(AppError::Conflict(_))));

        Ok(())
    }

    /// Tests that unknown hotel IDs are rejected.
    ///
    /// Expected: Err(AppError::BadRequest)
    #[tokio::test]
    async fn rejects_unknown_hotel() -> Result<(), AppError> {
        let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();
        let destination = factory::create_destination(db).await?;

        let result = PackageService::new(db)
            .create(params(destination.id, "Ghost Hotels", vec![9999]))
            .await;

        assert!(matches!(result, Err(AppError::BadRequest(_))));

        Ok(())
    }

    /// Tests that inactive packages are hidden from public lookups.
    ///
    /// Expected: None with active_only, Some for admin lookups
    #[tokio::test]
    async fn hides_inactive_from_public() -> Result<(), AppError> {
        let test = TestBuilder::new().with_catalog_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();
        let destination = factory::create_destination(db).await?;
        let package = factory::package::PackageFactory::new(db, destination.id)
            .active(false)
            .build()
            .await?;

        let service = PackageService::new(db);

        assert!(service.get_by_id(package.id, true).await?.is_none());
        assert!(service.get_by_slug(&package.slug, true).await?.is_none());
        assert!(service.get_by_id(package.id, false).await?.is_some());

        Ok(())
    }
}
