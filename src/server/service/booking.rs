use chrono::Utc;
use entity::sea_orm_active_enums::BookingStatus;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::{booking::BookingRepository, package::PackageRepository},
    error::AppError,
    model::{
        booking::{Booking, CreateBookingParams, NewBooking},
        cart::Pax,
        pagination::{PageParams, Paginated},
    },
    service::pricing::{self, PriceRequest, Priceable},
};

/// Direct package bookings, outside the cart.
pub struct BookingService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BookingService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Books a package for the user, priced with the package pricing rules.
    ///
    /// # Returns
    /// - `Ok(Booking)` - Pending booking
    /// - `Err(AppError::NotFound)` - Package missing or inactive
    /// - `Err(AppError::BadRequest)` - Travel date in the past
    pub async fn create(
        &self,
        user_id: i32,
        params: CreateBookingParams,
    ) -> Result<Booking, AppError> {
        if params.travel_date < Utc::now().date_naive() {
            return Err(AppError::BadRequest(
                "Travel date must not be in the past".to_string(),
            ));
        }

        let package = PackageRepository::new(self.db)
            .find_by_id(params.package_id)
            .await?
            .filter(|p| p.active)
            .ok_or_else(|| {
                AppError::NotFound(format!("Package {} not found", params.package_id))
            })?;

        let quote = pricing::quote(
            &Priceable::Package {
                price: package.price,
                discounted_price: package.discounted_price,
                child_price: package.child_price,
            },
            &PriceRequest {
                pax: Pax {
                    adults: params.adults,
                    children: params.children,
                    infants: 0,
                },
                quantity: 1,
                check_in: None,
                check_out: None,
                multiplier_percent: None,
            },
        )?;

        let booking = BookingRepository::new(self.db)
            .create(NewBooking {
                user_id,
                package_id: package.id,
                travel_date: params.travel_date,
                adults: params.adults,
                children: params.children,
                total_price: quote.total_price,
                notes: params.notes,
            })
            .await?;

        tracing::info!(
            "User {} booked package {} for {}",
            user_id,
            package.id,
            booking.travel_date
        );

        Ok(booking)
    }

    pub async fn get_for_user(&self, user_id: i32) -> Result<Vec<Booking>, AppError> {
        Ok(BookingRepository::new(self.db).get_by_user(user_id).await?)
    }

    pub async fn get_paginated(
        &self,
        status: Option<BookingStatus>,
        page: PageParams,
    ) -> Result<Paginated<Booking>, AppError> {
        let (bookings, total) = BookingRepository::new(self.db)
            .get_all_paginated(status, page.page, page.per_page)
            .await?;

        Ok(Paginated::new(bookings, total, page))
    }

    pub async fn update_status(
        &self,
        id: i32,
        status: BookingStatus,
    ) -> Result<Option<Booking>, AppError> {
        Ok(BookingRepository::new(self.db)
            .update_status(id, status)
            .await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use test_utils::{builder::TestBuilder, factory};

    fn params(package_id: i32, days_ahead: i64) -> CreateBookingParams {
        CreateBookingParams {
            package_id,
            travel_date: Utc::now().date_naive() + Duration::days(days_ahead),
            adults: 2,
            children: 1,
            notes: None,
        }
    }

    /// Tests booking a package with a child price.
    ///
    /// Expected: total = 2 adults + 1 child, status pending
    #[tokio::test]
    async fn prices_booking() -> Result<(), AppError> {
        let test = TestBuilder::new().with_commerce_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();
        let user = factory::create_user(db).await?;
        let destination = factory::create_destination(db).await?;
        let package = factory::package::PackageFactory::new(db, destination.id)
            .price(90_000)
            .child_price(Some(30_000))
            .build()
            .await?;

        let booking = BookingService::new(db)
            .create(user.id, params(package.id, 10))
            .await?;

        assert_eq!(booking.total_price, 210_000);
        assert_eq!(booking.status, BookingStatus::Pending);

        Ok(())
    }

    /// Tests booking with a travel date in the past.
    ///
    /// Expected: Err(AppError::BadRequest)
    #[tokio::test]
    async fn rejects_past_travel_date() -> Result<(), AppError> {
        let test = TestBuilder::new().with_commerce_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();
        let user = factory::create_user(db).await?;
        let (_, package) = factory::helpers::create_package_with_destination(db).await?;

        let result = BookingService::new(db)
            .create(user.id, params(package.id, -1))
            .await;

        assert!(matches!(result, Err(AppError::BadRequest(_))));

        Ok(())
    }

    /// Tests booking a package that does not exist.
    ///
    /// Expected: Err(AppError::NotFound)
    #[tokio::test]
    async fn rejects_missing_package() -> Result<(), AppError> {
        let test = TestBuilder::new().with_commerce_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();
        let user = factory::create_user(db).await?;

        let result = BookingService::new(db).create(user.id, params(404, 3)).await;

        assert!(matches!(result, Err(AppError::NotFound(_))));

        Ok(())
    }
}
