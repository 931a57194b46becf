//! Booking data repository.
//!
//! Bookings are direct package reservations made by logged-in users outside the cart.

use chrono::Utc;
use entity::sea_orm_active_enums::BookingStatus;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QueryTrait,
};

use crate::server::model::booking::{Booking, NewBooking};

pub struct BookingRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BookingRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a priced booking in `Pending` status.
    pub async fn create(&self, booking: NewBooking) -> Result<Booking, DbErr> {
        let entity = entity::booking::ActiveModel {
            user_id: ActiveValue::Set(booking.user_id),
            package_id: ActiveValue::Set(booking.package_id),
            travel_date: ActiveValue::Set(booking.travel_date),
            adults: ActiveValue::Set(booking.adults),
            children: ActiveValue::Set(booking.children),
            total_price: ActiveValue::Set(booking.total_price),
            status: ActiveValue::Set(BookingStatus::Pending),
            notes: ActiveValue::Set(booking.notes),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Booking::from_entity(entity))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Booking>, DbErr> {
        let entity = entity::prelude::Booking::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Booking::from_entity))
    }

    /// Gets all bookings of a user, newest first.
    pub async fn get_by_user(&self, user_id: i32) -> Result<Vec<Booking>, DbErr> {
        let entities = entity::prelude::Booking::find()
            .filter(entity::booking::Column::UserId.eq(user_id))
            .order_by_desc(entity::booking::Column::CreatedAt)
            .order_by_desc(entity::booking::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Booking::from_entity).collect())
    }

    /// Gets bookings with pagination for the admin listing, newest first.
    ///
    /// # Arguments
    /// - `status` - Only return bookings in this status when set
    /// - `page` - Zero-indexed page number
    /// - `per_page` - Number of bookings per page
    pub async fn get_all_paginated(
        &self,
        status: Option<BookingStatus>,
        page: u64,
        per_page: u64,
    ) -> Result<(Vec<Booking>, u64), DbErr> {
        let paginator = entity::prelude::Booking::find()
            .apply_if(status, |query, status| {
                query.filter(entity::booking::Column::Status.eq(status))
            })
            .order_by_desc(entity::booking::Column::Id)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let entities = paginator.fetch_page(page).await?;

        Ok((entities.into_iter().map(Booking::from_entity).collect(), total))
    }

    pub async fn update_status(
        &self,
        id: i32,
        status: BookingStatus,
    ) -> Result<Option<Booking>, DbErr> {
        let Some(existing) = entity::prelude::Booking::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active: entity::booking::ActiveModel = existing.into();
        active.status = ActiveValue::Set(status);
        let entity = active.update(self.db).await?;

        Ok(Some(Booking::from_entity(entity)))
    }

    pub async fn count(&self) -> Result<u64, DbErr> {
        entity::prelude::Booking::find().count(self.db).await
    }
}
