use chrono::{DateTime, NaiveDate, Utc};
use entity::sea_orm_active_enums::BookingStatus;

use crate::model::booking::{BookingDto, BookingStatusDto, CreateBookingDto};

#[derive(Debug, Clone, PartialEq)]
pub struct Booking {
    pub id: i32,
    pub user_id: i32,
    pub package_id: i32,
    pub travel_date: NaiveDate,
    pub adults: i32,
    pub children: i32,
    pub total_price: i64,
    pub status: BookingStatus,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Booking {
    pub fn into_dto(self) -> BookingDto {
        BookingDto {
            id: self.id,
            user_id: self.user_id,
            package_id: self.package_id,
            travel_date: self.travel_date,
            adults: self.adults,
            children: self.children,
            total_price: self.total_price,
            status: self.status.into(),
            notes: self.notes,
            created_at: self.created_at,
        }
    }

    pub fn from_entity(entity: entity::booking::Model) -> Self {
        Self {
            id: entity.id,
            user_id: entity.user_id,
            package_id: entity.package_id,
            travel_date: entity.travel_date,
            adults: entity.adults,
            children: entity.children,
            total_price: entity.total_price,
            status: entity.status,
            notes: entity.notes,
            created_at: entity.created_at,
        }
    }
}

impl From<BookingStatus> for BookingStatusDto {
    fn from(value: BookingStatus) -> Self {
        match value {
            BookingStatus::Pending => BookingStatusDto::Pending,
            BookingStatus::Confirmed => BookingStatusDto::Confirmed,
            BookingStatus::Cancelled => BookingStatusDto::Cancelled,
            BookingStatus::Completed => BookingStatusDto::Completed,
        }
    }
}

impl From<BookingStatusDto> for BookingStatus {
    fn from(value: BookingStatusDto) -> Self {
        match value {
            BookingStatusDto::Pending => BookingStatus::Pending,
            BookingStatusDto::Confirmed => BookingStatus::Confirmed,
            BookingStatusDto::Cancelled => BookingStatus::Cancelled,
            BookingStatusDto::Completed => BookingStatus::Completed,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateBookingParams {
    pub package_id: i32,
    pub travel_date: NaiveDate,
    pub adults: i32,
    pub children: i32,
    pub notes: Option<String>,
}

impl CreateBookingParams {
    pub fn from_dto(dto: CreateBookingDto) -> Self {
        Self {
            package_id: dto.package_id,
            travel_date: dto.travel_date,
            adults: dto.adults,
            children: dto.children,
            notes: dto.notes.filter(|notes| !notes.trim().is_empty()),
        }
    }
}

/// Priced booking row ready for insertion.
#[derive(Debug, Clone)]
pub struct NewBooking {
    pub user_id: i32,
    pub package_id: i32,
    pub travel_date: NaiveDate,
    pub adults: i32,
    pub children: i32,
    pub total_price: i64,
    pub notes: Option<String>,
}
