use crate::server::{data::booking::BookingRepository, model::booking::NewBooking};
use chrono::NaiveDate;
use entity::sea_orm_active_enums::BookingStatus;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod get_by_user;
mod update_status;

fn new_booking(user_id: i32, package_id: i32) -> NewBooking {
    NewBooking {
        user_id,
        package_id,
        travel_date: NaiveDate::from_ymd_opt(2030, 5, 1).unwrap(),
        adults: 2,
        children: 1,
        total_price: 250_000,
        notes: None,
    }
}
