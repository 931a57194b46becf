use crate::server::{
    data::package::PackageRepository,
    model::package::{ItineraryDay, ProductFilter, SavePackageParams},
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create;
mod get_all;
mod slug_exists;
mod update;

fn params(destination_id: i32, hotel_ids: Vec<i32>) -> SavePackageParams {
    SavePackageParams {
        destination_id,
        title: "Cairo Highlights".to_string(),
        slug: None,
        description: None,
        duration_days: 4,
        price: 120_000,
        discounted_price: Some(99_000),
        child_price: None,
        image_url: None,
        gallery: vec!["/uploads/pyramids.jpg".to_string()],
        itinerary: vec![ItineraryDay {
            day: 1,
            title: "Arrival".to_string(),
            description: "Transfer to the hotel".to_string(),
        }],
        included: vec!["Breakfast".to_string()],
        excluded: vec![],
        featured: false,
        active: true,
        hotel_ids,
    }
}
