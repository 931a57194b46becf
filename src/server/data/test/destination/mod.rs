use crate::server::{
    data::destination::DestinationRepository,
    model::destination::{DestinationFilter, SaveDestinationParams},
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod deactivate;
mod get_all;
mod update;
