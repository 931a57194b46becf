use crate::server::{
    data::menu::MenuRepository,
    model::menu::{SaveMenuItemParams, SaveMenuParams},
};
use sea_orm::DbErr;
use test_utils::builder::TestBuilder;

mod delete_item;
mod find_active_by_location;

fn item(parent_id: Option<i32>, title: &str, position: i32) -> SaveMenuItemParams {
    SaveMenuItemParams {
        parent_id,
        title: title.to_string(),
        url: format!("/{}", title.to_lowercase()),
        position,
    }
}
