use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::model::destination::default_true;

#[derive(Serialize, Deserialize, ToSchema, Clone, Debug, PartialEq)]
pub struct MenuDto {
    pub id: i32,
    pub name: String,
    pub location: String,
    pub active: bool,
}

/// Menu entry with its children, ordered by position.
#[derive(Serialize, Deserialize, ToSchema, Clone, Debug, PartialEq)]
pub struct MenuItemDto {
    pub id: i32,
    pub parent_id: Option<i32>,
    pub title: String,
    pub url: String,
    pub position: i32,
    #[schema(no_recursion)]
    pub children: Vec<MenuItemDto>,
}

#[derive(Serialize, Deserialize, ToSchema, Clone, Debug, PartialEq)]
pub struct MenuWithItemsDto {
    #[serde(flatten)]
    pub menu: MenuDto,
    pub items: Vec<MenuItemDto>,
}

#[derive(Deserialize, ToSchema, Validate, Debug, Clone)]
pub struct SaveMenuDto {
    #[validate(length(min = 1, max = 80))]
    pub name: String,
    #[validate(length(min = 1, max = 40))]
    pub location: String,
    #[serde(default = "default_true")]
    pub active: bool,
}

#[derive(Deserialize, ToSchema, Validate, Debug, Clone)]
pub struct SaveMenuItemDto {
    pub parent_id: Option<i32>,
    #[validate(length(min = 1, max = 120))]
    pub title: String,
    #[validate(length(min = 1, max = 500))]
    pub url: String,
    #[serde(default)]
    pub position: i32,
}
