use crate::server::{data::cart_item::CartItemRepository, model::cart::CartOwner};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory, factory::cart_item::CartItemFactory};

mod assign_guest_items_to_user;
mod delete_guest_items_before;
mod get_by_owner;
mod update_quantity;
