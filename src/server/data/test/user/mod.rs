use crate::server::{data::user::UserRepository, model::user::NewUser};
use entity::sea_orm_active_enums::UserRole;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod admin_exists;
mod create;
mod get_all_paginated;
mod username_exists;

fn new_user(username: &str, role: UserRole) -> NewUser {
    NewUser {
        username: username.to_string(),
        email: format!("{}@example.com", username),
        password_hash: "hash".to_string(),
        full_name: None,
        role,
    }
}
