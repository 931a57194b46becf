use std::{path::PathBuf, sync::Arc};

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use sea_orm::DatabaseConnection;
use test_utils::{builder::TestBuilder, factory};

use crate::{
    model::{
        cart::{AddCartItemDto, ItemTypeDto},
        order::{CheckoutDto, PaymentMethodDto},
        user::{LoginDto, RegisterDto},
    },
    server::{
        config::Config,
        error::AppError,
        middleware::session::AuthSession,
        service::admin::code::AdminCodeService,
        state::AppState,
    },
};

mod admin;
mod auth;
mod cart;
mod catalog;

fn test_state(db: &DatabaseConnection) -> AppState {
    let config = Config {
        database_url: "sqlite::memory:".to_string(),
        app_url: "http://localhost:8080".to_string(),
        bind_address: "127.0.0.1:0".to_string(),
        upload_dir: PathBuf::from("uploads"),
        max_upload_bytes: 1024,
        translation_scan_dir: PathBuf::from("client/src"),
        gemini_api_key: None,
        gemini_model: "gemini-1.5-flash".to_string(),
        cart_retention_days: 30,
    };

    AppState::new(
        db.clone(),
        reqwest::Client::new(),
        AdminCodeService::new(),
        Arc::new(config),
    )
}

fn register_dto(username: &str, admin_code: Option<String>) -> RegisterDto {
    RegisterDto {
        username: username.to_string(),
        email: format!("{}@example.com", username),
        password: "secret-pass".to_string(),
        full_name: None,
        admin_code,
    }
}

fn add_package_dto(package_id: i32) -> AddCartItemDto {
    AddCartItemDto {
        item_type: ItemTypeDto::Package,
        item_id: package_id,
        quantity: 1,
        adults: 2,
        children: 0,
        infants: 0,
        travel_date: Some(chrono::Utc::now().date_naive() + chrono::Duration::days(14)),
        check_in: None,
        check_out: None,
        transport_type_id: None,
    }
}
