//! Application state shared across all request handlers.
//!
//! The state is built once during startup and cloned into each handler through Axum's
//! state extraction. Every field is cheap to clone: the database connection and the
//! reqwest client are pools, and the admin code service and config sit behind `Arc`.

use std::sync::Arc;

use sea_orm::DatabaseConnection;

use super::{config::Config, service::admin::code::AdminCodeService};

#[derive(Clone)]
pub struct AppState {
    /// Connection pool for the SQLite database.
    pub db: DatabaseConnection,

    /// HTTP client for the machine translation provider.
    pub http_client: reqwest::Client,

    /// Holds the one-time admin setup code while no admin account exists.
    pub admin_code_service: AdminCodeService,

    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(
        db: DatabaseConnection,
        http_client: reqwest::Client,
        admin_code_service: AdminCodeService,
        config: Arc<Config>,
    ) -> Self {
        Self {
            db,
            http_client,
            admin_code_service,
            config,
        }
    }
}
