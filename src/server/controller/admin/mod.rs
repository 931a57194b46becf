//! Back-office endpoints under `/api/admin`.
//!
//! Every handler requires a logged-in admin: 401 without a session, 403 for other users.

pub mod catalog;
pub mod content;
pub mod geo;
pub mod sales;
pub mod upload;
pub mod user;

use axum::http::StatusCode;
use tower_sessions::Session;

use crate::server::{
    error::AppError,
    middleware::auth::{AuthGuard, Permission},
    model::user::User,
    state::AppState,
};

async fn require_admin(state: &AppState, session: &Session) -> Result<User, AppError> {
    AuthGuard::new(&state.db, session)
        .require(&[Permission::Admin])
        .await
}

fn not_found(what: &str) -> AppError {
    AppError::NotFound(format!("{} not found", what))
}

/// Maps the outcome of a delete to 204, or 404 when nothing matched.
fn deleted(removed: bool, what: &str) -> Result<StatusCode, AppError> {
    if removed {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(not_found(what))
    }
}
