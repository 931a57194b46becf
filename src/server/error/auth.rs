use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// No user ID is stored in the session.
    ///
    /// Results in a 401 Unauthorized response.
    #[error("User not found in session")]
    UserNotInSession,

    /// Session refers to a user that no longer exists.
    ///
    /// Results in a 401 Unauthorized response.
    #[error("User {0} from session not found in database")]
    UserNotInDatabase(i32),

    /// Authenticated user lacks the required permission.
    ///
    /// The message is logged for diagnostics; the client receives a generic 403.
    #[error("User {0} denied access: {1}")]
    AccessDenied(i32, String),

    /// Username and password do not match a stored account.
    ///
    /// Results in a 401 Unauthorized response.
    #[error("Invalid username or password")]
    InvalidCredentials,

    /// Registration supplied an admin setup code that is wrong or expired.
    ///
    /// Results in a 400 Bad Request response.
    #[error("Invalid or expired admin code")]
    InvalidAdminCode,
}

/// Converts authentication errors into HTTP responses.
///
/// - `UserNotInSession` / `UserNotInDatabase` → 401 Unauthorized with "Not authenticated"
/// - `InvalidCredentials` → 401 Unauthorized with "Invalid username or password"
/// - `AccessDenied` → 403 Forbidden with "Access denied"
/// - `InvalidAdminCode` → 400 Bad Request
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            Self::UserNotInSession | Self::UserNotInDatabase(_) => {
                tracing::debug!("{}", self);
                (StatusCode::UNAUTHORIZED, "Not authenticated".to_string())
            }
            Self::AccessDenied(_, _) => {
                tracing::debug!("{}", self);
                (StatusCode::FORBIDDEN, "Access denied".to_string())
            }
            Self::InvalidCredentials => (StatusCode::UNAUTHORIZED, self.to_string()),
            Self::InvalidAdminCode => (StatusCode::BAD_REQUEST, self.to_string()),
        };

        (status, Json(ErrorDto { error: message })).into_response()
    }
}
