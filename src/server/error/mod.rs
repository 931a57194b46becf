//! Error types and HTTP response handling.
//!
//! This module provides the application's error hierarchy and conversion logic for
//! transforming errors into appropriate HTTP responses. The `AppError` enum serves
//! as the top-level error type that wraps domain-specific errors and implements
//! `IntoResponse` for automatic error handling in API endpoints.

pub mod auth;
pub mod config;
pub mod internal;
pub mod pricing;
pub mod translation;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use sea_orm::SqlErr;
use thiserror::Error;
use validator::{ValidationErrors, ValidationErrorsKind};

use crate::{
    model::api::ErrorDto,
    server::error::{
        auth::AuthError, config::ConfigError, internal::InternalError, pricing::PricingError,
        translation::TranslationError,
    },
};

/// Top-level application error type.
///
/// Aggregates all possible error types that can occur in the application and provides
/// automatic conversion to HTTP responses. Most variants use `#[from]` for automatic
/// error conversion. Domain-specific errors like `AuthError` handle their own response
/// mapping, while generic variants provide standard HTTP status codes.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Authentication or authorization error.
    ///
    /// Delegates to `AuthError::into_response()` for 400/401/403 mapping.
    #[error(transparent)]
    AuthErr(#[from] AuthError),

    /// Price calculation rejected the requested traveller counts or dates.
    ///
    /// Results in 400 Bad Request.
    #[error(transparent)]
    PricingErr(#[from] PricingError),

    /// Machine translation or translation key scanning failure.
    ///
    /// Delegates to `TranslationError::into_response()`.
    #[error(transparent)]
    TranslationErr(#[from] TranslationError),

    /// Unexpected state inside the application.
    ///
    /// Results in 500 Internal Server Error with details logged server-side.
    #[error(transparent)]
    InternalErr(#[from] InternalError),

    /// Database operation error from SeaORM.
    ///
    /// Unique constraint violations result in 409 Conflict, anything else in
    /// 500 Internal Server Error with error details logged server-side.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// SQLx database driver error.
    #[error(transparent)]
    SqlxErr(#[from] sea_orm::SqlxError),

    /// Session store operation error.
    #[error(transparent)]
    SessionErr(#[from] tower_sessions::session::Error),

    /// HTTP client request error from reqwest.
    #[error(transparent)]
    ReqwestErr(#[from] reqwest::Error),

    /// Cron scheduler error.
    #[error(transparent)]
    SchedulerErr(#[from] tokio_cron_scheduler::JobSchedulerError),

    /// Filesystem or socket error.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),

    /// Request body failed `validator` checks.
    ///
    /// Results in 400 Bad Request listing each offending field.
    #[error("{}", validation_message(.0))]
    ValidationErr(#[from] ValidationErrors),

    /// Resource not found error.
    ///
    /// Results in 404 Not Found with the provided error message.
    #[error("{0}")]
    NotFound(String),

    /// Invalid request error.
    ///
    /// Results in 400 Bad Request with the provided error message.
    #[error("{0}")]
    BadRequest(String),

    /// Request conflicts with existing data, such as a duplicate username or slug.
    ///
    /// Results in 409 Conflict with the provided error message.
    #[error("{0}")]
    Conflict(String),

    /// Internal server error with custom message.
    ///
    /// Results in 500 Internal Server Error. The provided message is logged
    /// but a generic message is returned to the client.
    #[error("{0}")]
    InternalError(String),
}

/// Flattens validation errors into `field: message` pairs sorted by field name.
fn validation_message(errors: &ValidationErrors) -> String {
    let mut parts: Vec<String> = errors
        .errors()
        .iter()
        .map(|(field, kind)| match kind {
            ValidationErrorsKind::Field(field_errors) => {
                let messages: Vec<String> = field_errors
                    .iter()
                    .map(|err| match &err.message {
                        Some(message) => message.to_string(),
                        None => format!("is invalid ({})", err.code),
                    })
                    .collect();
                format!("{}: {}", field, messages.join(", "))
            }
            ValidationErrorsKind::Struct(_) | ValidationErrorsKind::List(_) => {
                format!("{}: contains invalid entries", field)
            }
        })
        .collect();
    parts.sort();

    parts.join("; ")
}

fn error_response(status: StatusCode, message: String) -> Response {
    (status, Json(ErrorDto { error: message })).into_response()
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - For `BadRequest`, `ValidationErr` and `PricingErr`
/// - 404 Not Found - For `NotFound`
/// - 409 Conflict - For `Conflict` and unique constraint violations
/// - Variable - For `AuthErr` and `TranslationErr`, delegated to their own mapping
/// - 500 Internal Server Error - For all other error types
impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        match self {
            Self::AuthErr(err) => err.into_response(),
            Self::TranslationErr(err) => err.into_response(),
            Self::PricingErr(err) => error_response(StatusCode::BAD_REQUEST, err.to_string()),
            Self::ValidationErr(errors) => {
                error_response(StatusCode::BAD_REQUEST, validation_message(&errors))
            }
            Self::NotFound(msg) => error_response(StatusCode::NOT_FOUND, msg),
            Self::BadRequest(msg) => error_response(StatusCode::BAD_REQUEST, msg),
            Self::Conflict(msg) => error_response(StatusCode::CONFLICT, msg),
            Self::DbErr(err) => match err.sql_err() {
                Some(SqlErr::UniqueConstraintViolation(detail)) => {
                    tracing::debug!("Unique constraint violation: {}", detail);
                    error_response(
                        StatusCode::CONFLICT,
                        "A record with the same unique value already exists".to_string(),
                    )
                }
                _ => InternalServerError(err).into_response(),
            },
            Self::InternalError(msg) => {
                tracing::error!("Internal error: {}", msg);
                error_response(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// This struct logs the error message and returns a generic "Internal server error" message
/// to the client to avoid leaking implementation details.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        error_response(
            StatusCode::INTERNAL_SERVER_ERROR,
            "Internal server error".to_string(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[derive(Validate)]
    struct Payload {
        #[validate(length(min = 3, message = "must be at least 3 characters"))]
        username: String,
        #[validate(range(min = 1))]
        adults: i32,
    }

    #[test]
    fn validation_errors_are_listed_by_field() {
        let payload = Payload {
            username: "ab".to_string(),
            adults: 0,
        };
        let errors = payload.validate().unwrap_err();

        let message = validation_message(&errors);

        assert_eq!(
            message,
            "adults: is invalid (range); username: must be at least 3 characters"
        );
    }

    #[test]
    fn maps_status_codes() {
        let cases = [
            (AppError::NotFound("x".into()), StatusCode::NOT_FOUND),
            (AppError::BadRequest("x".into()), StatusCode::BAD_REQUEST),
            (AppError::Conflict("x".into()), StatusCode::CONFLICT),
            (
                AppError::InternalError("x".into()),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
            (
                AppError::AuthErr(AuthError::UserNotInSession),
                StatusCode::UNAUTHORIZED,
            ),
            (
                AppError::PricingErr(PricingError::InvalidQuantity),
                StatusCode::BAD_REQUEST,
            ),
        ];

        for (error, expected) in cases {
            assert_eq!(error.into_response().status(), expected);
        }
    }
}
